use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;

use signup_registry::auth::Credentials;
use signup_registry::domain::repository::RegistrationRepository;
use signup_registry::domain::types::Registration;
use signup_registry::infra::audit::FileAuditLog;
use signup_registry::infra::db::DbRegistrationRepository;
use signup_registry::router::build_router;
use signup_registry::state::AppState;
use signup_registry_migration::Migrator;

// ── TestApp ──────────────────────────────────────────────────────────────────

/// The real router over a fresh in-memory database and a temp-dir audit log.
pub struct TestApp {
    pub server: TestServer,
    pub repo: DbRegistrationRepository,
    pub audit_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        // One connection: every pooled `:memory:` connection would be its own database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let audit_path = dir.path().join("creation.log");
        let audit_log = FileAuditLog::open(&audit_path).await.unwrap();

        let state = AppState {
            db: db.clone(),
            audit_log,
            credentials: Arc::new(Credentials::from_pairs(TEST_ACCOUNTS)),
        };
        let server = TestServer::new(build_router(state)).unwrap();

        Self {
            server,
            repo: DbRegistrationRepository { db },
            audit_path,
            _dir: dir,
        }
    }

    pub async fn create(&self, email: &str, name: &str, password: &str) -> TestResponse {
        self.server
            .post("/create/")
            .form(&[("email", email), ("name", name), ("password", password)])
            .await
    }

    pub async fn update(&self, current_email: &str, new_email: &str) -> TestResponse {
        self.server
            .post("/update/")
            .form(&[("cemail", current_email), ("nemail", new_email)])
            .await
    }

    pub async fn delete(&self, id: &str) -> TestResponse {
        self.server
            .post("/delete/")
            .form(&[("del_id", id)])
            .await
    }

    pub async fn records(&self) -> Vec<Registration> {
        self.repo.list_all().await.unwrap()
    }

    pub async fn audit_lines(&self) -> Vec<String> {
        tokio::fs::read_to_string(&self.audit_path)
            .await
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

// ── Assertions ───────────────────────────────────────────────────────────────

pub fn assert_outcome(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());
    let body = response.text();
    assert!(
        body.contains(message),
        "expected {message:?} in response body:\n{body}"
    );
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const TEST_ACCOUNTS: [(&str, &str); 2] = [("andy", "password"), ("test", "pwd")];

pub fn basic_auth(user: &str, password: &str) -> HeaderValue {
    let encoded = STANDARD.encode(format!("{user}:{password}"));
    HeaderValue::from_str(&format!("Basic {encoded}")).unwrap()
}
