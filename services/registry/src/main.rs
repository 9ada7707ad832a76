use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use signup_core::tracing::init_tracing;
use signup_registry::auth::Credentials;
use signup_registry::config::RegistryConfig;
use signup_registry::infra::audit::FileAuditLog;
use signup_registry::router::build_router;
use signup_registry::state::AppState;
use signup_registry_migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RegistryConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to apply migrations")?;

    let audit_log = FileAuditLog::open(&config.audit_log_path).await?;
    info!(path = %audit_log.path().display(), "audit log opened");

    let credentials = Credentials::from_pairs(config.basic_auth_users);
    info!(accounts = credentials.len(), "basic auth credentials loaded");

    let state = AppState {
        db,
        audit_log,
        credentials: Arc::new(credentials),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.registry_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("registry service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
