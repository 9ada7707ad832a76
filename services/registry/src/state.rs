use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::auth::Credentials;
use crate::infra::audit::FileAuditLog;
use crate::infra::db::DbRegistrationRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub audit_log: FileAuditLog,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn registration_repo(&self) -> DbRegistrationRepository {
        DbRegistrationRepository {
            db: self.db.clone(),
        }
    }

    pub fn audit_log(&self) -> FileAuditLog {
        self.audit_log.clone()
    }
}

impl FromRef<AppState> for Arc<Credentials> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.credentials)
    }
}
