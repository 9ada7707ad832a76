use axum::http::StatusCode;

use crate::domain::types::Field;

/// Registry service domain error variants.
///
/// Handlers match on these exhaustively and render a route-specific message;
/// the variants stay distinct even where that message is shared.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("email or name already on record")]
    DuplicateRecord,
    #[error("registration not found")]
    RegistrationNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RegistryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::DuplicateRecord => "DUPLICATE_RECORD",
            Self::RegistrationNotFound => "REGISTRATION_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateRecord => StatusCode::CONFLICT,
            Self::RegistrationNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
