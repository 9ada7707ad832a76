use crate::error::RegistryError;

/// A persisted user registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password: String,
}

/// A registration that has passed validation but has no id yet.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Form fields that must be present for a request to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Name,
    Password,
    CurrentEmail,
    NewEmail,
    DeleteId,
}

impl Field {
    /// Human-readable label used in "... is required" messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
            Self::Password => "Password",
            Self::CurrentEmail => "Current Email",
            Self::NewEmail => "New Email",
            Self::DeleteId => "ID",
        }
    }
}

/// Reject an absent or empty form value.
pub fn require(field: Field, value: String) -> Result<String, RegistryError> {
    if value.is_empty() {
        return Err(RegistryError::MissingField(field));
    }
    Ok(value)
}
