#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::types::{NewRegistration, Registration};
use crate::error::RegistryError;

/// Store of user registrations.
///
/// Every mutating call either commits fully or leaves the store untouched.
pub trait RegistrationRepository: Send + Sync {
    /// Insert a new record. Returns `DuplicateRecord` if the email or name is taken.
    async fn create(&self, registration: &NewRegistration)
    -> Result<Registration, RegistryError>;

    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<Registration>, RegistryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, RegistryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, RegistryError>;

    /// Overwrite the email of the record currently holding `current_email`.
    ///
    /// `new_email` is not checked against other records here; the unique index
    /// on `email` still rejects a colliding commit with `DuplicateRecord`.
    async fn update_email(&self, current_email: &str, new_email: &str)
    -> Result<(), RegistryError>;

    /// Returns `RegistrationNotFound` if no record has this id.
    async fn delete_by_id(&self, id: i32) -> Result<(), RegistryError>;
}

/// Append-only log of registration creation events.
pub trait AuditLog: Send + Sync {
    async fn record_creation(&self, name: &str, at: DateTime<Utc>) -> Result<(), RegistryError>;
}
