use chrono::Utc;
use tracing::{info, warn};

use crate::domain::repository::{AuditLog, RegistrationRepository};
use crate::domain::types::{Field, NewRegistration, Registration, require};
use crate::error::RegistryError;

// ── CreateRegistration ───────────────────────────────────────────────────────

pub struct CreateRegistrationInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub struct CreateRegistrationUseCase<R: RegistrationRepository, A: AuditLog> {
    pub repo: R,
    pub audit: A,
}

impl<R: RegistrationRepository, A: AuditLog> CreateRegistrationUseCase<R, A> {
    /// Fields are checked email → name → password, stopping at the first missing one.
    pub async fn execute(
        &self,
        input: CreateRegistrationInput,
    ) -> Result<Registration, RegistryError> {
        let email = require(Field::Email, input.email)?;
        let name = require(Field::Name, input.name)?;
        let password = require(Field::Password, input.password)?;

        let registration = self
            .repo
            .create(&NewRegistration {
                email,
                name,
                password,
            })
            .await?;
        info!(id = registration.id, "registration created");

        // The record is already committed; a failed audit append is reported, not returned.
        if let Err(e) = self
            .audit
            .record_creation(&registration.name, Utc::now())
            .await
        {
            warn!(error = %e, id = registration.id, "failed to append audit entry");
        }
        Ok(registration)
    }
}

// ── ListRegistrations ────────────────────────────────────────────────────────

pub struct ListRegistrationsUseCase<R: RegistrationRepository> {
    pub repo: R,
}

impl<R: RegistrationRepository> ListRegistrationsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Registration>, RegistryError> {
        self.repo.list_all().await
    }
}

// ── UpdateEmail ──────────────────────────────────────────────────────────────

pub struct UpdateEmailInput {
    pub current_email: String,
    pub new_email: String,
}

pub struct UpdateEmailUseCase<R: RegistrationRepository> {
    pub repo: R,
}

impl<R: RegistrationRepository> UpdateEmailUseCase<R> {
    pub async fn execute(&self, input: UpdateEmailInput) -> Result<(), RegistryError> {
        let current_email = require(Field::CurrentEmail, input.current_email)?;
        let new_email = require(Field::NewEmail, input.new_email)?;
        self.repo.update_email(&current_email, &new_email).await?;
        info!("registration email updated");
        Ok(())
    }
}

// ── DeleteRegistration ───────────────────────────────────────────────────────

pub struct DeleteRegistrationInput {
    pub id: String,
}

pub struct DeleteRegistrationUseCase<R: RegistrationRepository> {
    pub repo: R,
}

impl<R: RegistrationRepository> DeleteRegistrationUseCase<R> {
    /// An id that is not an integer cannot name a record, so it is reported as not found.
    pub async fn execute(&self, input: DeleteRegistrationInput) -> Result<(), RegistryError> {
        let raw_id = require(Field::DeleteId, input.id)?;
        let id: i32 = raw_id
            .trim()
            .parse()
            .map_err(|_| RegistryError::RegistrationNotFound)?;
        self.repo.delete_by_id(id).await?;
        info!(id, "registration deleted");
        Ok(())
    }
}
