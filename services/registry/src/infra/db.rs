use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use signup_registry_schema::registrations;

use crate::domain::repository::RegistrationRepository;
use crate::domain::types::{NewRegistration, Registration};
use crate::error::RegistryError;

// ── Registration repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegistrationRepository {
    pub db: DatabaseConnection,
}

impl RegistrationRepository for DbRegistrationRepository {
    async fn create(
        &self,
        registration: &NewRegistration,
    ) -> Result<Registration, RegistryError> {
        let model = registrations::ActiveModel {
            email: Set(registration.email.clone()),
            name: Set(registration.name.clone()),
            password: Set(registration.password.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "create registration"))?;
        Ok(registration_from_model(model))
    }

    async fn list_all(&self) -> Result<Vec<Registration>, RegistryError> {
        let models = registrations::Entity::find()
            .order_by_asc(registrations::Column::Id)
            .all(&self.db)
            .await
            .context("list registrations")?;
        Ok(models.into_iter().map(registration_from_model).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, RegistryError> {
        let model = registrations::Entity::find()
            .filter(registrations::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find registration by email")?;
        Ok(model.map(registration_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, RegistryError> {
        let model = registrations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find registration by id")?;
        Ok(model.map(registration_from_model))
    }

    async fn update_email(
        &self,
        current_email: &str,
        new_email: &str,
    ) -> Result<(), RegistryError> {
        let txn = self.db.begin().await.context("begin email update")?;
        let model = registrations::Entity::find()
            .filter(registrations::Column::Email.eq(current_email))
            .one(&txn)
            .await
            .context("find registration by email")?
            .ok_or(RegistryError::RegistrationNotFound)?;
        let mut am = model.into_active_model();
        am.email = Set(new_email.to_owned());
        am.update(&txn)
            .await
            .map_err(|e| write_error(e, "update registration email"))?;
        txn.commit().await.context("commit email update")?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RegistryError> {
        let result = registrations::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete registration")?;
        if result.rows_affected == 0 {
            return Err(RegistryError::RegistrationNotFound);
        }
        Ok(())
    }
}

/// Unique-index violations become `DuplicateRecord`; everything else is internal.
fn write_error(err: DbErr, context: &'static str) -> RegistryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return RegistryError::DuplicateRecord;
    }
    RegistryError::Internal(anyhow::Error::new(err).context(context))
}

fn registration_from_model(model: registrations::Model) -> Registration {
    Registration {
        id: model.id,
        email: model.email,
        name: model.name,
        password: model.password,
    }
}
