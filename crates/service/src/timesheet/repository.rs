use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use models::timesheet_entry::{self, EntryPatch, Model, NewEntry};

use crate::errors::ServiceError;

const ENTITY: &str = "entry";

/// Persistence for timesheet entries. Every mutating call is atomic.
#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    async fn list_for_date(&self, date: &str) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, input: NewEntry, date: &str) -> Result<Model, ServiceError>;
    /// Missing row wins over a missing patch: `NotFound` is checked first.
    async fn update(&self, id: i32, patch: Option<EntryPatch>) -> Result<Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

fn missing_body() -> ServiceError {
    ServiceError::Validation("request body missing or not valid JSON".into())
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmTimesheetRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl TimesheetRepository for SeaOrmTimesheetRepository {
    async fn list_for_date(&self, date: &str) -> Result<Vec<Model>, ServiceError> {
        Ok(timesheet_entry::list_for_date(&self.db, date).await?)
    }

    async fn create(&self, input: NewEntry, date: &str) -> Result<Model, ServiceError> {
        let date = date.to_string();
        let created = self
            .db
            .transaction::<_, Model, ServiceError>(|txn| {
                Box::pin(async move { Ok(timesheet_entry::create(txn, input, &date).await?) })
            })
            .await?;
        Ok(created)
    }

    async fn update(&self, id: i32, patch: Option<EntryPatch>) -> Result<Model, ServiceError> {
        let updated = self
            .db
            .transaction::<_, Model, ServiceError>(|txn| {
                Box::pin(async move {
                    let existing = timesheet_entry::find(txn, id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found(ENTITY))?;
                    let patch = patch.ok_or_else(missing_body)?;
                    Ok(timesheet_entry::apply_patch(txn, existing, patch).await?)
                })
            })
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.db
            .transaction::<_, (), ServiceError>(|txn| {
                Box::pin(async move {
                    if !timesheet_entry::delete(txn, id).await? {
                        return Err(ServiceError::not_found(ENTITY));
                    }
                    Ok(())
                })
            })
            .await?;
        Ok(())
    }
}
