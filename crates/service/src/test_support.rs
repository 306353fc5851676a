#![cfg(test)]
use std::sync::Arc;

use common::clock::FixedClock;
use sea_orm::DatabaseConnection;

use crate::timesheet::{SeaOrmTimesheetRepository, TimesheetService};

pub const TODAY: (i32, u32, u32) = (2024, 5, 14);

pub fn fixed_clock() -> FixedClock {
    let (y, m, d) = TODAY;
    FixedClock::ymd(y, m, d).expect("valid date")
}

/// Fresh migrated in-memory database; each call is isolated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_and_migrate(&configs::DatabaseConfig::in_memory()).await
}

pub async fn seaorm_service() -> Result<(TimesheetService<SeaOrmTimesheetRepository>, DatabaseConnection), anyhow::Error> {
    let db = get_db().await?;
    let repo = Arc::new(SeaOrmTimesheetRepository { db: db.clone() });
    Ok((TimesheetService::new(repo, Arc::new(fixed_clock())), db))
}
