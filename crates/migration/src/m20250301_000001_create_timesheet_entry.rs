//! Create `timesheet_entry` table.
//! One row per logged piece of work; `date` is the UTC day the row was created.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimesheetEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(TimesheetEntry::Id))
                    .col(string_len(TimesheetEntry::Task, 200).not_null())
                    .col(string_len(TimesheetEntry::Project, 100).not_null())
                    .col(string(TimesheetEntry::TimeStarted).not_null())
                    .col(big_integer(TimesheetEntry::Duration).not_null())
                    .col(string_len(TimesheetEntry::Date, 10).not_null())
                    .to_owned(),
            )
            .await?;

        // Listing is always "entries for one day"
        manager
            .create_index(
                Index::create()
                    .name("idx_timesheet_entry_date")
                    .table(TimesheetEntry::Table)
                    .col(TimesheetEntry::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TimesheetEntry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TimesheetEntry {
    Table,
    Id,
    Task,
    Project,
    TimeStarted,
    Duration,
    Date,
}
