use sea_orm::DatabaseConnection;




/// Fresh, migrated in-memory database per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_and_migrate(&configs::DatabaseConfig::in_memory()).await
}

pub(crate) fn sample(task: &str) -> crate::timesheet_entry::NewEntry {
    crate::timesheet_entry::NewEntry {
        task: task.to_string(),
        project: "Alpha".to_string(),
        time_started: "09:00".to_string(),
        duration: 3600,
    }
}
