use std::sync::Arc;

use common::clock::Clock;
use tracing::{debug, info, instrument};

use super::repository::TimesheetRepository;
use super::{EntryPatch, NewEntry, TimesheetEntry};
use crate::errors::ServiceError;

/// Day-scoped timesheet operations, independent of the web framework.
///
/// "Today" always comes from the injected clock, both when stamping new
/// entries and when listing.
pub struct TimesheetService<R: TimesheetRepository> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: TimesheetRepository> TimesheetService<R> {
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self { Self { repo, clock } }

    /// Entries created today, in creation order.
    #[instrument(skip(self))]
    pub async fn list_today(&self) -> Result<Vec<TimesheetEntry>, ServiceError> {
        let today = self.clock.today_string();
        let entries = self.repo.list_for_date(&today).await?;
        debug!(%today, count = entries.len(), "listed entries");
        Ok(entries)
    }

    /// Create an entry stamped with today's date.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use common::clock::FixedClock;
    /// use configs::DatabaseConfig;
    /// use service::timesheet::{NewEntry, SeaOrmTimesheetRepository, TimesheetService};
    /// # tokio_test::block_on(async {
    /// let db = models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await.unwrap();
    /// let clock = Arc::new(FixedClock::ymd(2024, 5, 14).unwrap());
    /// let svc = TimesheetService::new(Arc::new(SeaOrmTimesheetRepository { db }), clock);
    /// let input = NewEntry { task: "Write report".into(), project: "Alpha".into(), time_started: "09:00".into(), duration: 3600 };
    /// let entry = svc.create(input).await.unwrap();
    /// assert_eq!(entry.date, "2024-05-14");
    /// # });
    /// ```
    #[instrument(skip(self, input), fields(project = %input.project))]
    pub async fn create(&self, input: NewEntry) -> Result<TimesheetEntry, ServiceError> {
        let today = self.clock.today_string();
        let entry = self.repo.create(input, &today).await?;
        info!(id = entry.id, date = %entry.date, "entry_created");
        Ok(entry)
    }

    /// Overwrite the supplied fields of an entry. `None` stands for a body that
    /// was absent or could not be parsed; it is reported only if the entry exists.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: Option<EntryPatch>) -> Result<TimesheetEntry, ServiceError> {
        let entry = self.repo.update(id, patch).await?;
        info!(id = entry.id, "entry_updated");
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "entry_deleted");
        Ok(())
    }
}
