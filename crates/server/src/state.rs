use std::sync::Arc;

use service::timesheet::{SeaOrmTimesheetRepository, TimesheetService};

pub type Timesheets = TimesheetService<SeaOrmTimesheetRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub timesheets: Arc<Timesheets>,
}

impl ServerState {
    pub fn new(timesheets: Timesheets) -> Self {
        Self { timesheets: Arc::new(timesheets) }
    }
}
