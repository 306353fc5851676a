//! Timesheet module: repository abstraction plus the day-scoped service on top.

pub mod repository;
pub mod service;

pub use models::timesheet_entry::{EntryPatch, Model as TimesheetEntry, NewEntry};
pub use repository::{SeaOrmTimesheetRepository, TimesheetRepository};
pub use service::TimesheetService;
