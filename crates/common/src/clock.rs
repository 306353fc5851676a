//! Source of "today" for date stamping and day-scoped queries.

use chrono::{NaiveDate, Utc};

/// Format used for the persisted `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock: Send + Sync {
    /// Current calendar date in UTC.
    fn today(&self) -> NaiveDate;

    fn today_string(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Wall clock, read fresh on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
