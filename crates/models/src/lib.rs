pub mod errors;
pub mod db;
pub mod timesheet_entry;

#[cfg(test)]
mod tests;
