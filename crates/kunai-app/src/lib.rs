//! Command-line front end for the iCalendar kind compatibility table.

pub mod cli;
pub mod logging;
pub mod report;
