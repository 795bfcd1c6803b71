//! iCalendar core models (RFC 5545 §3.1, §3.2).

mod parameter;
mod property;

pub use parameter::Parameter;
pub use property::ContentLine;
