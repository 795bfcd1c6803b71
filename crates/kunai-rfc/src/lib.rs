//! iCalendar (RFC 5545) property/value kind rules.
//!
//! The [`rfc::ical::kind`] module holds the compatibility table that decides
//! which value types a property may carry, whether the property is a list,
//! and which value type is implied when no `VALUE` parameter is present.

pub mod error;
pub mod rfc;
