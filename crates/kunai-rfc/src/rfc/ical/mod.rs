//! iCalendar support (RFC 5545).
//!
//! - [`core`] - Content line and parameter types
//! - [`kind`] - Property/value kind enumerations and the compatibility table

pub mod core;
pub mod kind;

#[cfg(test)]
mod tests;

pub use core::{ContentLine, Parameter};
pub use kind::{
    CompatibilityEntry, PropertyKind, ResolvedValueKind, ValueKind, ValueKindSet, is_default,
    is_multivalued, is_valid, resolve_value_kind,
};
