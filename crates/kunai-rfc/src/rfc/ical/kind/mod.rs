//! Property and value kinds and the rules that pair them (RFC 5545 §3.2.20,
//! §3.3, §3.7, §3.8).
//!
//! The compatibility table is computed at compile time and answers three
//! questions for a `(PropertyKind, ValueKind)` pair:
//! - [`is_valid`]: may this property carry a value of this kind?
//! - [`is_multivalued`]: does the property hold a comma-separated list, and
//!   of which element kind?
//! - [`is_default`]: is this the kind implied when `VALUE` is absent?
//!
//! [`resolve_value_kind`] applies those rules to a [`ContentLine`].
//!
//! [`ContentLine`]: crate::rfc::ical::core::ContentLine

mod property_kind;
mod resolve;
mod set;
mod table;
mod value_kind;

pub use property_kind::PropertyKind;
pub use resolve::{
    LIST_SEPARATOR, ResolvedValueKind, needs_value_param, resolve_value_kind, value_param_for,
};
pub use set::ValueKindSet;
pub use table::{
    CompatibilityEntry, default_value, entries, entry, is_default, is_multivalued, is_valid,
    valid_values,
};
pub use value_kind::ValueKind;
