use thiserror::Error;

use crate::rfc::ical::kind::{PropertyKind, ValueKind};

/// RFC validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("Unknown value type {value:?} for property {property}")]
    UnknownValueKind { property: String, value: String },

    #[error("Value type {value} is not allowed for property {property}")]
    IncompatibleValueKind {
        property: PropertyKind,
        value: ValueKind,
    },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
