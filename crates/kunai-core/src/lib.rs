//! Shared building blocks for the kunai crates: configuration and the
//! core error type.

pub mod config;
pub mod error;
