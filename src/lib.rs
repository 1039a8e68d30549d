//! Suggestion engine facade: the core collection types plus tracing setup.

pub mod trace_init;

pub use suggest_core::*;
