//! Shared types, adapter traits, and error types for vzprop.
//!
//! Storage adapters depend on this crate only, so they can be built and
//! tested without pulling in the property registry and validation rules.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod property_adapter;
pub mod types;

// vim: ts=4
