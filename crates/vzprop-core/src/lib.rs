//! Typed properties of metering entities.
//!
//! A property is a named value attached to an entity (a channel, a meter, a
//! group). Its name must be registered in the [`registry`], and its value must
//! satisfy the [`definition`] registered under that name before it may be
//! stored. Values are stored as text and coerced back to the declared type on
//! load; the [`service`] drives both steps around a storage adapter.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod defaults;
pub mod definition;
pub mod prelude;
pub mod property;
pub mod registry;
pub mod service;
pub mod value;

// Re-export commonly used types
pub use config::PropertyConfig;
pub use definition::{PropertyDefinition, PropertyDefinitionBuilder, PropertyType};
pub use property::Property;
pub use registry::{FrozenPropertyRegistry, PropertyRegistry};
pub use service::PropertyService;
pub use value::PropertyValue;
pub use vzprop_types::error::{ClResult, Error};
pub use vzprop_types::property_adapter::{PropertyAdapter, PropertyRow};
pub use vzprop_types::types::{EntityId, PropertyId};

// vim: ts=4
