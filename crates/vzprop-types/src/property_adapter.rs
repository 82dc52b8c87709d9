//! Storage seam for entity properties.
//!
//! Adapters store values as raw text. They do not validate or coerce; the
//! caller validates before every create/update and coerces after every load.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// A property row as it comes out of storage, value still in its raw text form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRow {
	pub id: PropertyId,
	#[serde(rename = "entityId")]
	pub entity: EntityId,
	pub name: Box<str>,
	pub value: Box<str>,
}

#[async_trait]
pub trait PropertyAdapter: Debug + Send + Sync {
	/// Insert a new property. Fails with `Error::Conflict` if the entity already
	/// has a property with this name.
	async fn create_property(&self, entity: EntityId, name: &str, value: &str)
	-> ClResult<PropertyId>;

	/// Overwrite the value of an existing property
	async fn update_property(&self, id: PropertyId, value: &str) -> ClResult<()>;

	async fn read_property(&self, id: PropertyId) -> ClResult<PropertyRow>;

	async fn read_property_by_name(
		&self,
		entity: EntityId,
		name: &str,
	) -> ClResult<Option<PropertyRow>>;

	/// List all properties of an entity, ordered by name
	async fn list_properties(&self, entity: EntityId) -> ClResult<Vec<PropertyRow>>;

	async fn delete_property(&self, id: PropertyId) -> ClResult<()>;

	/// Delete every property of an entity. Returns the number of deleted rows.
	async fn delete_entity_properties(&self, entity: EntityId) -> ClResult<u64>;
}

// vim: ts=4
