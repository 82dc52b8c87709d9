//! Property service: persistence lifecycle for entity properties
//!
//! Every write goes through `Property::validate` first, and every property
//! read back from the adapter goes through `Property::cast_value` before it is
//! handed out. A rejected property never reaches the adapter.

use std::sync::Arc;

use vzprop_types::property_adapter::{PropertyAdapter, PropertyRow};

use crate::prelude::*;
use crate::property::Property;
use crate::registry::FrozenPropertyRegistry;
use crate::value::PropertyValue;

/// Property service - main interface for storing and loading properties
#[derive(Debug)]
pub struct PropertyService {
	registry: Arc<FrozenPropertyRegistry>,
	adapter: Arc<dyn PropertyAdapter>,
}

impl PropertyService {
	pub fn new(registry: Arc<FrozenPropertyRegistry>, adapter: Arc<dyn PropertyAdapter>) -> Self {
		Self { registry, adapter }
	}

	/// Validate and insert a new property, assigning its id
	pub async fn create(&self, property: &mut Property) -> ClResult<PropertyId> {
		if let Some(id) = property.id() {
			return Err(Error::ValidationError(format!(
				"Property '{}' is already stored as {}",
				property.name(),
				id
			)));
		}

		property
			.validate(&self.registry)
			.inspect_err(|err| warn!("Rejected property of entity {}: {}", property.entity(), err))?;

		let raw = property.value().to_storage_string();
		let id = self.adapter.create_property(property.entity(), property.name(), &raw).await?;
		property.set_id(id);

		info!("Property '{}' created for entity {} as {}", property.name(), property.entity(), id);
		Ok(id)
	}

	/// Validate and write the value of a stored property
	pub async fn update(&self, property: &Property) -> ClResult<()> {
		let Some(id) = property.id() else {
			return Err(Error::ValidationError(format!(
				"Property '{}' has not been stored yet",
				property.name()
			)));
		};

		property
			.validate(&self.registry)
			.inspect_err(|err| warn!("Rejected property {}: {}", id, err))?;

		let raw = property.value().to_storage_string();
		self.adapter.update_property(id, &raw).await?;

		info!("Property '{}' updated for entity {}", property.name(), property.entity());
		Ok(())
	}

	/// Create or update depending on whether the property has been stored before
	pub async fn save(&self, property: &mut Property) -> ClResult<PropertyId> {
		match property.id() {
			Some(id) => {
				self.update(property).await?;
				Ok(id)
			}
			None => self.create(property).await,
		}
	}

	/// Load a property by id, coerced to its declared type
	pub async fn load(&self, id: PropertyId) -> ClResult<Property> {
		let row = self.adapter.read_property(id).await?;
		self.materialize(Property::from_row(row))
	}

	/// Load a property of an entity by name
	pub async fn get(&self, entity: EntityId, name: &str) -> ClResult<Option<Property>> {
		match self.adapter.read_property_by_name(entity, name).await? {
			Some(row) => Ok(Some(self.materialize(Property::from_row(row))?)),
			None => Ok(None),
		}
	}

	/// Load all properties of an entity, ordered by name
	pub async fn list(&self, entity: EntityId) -> ClResult<Vec<Property>> {
		let rows = self.adapter.list_properties(entity).await?;
		debug!("Loaded {} properties of entity {}", rows.len(), entity);
		rows.into_iter().map(|row| self.materialize(Property::from_row(row))).collect()
	}

	/// Set a property of an entity, creating it if it does not exist yet.
	/// The returned property holds the value as a later `get` would load it.
	pub async fn set(
		&self,
		entity: EntityId,
		name: &str,
		value: impl Into<PropertyValue>,
	) -> ClResult<Property> {
		let value = value.into();
		let mut property = match self.adapter.read_property_by_name(entity, name).await? {
			Some(row) => {
				let mut property = Property::from_row(row);
				property.set_value(value);
				property
			}
			None => Property::new(entity, name, value),
		};
		let id = self.save(&mut property).await?;
		self.materialize(Property::from_row(PropertyRow {
			id,
			entity,
			name: name.into(),
			value: property.value().to_storage_string().into(),
		}))
	}

	/// Remove a property of an entity. Returns false if it was not set.
	pub async fn unset(&self, entity: EntityId, name: &str) -> ClResult<bool> {
		let Some(row) = self.adapter.read_property_by_name(entity, name).await? else {
			return Ok(false);
		};
		self.adapter.delete_property(row.id).await?;

		info!("Property '{}' deleted for entity {}", name, entity);
		Ok(true)
	}

	/// Delete all properties of an entity that is being removed
	pub async fn delete_entity(&self, entity: EntityId) -> ClResult<u64> {
		let count = self.adapter.delete_entity_properties(entity).await?;
		info!("Deleted {} properties of entity {}", count, entity);
		Ok(count)
	}

	/// Get reference to registry (for listing all definitions)
	pub fn registry(&self) -> &Arc<FrozenPropertyRegistry> {
		&self.registry
	}

	fn materialize(&self, mut property: Property) -> ClResult<Property> {
		property.cast_value(&self.registry).inspect_err(|err| {
			warn!("Cannot load property {:?} of entity {}: {}", property.id(), property.entity(), err);
		})?;
		Ok(property)
	}
}

// vim: ts=4
