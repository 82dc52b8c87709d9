//! Entity property
//!
//! A named value attached to a metering entity. The property does not drive
//! its own lifecycle: whoever persists it calls [`Property::validate`] before
//! every create/update and [`Property::cast_value`] right after every load.

use serde::Serialize;
use vzprop_types::property_adapter::PropertyRow;

use crate::definition::PropertyDefinition;
use crate::prelude::*;
use crate::registry::FrozenPropertyRegistry;
use crate::value::PropertyValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
	id: Option<PropertyId>,
	#[serde(rename = "entityId")]
	entity: EntityId,
	name: String,
	value: PropertyValue,
}

impl Property {
	/// Create a property of `entity`. Nothing is validated until it is persisted.
	pub fn new(entity: EntityId, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
		Self { id: None, entity, name: name.into(), value: value.into() }
	}

	/// Rebuild a property from storage. The value stays in its raw text form
	/// until `cast_value` runs.
	pub fn from_row(row: PropertyRow) -> Self {
		Self {
			id: Some(row.id),
			entity: row.entity,
			name: row.name.into(),
			value: PropertyValue::String(row.value.into()),
		}
	}

	pub fn id(&self) -> Option<PropertyId> {
		self.id
	}

	pub fn entity(&self) -> EntityId {
		self.entity
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &PropertyValue {
		&self.value
	}

	/// Look up the definition of this property
	pub fn definition<'a>(
		&self,
		registry: &'a FrozenPropertyRegistry,
	) -> ClResult<&'a PropertyDefinition> {
		registry.get(&self.name)
	}

	pub fn set_value(&mut self, value: impl Into<PropertyValue>) {
		self.value = value.into();
	}

	pub(crate) fn set_id(&mut self, id: PropertyId) {
		self.id = Some(id);
	}

	/// Validate name and value. Must succeed before the property is written.
	pub fn validate(&self, registry: &FrozenPropertyRegistry) -> ClResult<()> {
		if !registry.exists(&self.name) {
			return Err(Error::InvalidPropertyName(self.name.clone()));
		}

		if !self.definition(registry)?.validate_value(&self.value) {
			return Err(Error::InvalidPropertyValue {
				name: self.name.clone(),
				value: self.value.to_storage_string(),
			});
		}

		Ok(())
	}

	/// Coerce the value to the declared type of the property.
	///
	/// A name that is no longer registered fails with `Error::UnknownProperty`
	/// and leaves the value untouched.
	pub fn cast_value(&mut self, registry: &FrozenPropertyRegistry) -> ClResult<()> {
		let typ = self.definition(registry)?.typ;
		self.value = self.value.coerce_to(typ)?;
		Ok(())
	}
}


// vim: ts=4
