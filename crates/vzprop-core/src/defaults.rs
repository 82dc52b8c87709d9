//! Stock property definitions
//!
//! Registers the properties every metering frontend knows about: labels,
//! display style, and the channel parameters used for aggregation.

use crate::definition::{PropertyDefinition, PropertyType};
use crate::prelude::*;
use crate::registry::PropertyRegistry;
use crate::value::PropertyValue;

/// Register all default properties
pub fn register_default_properties(registry: &mut PropertyRegistry) -> ClResult<()> {
	// Labels
	registry.register(
		PropertyDefinition::builder("title", PropertyType::String)
			.min(1.0)
			.max(255.0)
			.translation("de", "Titel")
			.translation("en", "Title")
			.build()?,
	)?;

	for (name, de, en) in [
		("description", "Beschreibung", "Description"),
		("details", "Details", "Details"),
		("address", "Adresse", "Address"),
	] {
		registry.register(
			PropertyDefinition::builder(name, PropertyType::Text)
				.max(2048.0)
				.translation("de", de)
				.translation("en", en)
				.build()?,
		)?;
	}

	registry.register(
		PropertyDefinition::builder("owner", PropertyType::String)
			.max(255.0)
			.translation("de", "Besitzer")
			.translation("en", "Owner")
			.build()?,
	)?;

	// Display
	registry.register(
		PropertyDefinition::builder("color", PropertyType::String)
			.pattern("^#[0-9a-fA-F]{6}$")
			.translation("de", "Farbe")
			.translation("en", "Color")
			.build()?,
	)?;

	registry.register(
		PropertyDefinition::builder("style", PropertyType::Multiple)
			.options(["lines", "points", "steps"])
			.translation("de", "Stil")
			.translation("en", "Style")
			.build()?,
	)?;

	registry.register(
		PropertyDefinition::builder("fillstyle", PropertyType::Multiple)
			.options(["solid", "none"])
			.translation("en", "Fill style")
			.build()?,
	)?;

	// Axis is either picked automatically or pinned to one of the two axes
	registry.register(
		PropertyDefinition::builder("yaxis", PropertyType::Multiple)
			.options([PropertyValue::from("auto"), PropertyValue::Int(1), PropertyValue::Int(2)])
			.translation("de", "Y-Achse")
			.translation("en", "Y axis")
			.build()?,
	)?;

	// Channel parameters
	registry.register(
		PropertyDefinition::builder("resolution", PropertyType::Float)
			.min(1.0)
			.translation("de", "Auflösung")
			.translation("en", "Resolution")
			.build()?,
	)?;

	registry.register(
		PropertyDefinition::builder("cost", PropertyType::Float)
			.translation("de", "Kosten")
			.translation("en", "Cost")
			.build()?,
	)?;

	registry.register(
		PropertyDefinition::builder("tolerance", PropertyType::Float)
			.min(0.0)
			.translation("de", "Toleranz")
			.translation("en", "Tolerance")
			.build()?,
	)?;

	registry.register(
		PropertyDefinition::builder("gap", PropertyType::Integer)
			.min(0.0)
			.translation("de", "Lücke")
			.translation("en", "Gap")
			.build()?,
	)?;

	// Flags
	for (name, de, en) in
		[("public", "Öffentlich", "Public"), ("active", "Aktiv", "Active"), ("local", "Lokal", "Local")]
	{
		registry.register(
			PropertyDefinition::builder(name, PropertyType::Boolean)
				.translation("de", de)
				.translation("en", en)
				.build()?,
		)?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::property::Property;
	use vzprop_types::types::EntityId;

	#[test]
	fn test_defaults_register() {
		let mut registry = PropertyRegistry::new();
		register_default_properties(&mut registry).unwrap();
		assert_eq!(registry.len(), 16);

		// Registering twice collides
		assert!(register_default_properties(&mut registry).is_err());
	}

	#[test]
	fn test_default_rules() {
		let mut registry = PropertyRegistry::new();
		register_default_properties(&mut registry).unwrap();
		let registry = registry.freeze();
		let channel = EntityId(3);

		let ok = [
			Property::new(channel, "title", "Heat pump"),
			Property::new(channel, "color", "#aa0044"),
			Property::new(channel, "style", "steps"),
			Property::new(channel, "yaxis", "auto"),
			Property::new(channel, "yaxis", "2"),
			Property::new(channel, "resolution", "2000"),
			Property::new(channel, "cost", "0.000245"),
			Property::new(channel, "public", "1"),
		];
		for property in &ok {
			assert!(property.validate(&registry).is_ok(), "{} should be valid", property.name());
		}

		let bad = [
			Property::new(channel, "title", ""),
			Property::new(channel, "color", "blue"),
			Property::new(channel, "style", "bars"),
			Property::new(channel, "resolution", "0"),
			Property::new(channel, "gap", "-1"),
			Property::new(channel, "active", "sometimes"),
		];
		for property in &bad {
			assert!(property.validate(&registry).is_err(), "{} should be invalid", property.name());
		}
	}
}

// vim: ts=4
