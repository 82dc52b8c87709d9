//! Property definition registry
//!
//! Definitions are registered once during startup into a mutable
//! `PropertyRegistry`, which is then frozen and shared read-only.

use std::collections::HashMap;
use std::path::Path;

use crate::definition::{PropertyDefinition, PropertyDefinitionSpec};
use crate::prelude::*;

/// Mutable registry used during initialization
pub struct PropertyRegistry {
	definitions: HashMap<String, PropertyDefinition>,
}

impl PropertyRegistry {
	pub fn new() -> Self {
		Self { definitions: HashMap::new() }
	}

	/// Register a new property definition
	pub fn register(&mut self, def: PropertyDefinition) -> ClResult<()> {
		if self.definitions.contains_key(&def.name) {
			return Err(Error::ConfigError(format!(
				"Property '{}' is already registered",
				def.name
			)));
		}

		debug!("Registering property: {} ({})", def.name, def.typ);
		self.definitions.insert(def.name.clone(), def);
		Ok(())
	}

	/// Register every definition of a JSON array of definitions.
	/// Returns the number of registered definitions.
	pub fn load_json(&mut self, json: &str) -> ClResult<usize> {
		let specs: Vec<PropertyDefinitionSpec> = serde_json::from_str(json)
			.map_err(|e| Error::ConfigError(format!("Invalid property definitions: {}", e)))?;

		let count = specs.len();
		for spec in specs {
			self.register(PropertyDefinition::try_from(spec)?)?;
		}
		Ok(count)
	}

	/// Register every definition of a JSON definitions file
	pub fn load_file(&mut self, path: impl AsRef<Path>) -> ClResult<usize> {
		let path = path.as_ref();
		let json = std::fs::read_to_string(path)
			.inspect_err(|err| warn!("Cannot read property definitions {}: {}", path.display(), err))?;
		let count = self.load_json(&json)?;
		info!("Loaded {} property definitions from {}", count, path.display());
		Ok(count)
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenPropertyRegistry {
		info!("Freezing property registry with {} definitions", self.definitions.len());
		FrozenPropertyRegistry { definitions: self.definitions }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl Default for PropertyRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry shared by the property service
#[derive(Debug)]
pub struct FrozenPropertyRegistry {
	definitions: HashMap<String, PropertyDefinition>,
}

impl FrozenPropertyRegistry {
	/// Check if a definition is registered under this name
	pub fn exists(&self, name: &str) -> bool {
		self.definitions.contains_key(name)
	}

	/// Get a property definition by name
	pub fn get(&self, name: &str) -> ClResult<&PropertyDefinition> {
		self.definitions.get(name).ok_or_else(|| Error::UnknownProperty(name.to_string()))
	}

	/// List all registered definitions, ordered by name
	pub fn list(&self) -> Vec<&PropertyDefinition> {
		let mut defs: Vec<_> = self.definitions.values().collect();
		defs.sort_by(|a, b| a.name.cmp(&b.name));
		defs
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
