//! Startup configuration
//!
//! Read from the environment:
//! - `VZ_DB_DIR`: directory of the property database (default `./data`)
//! - `VZ_PROPERTY_DEFINITIONS`: optional JSON file with extra definitions
//! - `VZ_DEFAULT_PROPERTIES`: register the stock definitions (default `true`)

use std::env;
use std::path::PathBuf;

use crate::defaults::register_default_properties;
use crate::prelude::*;
use crate::registry::{FrozenPropertyRegistry, PropertyRegistry};

pub const DB_FILE: &str = "properties.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyConfig {
	pub db_dir: PathBuf,
	pub definitions_path: Option<PathBuf>,
	pub default_properties: bool,
}

impl Default for PropertyConfig {
	fn default() -> Self {
		Self { db_dir: PathBuf::from("./data"), definitions_path: None, default_properties: true }
	}
}

impl PropertyConfig {
	pub fn from_env() -> ClResult<Self> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Build the configuration from an arbitrary variable source
	pub fn from_lookup<F>(lookup: F) -> ClResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let default_properties = match lookup("VZ_DEFAULT_PROPERTIES").as_deref() {
			None | Some("1" | "true" | "yes") => true,
			Some("0" | "false" | "no") => false,
			Some(other) => {
				return Err(Error::ConfigError(format!(
					"VZ_DEFAULT_PROPERTIES must be a boolean, got '{}'",
					other
				)));
			}
		};

		Ok(Self {
			db_dir: lookup("VZ_DB_DIR").map_or_else(|| PathBuf::from("./data"), PathBuf::from),
			definitions_path: lookup("VZ_PROPERTY_DEFINITIONS")
				.filter(|p| !p.is_empty())
				.map(PathBuf::from),
			default_properties,
		})
	}

	/// Path of the SQLite property database
	pub fn db_path(&self) -> PathBuf {
		self.db_dir.join(DB_FILE)
	}

	/// Assemble and freeze the property registry described by this configuration
	pub fn build_registry(&self) -> ClResult<FrozenPropertyRegistry> {
		let mut registry = PropertyRegistry::new();
		if self.default_properties {
			register_default_properties(&mut registry)?;
		}
		if let Some(path) = &self.definitions_path {
			registry.load_file(path)?;
		}
		if registry.is_empty() {
			warn!("Property registry is empty, every property write will be rejected");
		}
		Ok(registry.freeze())
	}
}


// vim: ts=4
