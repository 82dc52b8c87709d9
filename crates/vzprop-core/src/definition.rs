//! Property definitions
//!
//! A definition names a property, declares its primitive type and carries the
//! rules a value has to satisfy before it may be stored.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::prelude::*;
use crate::value::PropertyValue;

/// Type alias for an additional validation predicate
pub type PropertyValidator = Arc<dyn Fn(&PropertyValue) -> bool + Send + Sync>;

/// Declared type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
	String,
	/// Multi-line string
	Text,
	Integer,
	Float,
	Boolean,
	/// Value may take several representations, never coerced
	Multiple,
}

impl PropertyType {
	pub fn name(self) -> &'static str {
		match self {
			PropertyType::String => "string",
			PropertyType::Text => "text",
			PropertyType::Integer => "integer",
			PropertyType::Float => "float",
			PropertyType::Boolean => "boolean",
			PropertyType::Multiple => "multiple",
		}
	}

	fn is_textual(self) -> bool {
		matches!(self, PropertyType::String | PropertyType::Text)
	}

	fn is_numeric(self) -> bool {
		matches!(self, PropertyType::Integer | PropertyType::Float)
	}
}

impl std::fmt::Display for PropertyType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Property definition - the rules for one property name
#[derive(Clone)]
pub struct PropertyDefinition {
	/// Property name (e.g., "title", "resolution")
	pub name: String,

	/// Declared type, drives validation and coercion after load
	pub typ: PropertyType,

	/// Text properties only: the value must match this pattern
	pub pattern: Option<Regex>,

	/// Lower bound: character count for text, value for numbers
	pub min: Option<f64>,

	/// Upper bound: character count for text, value for numbers
	pub max: Option<f64>,

	/// `Multiple` properties only: allowed values (empty means anything goes)
	pub options: Vec<PropertyValue>,

	/// Display labels keyed by language code
	pub translation: HashMap<String, String>,

	/// Optional extra validation predicate
	pub validator: Option<PropertyValidator>,
}

impl Debug for PropertyDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PropertyDefinition")
			.field("name", &self.name)
			.field("typ", &self.typ)
			.field("pattern", &self.pattern.as_ref().map(Regex::as_str))
			.field("min", &self.min)
			.field("max", &self.max)
			.field("options", &self.options)
			.field("translation", &self.translation)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

impl PropertyDefinition {
	/// Create a builder for constructing a PropertyDefinition
	pub fn builder(name: impl Into<String>, typ: PropertyType) -> PropertyDefinitionBuilder {
		PropertyDefinitionBuilder::new(name, typ)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn typ(&self) -> PropertyType {
		self.typ
	}

	/// Display label for a language, falls back to the property name
	pub fn label(&self, lang: &str) -> &str {
		self.translation.get(lang).map_or(self.name.as_str(), String::as_str)
	}

	/// Check a value against the type and the rules of this definition
	pub fn validate_value(&self, value: &PropertyValue) -> bool {
		if !value.fits(self.typ) {
			return false;
		}

		let valid = match self.typ {
			PropertyType::String | PropertyType::Text => {
				let PropertyValue::String(s) = value else {
					return false;
				};
				let len = s.chars().count() as f64;
				self.pattern.as_ref().is_none_or(|re| re.is_match(s)) && self.in_bounds(len)
			}
			PropertyType::Integer | PropertyType::Float => {
				match value.coerce_to(self.typ) {
					Ok(PropertyValue::Int(i)) => self.in_bounds(i as f64),
					Ok(PropertyValue::Float(f)) => self.in_bounds(f),
					_ => false,
				}
			}
			PropertyType::Boolean => true,
			PropertyType::Multiple => {
				let raw = value.to_storage_string();
				self.options.is_empty()
					|| self.options.iter().any(|opt| opt.to_storage_string() == raw)
			}
		};

		valid && self.validator.as_ref().is_none_or(|f| f(value))
	}

	fn in_bounds(&self, n: f64) -> bool {
		self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
	}
}

/// Builder for PropertyDefinition with fluent API
pub struct PropertyDefinitionBuilder {
	name: String,
	typ: PropertyType,
	pattern: Option<String>,
	min: Option<f64>,
	max: Option<f64>,
	options: Vec<PropertyValue>,
	translation: HashMap<String, String>,
	validator: Option<PropertyValidator>,
}

impl PropertyDefinitionBuilder {
	pub fn new(name: impl Into<String>, typ: PropertyType) -> Self {
		Self {
			name: name.into(),
			typ,
			pattern: None,
			min: None,
			max: None,
			options: Vec::new(),
			translation: HashMap::new(),
			validator: None,
		}
	}

	/// Regular expression the value must match (text types only)
	pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	pub fn min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	pub fn max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	/// Allowed values (`Multiple` only)
	pub fn options<I, V>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<PropertyValue>,
	{
		self.options = options.into_iter().map(Into::into).collect();
		self
	}

	pub fn translation(mut self, lang: impl Into<String>, label: impl Into<String>) -> Self {
		self.translation.insert(lang.into(), label.into());
		self
	}

	/// Set an extra validation predicate
	pub fn validator<F>(mut self, f: F) -> Self
	where
		F: Fn(&PropertyValue) -> bool + Send + Sync + 'static,
	{
		self.validator = Some(Arc::new(f));
		self
	}

	/// Build the PropertyDefinition
	pub fn build(self) -> ClResult<PropertyDefinition> {
		if self.name.trim().is_empty() {
			return Err(Error::ConfigError("Property name is required".into()));
		}

		let pattern = match self.pattern {
			Some(_) if !self.typ.is_textual() => {
				return Err(Error::ConfigError(format!(
					"Property '{}': pattern is only allowed for text types",
					self.name
				)));
			}
			Some(p) => Some(Regex::new(&p).map_err(|e| {
				Error::ConfigError(format!("Property '{}': invalid pattern: {}", self.name, e))
			})?),
			None => None,
		};

		if (self.min.is_some() || self.max.is_some())
			&& !(self.typ.is_textual() || self.typ.is_numeric())
		{
			return Err(Error::ConfigError(format!(
				"Property '{}': bounds are not allowed for {} properties",
				self.name, self.typ
			)));
		}
		if let (Some(min), Some(max)) = (self.min, self.max) {
			if min > max {
				return Err(Error::ConfigError(format!(
					"Property '{}': min {} is greater than max {}",
					self.name, min, max
				)));
			}
		}

		if !self.options.is_empty() && self.typ != PropertyType::Multiple {
			return Err(Error::ConfigError(format!(
				"Property '{}': options are only allowed for multiple properties",
				self.name
			)));
		}

		Ok(PropertyDefinition {
			name: self.name,
			typ: self.typ,
			pattern,
			min: self.min,
			max: self.max,
			options: self.options,
			translation: self.translation,
			validator: self.validator,
		})
	}
}

/// Definition as written in a JSON definitions file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDefinitionSpec {
	pub name: String,
	#[serde(rename = "type")]
	pub typ: PropertyType,
	pub pattern: Option<String>,
	pub min: Option<f64>,
	pub max: Option<f64>,
	#[serde(default)]
	pub options: Vec<PropertyValue>,
	#[serde(default)]
	pub translation: HashMap<String, String>,
}

impl TryFrom<PropertyDefinitionSpec> for PropertyDefinition {
	type Error = Error;

	fn try_from(spec: PropertyDefinitionSpec) -> ClResult<Self> {
		let mut builder = PropertyDefinition::builder(spec.name, spec.typ).options(spec.options);
		if let Some(pattern) = spec.pattern {
			builder = builder.pattern(pattern);
		}
		if let Some(min) = spec.min {
			builder = builder.min(min);
		}
		if let Some(max) = spec.max {
			builder = builder.max(max);
		}
		for (lang, label) in spec.translation {
			builder = builder.translation(lang, label);
		}
		builder.build()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn def(builder: PropertyDefinitionBuilder) -> PropertyDefinition {
		match builder.build() {
			Ok(def) => def,
			Err(err) => unreachable!("definition should build: {}", err),
		}
	}

	#[test]
	fn test_string_rules() {
		let color = def(PropertyDefinition::builder("color", PropertyType::String)
			.pattern("^#[0-9a-fA-F]{6}$"));
		assert!(color.validate_value(&"#00ff7F".into()));
		assert!(!color.validate_value(&"red".into()));
		assert!(!color.validate_value(&PropertyValue::Int(0xff)));

		let title = def(PropertyDefinition::builder("title", PropertyType::String).min(1.0).max(5.0));
		assert!(title.validate_value(&"Küche".into()));
		assert!(!title.validate_value(&"".into()));
		assert!(!title.validate_value(&"Kitchen".into()));
	}

	#[test]
	fn test_numeric_rules() {
		let resolution = def(PropertyDefinition::builder("resolution", PropertyType::Float).min(1.0));
		assert!(resolution.validate_value(&"2000".into()));
		assert!(resolution.validate_value(&PropertyValue::Float(1.0)));
		assert!(!resolution.validate_value(&"0.5".into()));
		assert!(!resolution.validate_value(&"many".into()));

		let gap = def(PropertyDefinition::builder("gap", PropertyType::Integer).min(0.0).max(60.0));
		assert!(gap.validate_value(&"15".into()));
		assert!(gap.validate_value(&PropertyValue::Int(60)));
		assert!(!gap.validate_value(&PropertyValue::Int(61)));
		assert!(!gap.validate_value(&"1.5".into()));
		assert!(!gap.validate_value(&PropertyValue::Float(1.5)));
	}

	#[test]
	fn test_unbounded_numbers_must_be_storable() {
		let cost = def(PropertyDefinition::builder("cost", PropertyType::Float));
		assert!(cost.validate_value(&PropertyValue::Float(1e20)));
		assert!(!cost.validate_value(&PropertyValue::Float(f64::NAN)));
		assert!(!cost.validate_value(&PropertyValue::Float(f64::INFINITY)));
		assert!(!cost.validate_value(&"inf".into()));

		let count = def(PropertyDefinition::builder("count", PropertyType::Integer));
		assert!(count.validate_value(&PropertyValue::Float(1e15)));
		assert!(!count.validate_value(&PropertyValue::Float(1e20)));
		assert!(!count.validate_value(&PropertyValue::Float(f64::NEG_INFINITY)));
	}

	#[test]
	fn test_boolean_rules() {
		let public = def(PropertyDefinition::builder("public", PropertyType::Boolean));
		assert!(public.validate_value(&PropertyValue::Bool(false)));
		assert!(public.validate_value(&"true".into()));
		assert!(public.validate_value(&PropertyValue::Int(1)));
		assert!(!public.validate_value(&PropertyValue::Int(3)));
		assert!(!public.validate_value(&"perhaps".into()));
	}

	#[test]
	fn test_multiple_options() {
		let yaxis = def(PropertyDefinition::builder("yaxis", PropertyType::Multiple).options([
			PropertyValue::from("auto"),
			PropertyValue::Int(1),
			PropertyValue::Int(2),
		]));
		assert!(yaxis.validate_value(&"auto".into()));
		assert!(yaxis.validate_value(&PropertyValue::Int(2)));
		assert!(yaxis.validate_value(&"1".into()));
		assert!(!yaxis.validate_value(&"3".into()));

		let free = def(PropertyDefinition::builder("free", PropertyType::Multiple));
		assert!(free.validate_value(&PropertyValue::Float(0.5)));
	}

	#[test]
	fn test_custom_validator() {
		let even = def(PropertyDefinition::builder("even", PropertyType::Integer)
			.validator(|v| matches!(v.coerce_to(PropertyType::Integer), Ok(PropertyValue::Int(i)) if i % 2 == 0)));
		assert!(even.validate_value(&"4".into()));
		assert!(!even.validate_value(&"5".into()));
	}

	#[test]
	fn test_build_errors() {
		assert!(PropertyDefinition::builder(" ", PropertyType::String).build().is_err());
		assert!(PropertyDefinition::builder("x", PropertyType::Integer).pattern("^1$").build().is_err());
		assert!(PropertyDefinition::builder("x", PropertyType::String).pattern("(").build().is_err());
		assert!(PropertyDefinition::builder("x", PropertyType::Float).min(2.0).max(1.0).build().is_err());
		assert!(PropertyDefinition::builder("x", PropertyType::Boolean).min(0.0).build().is_err());
		assert!(PropertyDefinition::builder("x", PropertyType::String).options(["a"]).build().is_err());
	}

	#[test]
	fn test_label_falls_back_to_name() {
		let title = def(PropertyDefinition::builder("title", PropertyType::String)
			.translation("de", "Titel"));
		assert_eq!(title.label("de"), "Titel");
		assert_eq!(title.label("fr"), "title");
	}

	#[test]
	fn test_spec_from_json() {
		let spec: PropertyDefinitionSpec = match serde_json::from_str(
			r#"{"name": "style", "type": "multiple", "options": ["lines", "points"]}"#,
		) {
			Ok(spec) => spec,
			Err(err) => unreachable!("definition should parse: {}", err),
		};
		let style = PropertyDefinition::try_from(spec);
		assert!(matches!(&style, Ok(d) if d.typ == PropertyType::Multiple && d.options.len() == 2));
	}
}

// vim: ts=4
