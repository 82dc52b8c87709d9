//! Property values and type coercion
//!
//! A value is either in its raw text form (freshly set, or just read from
//! storage) or in the native form of its declared type (after coercion).

use serde::{Deserialize, Serialize};

use crate::definition::PropertyType;
use crate::prelude::*;

/// 2^63, the first float above the `i64` range
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Property value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type comes from the PropertyDefinition
pub enum PropertyValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	Float(f64),
	String(String),
}

impl PropertyValue {
	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			PropertyValue::Bool(_) => "bool",
			PropertyValue::Int(_) => "int",
			PropertyValue::Float(_) => "float",
			PropertyValue::String(_) => "string",
		}
	}

	/// Raw text form written to storage
	pub fn to_storage_string(&self) -> String {
		match self {
			PropertyValue::Bool(true) => "1".into(),
			PropertyValue::Bool(false) => "0".into(),
			PropertyValue::Int(i) => i.to_string(),
			PropertyValue::Float(f) => f.to_string(),
			PropertyValue::String(s) => s.clone(),
		}
	}

	/// Reinterpret the value as the given property type.
	///
	/// `Multiple` never changes the value. A value that already has the native
	/// type of `typ` is returned unchanged, so coercion is idempotent.
	pub fn coerce_to(&self, typ: PropertyType) -> ClResult<PropertyValue> {
		match typ {
			PropertyType::Multiple => Ok(self.clone()),
			PropertyType::String | PropertyType::Text => match self {
				PropertyValue::String(_) => Ok(self.clone()),
				v => Ok(PropertyValue::String(v.to_storage_string())),
			},
			PropertyType::Integer => self.as_int().map(PropertyValue::Int),
			PropertyType::Float => self.as_float().map(PropertyValue::Float),
			PropertyType::Boolean => self.as_bool().map(PropertyValue::Bool),
		}
	}

	fn as_int(&self) -> ClResult<i64> {
		match self {
			PropertyValue::Int(i) => Ok(*i),
			PropertyValue::Bool(b) => Ok(i64::from(*b)),
			PropertyValue::Float(f) if f.is_finite() && (-I64_LIMIT..I64_LIMIT).contains(&f.trunc()) => {
				Ok(f.trunc() as i64)
			}
			PropertyValue::Float(f) => Err(Error::Parse(format!("{} is not an integer", f))),
			PropertyValue::String(s) => s
				.trim()
				.parse::<i64>()
				.map_err(|_| Error::Parse(format!("'{}' is not an integer", s))),
		}
	}

	fn as_float(&self) -> ClResult<f64> {
		match self {
			PropertyValue::Float(f) if f.is_finite() => Ok(*f),
			PropertyValue::Float(f) => Err(Error::Parse(format!("{} is not a number", f))),
			PropertyValue::Int(i) => Ok(*i as f64),
			PropertyValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
			PropertyValue::String(s) => match s.trim().parse::<f64>() {
				Ok(f) if f.is_finite() => Ok(f),
				_ => Err(Error::Parse(format!("'{}' is not a number", s))),
			},
		}
	}

	fn as_bool(&self) -> ClResult<bool> {
		match self {
			PropertyValue::Bool(b) => Ok(*b),
			PropertyValue::Int(i) => Ok(*i != 0),
			PropertyValue::Float(f) => Ok(*f != 0.0),
			PropertyValue::String(s) => parse_bool(s)
				.ok_or_else(|| Error::Parse(format!("'{}' is not a boolean", s))),
		}
	}

	/// Check whether the value can be read as the given type without loss
	pub(crate) fn fits(&self, typ: PropertyType) -> bool {
		match (typ, self) {
			(PropertyType::String | PropertyType::Text, v) => {
				matches!(v, PropertyValue::String(_))
			}
			(PropertyType::Integer, PropertyValue::Float(f)) => {
				f.fract() == 0.0 && self.as_int().is_ok()
			}
			(PropertyType::Boolean, PropertyValue::Int(i)) => *i == 0 || *i == 1,
			(PropertyType::Boolean, PropertyValue::Float(_)) => false,
			(typ, v) => v.coerce_to(typ).is_ok(),
		}
	}
}

fn parse_bool(s: &str) -> Option<bool> {
	match s.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" | "" => Some(false),
		_ => None,
	}
}

impl From<bool> for PropertyValue {
	fn from(b: bool) -> Self {
		PropertyValue::Bool(b)
	}
}

impl From<i64> for PropertyValue {
	fn from(i: i64) -> Self {
		PropertyValue::Int(i)
	}
}

impl From<i32> for PropertyValue {
	fn from(i: i32) -> Self {
		PropertyValue::Int(i64::from(i))
	}
}

impl From<f64> for PropertyValue {
	fn from(f: f64) -> Self {
		PropertyValue::Float(f)
	}
}

impl From<&str> for PropertyValue {
	fn from(s: &str) -> Self {
		PropertyValue::String(s.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(s: String) -> Self {
		PropertyValue::String(s)
	}
}

impl std::fmt::Display for PropertyValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.to_storage_string())
	}
}


// vim: ts=4
