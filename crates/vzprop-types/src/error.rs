//! Error type shared by the registry, the property lifecycle and the storage adapters.

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Property name is not registered (raised by lookups and by coercion after load)
	UnknownProperty(String),
	/// Property name failed validation before a write
	InvalidPropertyName(String),
	/// Property value was rejected by its definition before a write
	InvalidPropertyValue {
		name: String,
		value: String,
	},
	/// Stored text could not be read as the declared type
	Parse(String),
	/// Invalid property definition or definition file
	ConfigError(String),
	ValidationError(String),
	NotFound,
	Conflict(String),
	DbError,

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::UnknownProperty(name) => write!(f, "unknown property: {}", name),
			Error::InvalidPropertyName(name) => write!(f, "invalid property name: {}", name),
			Error::InvalidPropertyValue { name, value } => {
				write!(f, "invalid property value for '{}': {}", name, value)
			}
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::NotFound => write!(f, "not found"),
			Error::Conflict(msg) => write!(f, "conflict: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}


// vim: ts=4
