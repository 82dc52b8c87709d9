pub use crate::error::{ClResult, Error};
pub use crate::types::{EntityId, PropertyId};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
