pub use vzprop_types::error::{ClResult, Error};
pub use vzprop_types::types::{EntityId, PropertyId};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
