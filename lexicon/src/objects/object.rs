//! Base AFF4 object: the attributes every object may carry.

use std::sync::Arc;

use crate::error::LexiconError;
use crate::iris::*;
use crate::model::{Attribute, Schema};
use crate::registry::SchemaRegistry;

/// Returns the base object schema. It has no parents.
#[must_use]
pub fn schema() -> Schema {
    let mut schema = Schema::new(AFF4_OBJECT_TYPE);
    schema.add_attribute(
        "type",
        Attribute::new(
            AFF4_TYPE,
            URN_TYPE,
            "The object type, used to pick the implementation that opens the object.",
        ),
    );
    schema.add_attribute(
        "stored",
        Attribute::new(
            AFF4_STORED,
            URN_TYPE,
            "The volume this object is stored in.",
        ),
    );
    schema.add_attribute(
        "contains",
        Attribute::new(
            AFF4_CONTAINS,
            URN_TYPE,
            "An object contained in this volume. May repeat.",
        ),
    );
    schema
}

/// Registers the base object schema.
///
/// # Errors
///
/// Returns [`LexiconError::DuplicateSchema`] if it is already registered.
pub fn register(registry: &mut SchemaRegistry) -> Result<Arc<Schema>, LexiconError> {
    registry.register(schema())
}
