//! Map streams, which compose ranges of other streams.

use std::sync::Arc;

use crate::error::LexiconError;
use crate::iris::{AFF4_MAP_TYPE, AFF4_STREAM_TYPE};
use crate::model::Schema;
use crate::registry::SchemaRegistry;

/// Returns the map schema extending `stream`.
#[must_use]
pub fn schema(stream: Arc<Schema>) -> Schema {
    let mut schema = Schema::new(AFF4_MAP_TYPE);
    schema.add_parent(stream);
    schema
}

/// Registers the map schema. The stream schema must already be registered.
///
/// # Errors
///
/// Returns [`LexiconError::UnknownObjectType`] if the stream schema is
/// missing, or [`LexiconError::DuplicateSchema`] if the map schema is already
/// registered.
pub fn register(registry: &mut SchemaRegistry) -> Result<Arc<Schema>, LexiconError> {
    let stream = registry.get_schema(AFF4_STREAM_TYPE)?;
    registry.register(schema(stream))
}
