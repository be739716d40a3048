//! Zip-based volumes and their member segments.

use std::sync::Arc;

use crate::error::LexiconError;
use crate::iris::{AFF4_OBJECT_TYPE, AFF4_STREAM_TYPE, AFF4_ZIP_SEGMENT_TYPE, AFF4_ZIP_TYPE};
use crate::model::Schema;
use crate::registry::SchemaRegistry;

/// Returns the zip volume schema extending `object`.
#[must_use]
pub fn volume_schema(object: Arc<Schema>) -> Schema {
    let mut schema = Schema::new(AFF4_ZIP_TYPE);
    schema.add_parent(object);
    schema
}

/// Returns the zip segment schema extending `stream`.
#[must_use]
pub fn segment_schema(stream: Arc<Schema>) -> Schema {
    let mut schema = Schema::new(AFF4_ZIP_SEGMENT_TYPE);
    schema.add_parent(stream);
    schema
}

/// Registers the zip volume schema. The base object schema must already be
/// registered.
///
/// # Errors
///
/// Returns [`LexiconError::UnknownObjectType`] if the base object schema is
/// missing, or [`LexiconError::DuplicateSchema`] if the volume schema is
/// already registered.
pub fn register_volume(registry: &mut SchemaRegistry) -> Result<Arc<Schema>, LexiconError> {
    let object = registry.get_schema(AFF4_OBJECT_TYPE)?;
    registry.register(volume_schema(object))
}

/// Registers the zip segment schema. The stream schema must already be
/// registered.
///
/// # Errors
///
/// Returns [`LexiconError::UnknownObjectType`] if the stream schema is
/// missing, or [`LexiconError::DuplicateSchema`] if the segment schema is
/// already registered.
pub fn register_segment(registry: &mut SchemaRegistry) -> Result<Arc<Schema>, LexiconError> {
    let stream = registry.get_schema(AFF4_STREAM_TYPE)?;
    registry.register(segment_schema(stream))
}
