//! Byte streams: the base of images, maps and zip segments.

use std::sync::Arc;

use crate::error::LexiconError;
use crate::iris::*;
use crate::model::{Attribute, Schema};
use crate::registry::SchemaRegistry;

/// Open modes accepted by the volatile `writable` attribute.
pub const WRITE_MODES: [&str; 3] = ["read", "truncate", "append"];

/// Returns the stream schema extending `object`.
#[must_use]
pub fn schema(object: Arc<Schema>) -> Schema {
    let mut schema = Schema::new(AFF4_STREAM_TYPE);
    schema.add_parent(object);
    schema.add_attribute(
        "size",
        Attribute::new(
            AFF4_STREAM_SIZE,
            XSD_INTEGER,
            "Length of the stream in bytes.",
        ),
    );

    // Volatile: describes how the stream is currently open, never persisted.
    let mut writable = Attribute::new(
        AFF4_STREAM_WRITE_MODE,
        XSD_STRING,
        "Mode the stream is open in.",
    );
    for mode in WRITE_MODES {
        writable.allowed_value(mode, mode);
    }
    schema.add_attribute("writable", writable);
    schema
}

/// Registers the stream schema. The base object schema must already be
/// registered.
///
/// # Errors
///
/// Returns [`LexiconError::UnknownObjectType`] if the base object schema is
/// missing, or [`LexiconError::DuplicateSchema`] if the stream schema is
/// already registered.
pub fn register(registry: &mut SchemaRegistry) -> Result<Arc<Schema>, LexiconError> {
    let object = registry.get_schema(AFF4_OBJECT_TYPE)?;
    registry.register(schema(object))
}
