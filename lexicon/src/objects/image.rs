//! Image streams: data split into chunks, compressed, and stored in bevy
//! segments of `chunks_per_segment` chunks each.

use std::sync::Arc;

use crate::compression::CompressionMethod;
use crate::error::LexiconError;
use crate::iris::*;
use crate::model::{Attribute, Schema};
use crate::registry::SchemaRegistry;

/// Chunk size used when an image does not record one.
pub const DEFAULT_CHUNK_SIZE: u64 = 32 * 1024;

/// Chunks per bevy used when an image does not record a value.
pub const DEFAULT_CHUNKS_PER_SEGMENT: u64 = 1024;

/// Compression used when an image does not record one.
pub const DEFAULT_COMPRESSION: CompressionMethod = CompressionMethod::Zlib;

/// Categories an image may declare, as `(alias, identifier)`.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("memory_physical", AFF4_MEMORY_PHYSICAL),
    ("memory_virtual", AFF4_MEMORY_VIRTUAL),
    ("memory_pagefile", AFF4_MEMORY_PAGEFILE),
    ("disk_raw", AFF4_DISK_RAW),
    ("disk_partition", AFF4_DISK_PARTITION),
];

/// Returns the image schema extending `stream`.
#[must_use]
pub fn schema(stream: Arc<Schema>) -> Schema {
    let mut schema = Schema::new(AFF4_IMAGE_TYPE);
    schema.add_parent(stream);
    schema.add_attribute(
        "chunk_size",
        Attribute::new(
            AFF4_IMAGE_CHUNK_SIZE,
            XSD_INTEGER,
            "Size of an uncompressed chunk in bytes. Defaults to 32768.",
        ),
    );
    schema.add_attribute(
        "chunks_per_segment",
        Attribute::new(
            AFF4_IMAGE_CHUNKS_PER_SEGMENT,
            XSD_INTEGER,
            "Number of chunks stored in each bevy. Defaults to 1024.",
        ),
    );

    let mut compression = Attribute::new(
        AFF4_IMAGE_COMPRESSION,
        URN_TYPE,
        "Compression applied to every chunk. Defaults to zlib.",
    );
    for method in CompressionMethod::KNOWN {
        if let Ok(identifier) = method.to_identifier() {
            compression.allowed_value(method.as_str(), identifier);
        }
    }
    schema.add_attribute("compression", compression);

    let mut category = Attribute::new(
        AFF4_CATEGORY,
        URN_TYPE,
        "General kind of data the image holds.",
    );
    for (alias, identifier) in CATEGORIES {
        category.allowed_value(alias, identifier);
    }
    schema.add_attribute("category", category);

    schema.add_attribute(
        "pagefile_number",
        Attribute::new(
            AFF4_MEMORY_PAGEFILE_NUM,
            XSD_INTEGER,
            "Index of the pagefile a memory pagefile image was taken from.",
        ),
    );
    schema
}

/// Registers the image schema. The stream schema must already be registered.
///
/// # Errors
///
/// Returns [`LexiconError::UnknownObjectType`] if the stream schema is
/// missing, or [`LexiconError::DuplicateSchema`] if the image schema is
/// already registered.
pub fn register(registry: &mut SchemaRegistry) -> Result<Arc<Schema>, LexiconError> {
    let stream = registry.get_schema(AFF4_STREAM_TYPE)?;
    registry.register(schema(stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_values_match_the_mapping() {
        let image = schema(Arc::new(Schema::new(AFF4_STREAM_TYPE)));
        let compression = image.get_attribute("compression");
        assert!(compression.is_some_and(Attribute::is_enumerated));
        for method in CompressionMethod::KNOWN {
            let identifier = compression.and_then(|a| a.canonical_value(method.as_str()));
            assert_eq!(identifier.map(CompressionMethod::from_identifier), Some(method));
        }
        assert!(compression.is_some_and(|a| !a.permits("bogus://nothing")));
    }

    #[test]
    fn registration_requires_stream() {
        let mut registry = SchemaRegistry::new();
        assert_eq!(
            register(&mut registry).err(),
            Some(LexiconError::UnknownObjectType {
                object_type: AFF4_STREAM_TYPE.to_string()
            })
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(DEFAULT_CHUNK_SIZE, 32768);
        assert_eq!(DEFAULT_CHUNKS_PER_SEGMENT, 1024);
        assert_eq!(DEFAULT_COMPRESSION, CompressionMethod::default());
    }
}
