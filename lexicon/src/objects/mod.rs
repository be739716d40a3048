//! Standard AFF4 object-type schemas.
//!
//! Each sub-module defines the schema of one object type and registers it,
//! resolving its parent through the registry. Registration therefore has to
//! follow the inheritance order used by [`register_all`]:
//!
//! `object → zip_volume, stream → zip_segment, image, map`

pub mod image;
pub mod map;
pub mod object;
pub mod stream;
pub mod zip;

use std::sync::Arc;

use crate::error::LexiconError;
use crate::model::Schema;
use crate::registry::SchemaRegistry;

/// Registers every standard object schema into `registry`.
///
/// # Errors
///
/// Returns [`LexiconError::DuplicateSchema`] if `registry` already holds one
/// of the standard object types.
pub fn register_all(registry: &mut SchemaRegistry) -> Result<(), LexiconError> {
    object::register(registry)?;
    zip::register_volume(registry)?;
    stream::register(registry)?;
    zip::register_segment(registry)?;
    image::register(registry)?;
    map::register(registry)?;
    Ok(())
}

/// Builds the standard object schemas with their parents linked directly,
/// in the order [`register_all`] registers them.
#[must_use]
pub fn standard_schemas() -> Vec<Arc<Schema>> {
    let object = Arc::new(object::schema());
    let volume = Arc::new(zip::volume_schema(Arc::clone(&object)));
    let stream = Arc::new(stream::schema(Arc::clone(&object)));
    let segment = Arc::new(zip::segment_schema(Arc::clone(&stream)));
    let image = Arc::new(image::schema(Arc::clone(&stream)));
    let map = Arc::new(map::schema(Arc::clone(&stream)));
    vec![object, volume, stream, segment, image, map]
}
