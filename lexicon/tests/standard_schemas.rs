//! The standard AFF4 object schemas.

use aff4_lexicon::objects;
use aff4_lexicon::{iris, CompressionMethod, LexiconError, SchemaRegistry};

#[test]
fn image_inherits_stream_and_object() -> Result<(), LexiconError> {
    let image = SchemaRegistry::standard().get_schema(iris::AFF4_IMAGE_TYPE)?;
    let all = image.all_attributes();
    for alias in [
        "type",
        "stored",
        "contains",
        "size",
        "writable",
        "chunk_size",
        "chunks_per_segment",
        "compression",
        "category",
        "pagefile_number",
    ] {
        assert!(all.contains_key(alias), "image lacks {alias}");
    }
    assert_eq!(image.ancestors(), [iris::AFF4_STREAM_TYPE, iris::AFF4_OBJECT_TYPE]);
    Ok(())
}

#[test]
fn inheritance_chains() -> Result<(), LexiconError> {
    let registry = SchemaRegistry::standard();
    let zip_volume = registry.get_schema(iris::AFF4_ZIP_TYPE)?;
    assert!(zip_volume.extends(iris::AFF4_OBJECT_TYPE));
    assert!(!zip_volume.extends(iris::AFF4_STREAM_TYPE));
    assert!(zip_volume.get_attribute("size").is_none());

    for object_type in [iris::AFF4_ZIP_SEGMENT_TYPE, iris::AFF4_MAP_TYPE] {
        let schema = registry.get_schema(object_type)?;
        assert!(schema.extends(iris::AFF4_STREAM_TYPE));
        assert!(schema.get_attribute("chunk_size").is_none());
        assert!(schema.get_attribute("size").is_some());
    }
    Ok(())
}

#[test]
fn writable_is_volatile_and_enumerated() -> Result<(), LexiconError> {
    let stream = SchemaRegistry::standard().get_schema(iris::AFF4_STREAM_TYPE)?;
    let writable = stream.get_attribute("writable");
    assert!(writable.is_some_and(|a| iris::is_volatile(a.identifier())));
    for mode in objects::stream::WRITE_MODES {
        assert!(writable.is_some_and(|a| a.permits(mode)));
    }
    assert!(writable.is_some_and(|a| !a.permits("write")));
    Ok(())
}

#[test]
fn image_compression_lookup_by_identifier() -> Result<(), LexiconError> {
    let image = SchemaRegistry::standard().get_schema(iris::AFF4_IMAGE_TYPE)?;
    let compression = image.attribute_by_identifier(iris::AFF4_IMAGE_COMPRESSION);
    assert!(compression.is_some_and(|a| a.permits(iris::AFF4_IMAGE_COMPRESSION_SNAPPY)));
    assert_eq!(
        compression.and_then(|a| a.canonical_value("stored")),
        Some(iris::AFF4_IMAGE_COMPRESSION_STORED)
    );
    assert_eq!(
        objects::image::DEFAULT_COMPRESSION.to_identifier(),
        Ok(iris::AFF4_IMAGE_COMPRESSION_ZLIB)
    );
    assert_eq!(
        compression.and_then(|a| a.canonical_value(CompressionMethod::Unknown.as_str())),
        None
    );
    Ok(())
}

#[test]
fn image_categories() -> Result<(), LexiconError> {
    let image = SchemaRegistry::standard().get_schema(iris::AFF4_IMAGE_TYPE)?;
    let category = image.get_attribute("category");
    for (_, identifier) in objects::image::CATEGORIES {
        assert!(category.is_some_and(|a| a.permits(identifier)));
    }
    assert!(category.is_some_and(|a| !a.permits(iris::AFF4_MEMORY_PAGEFILE_NUM)));
    Ok(())
}

#[test]
fn standard_registration_is_not_repeatable() -> Result<(), LexiconError> {
    let mut registry = SchemaRegistry::new();
    objects::register_all(&mut registry)?;
    assert_eq!(registry.len(), 6);
    assert_eq!(
        objects::register_all(&mut registry),
        Err(LexiconError::DuplicateSchema {
            object_type: iris::AFF4_OBJECT_TYPE.to_string()
        })
    );
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn attributes_serialize_without_empty_enumerations() -> Result<(), Box<dyn std::error::Error>> {
    let image = SchemaRegistry::standard().get_schema(iris::AFF4_IMAGE_TYPE)?;
    let json = serde_json::to_value(image.get_attribute("chunk_size"))?;
    assert_eq!(json["identifier"], iris::AFF4_IMAGE_CHUNK_SIZE);
    assert!(json.get("allowed_values").is_none());

    let json = serde_json::to_value(image.get_attribute("compression"))?;
    assert_eq!(json["allowed_values"]["zlib"], iris::AFF4_IMAGE_COMPRESSION_ZLIB);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn compression_methods_serialize_as_short_names() -> Result<(), serde_json::Error> {
    assert_eq!(serde_json::to_value(CompressionMethod::Snappy)?, "snappy");
    assert_eq!(
        serde_json::to_value(objects::image::DEFAULT_COMPRESSION)?,
        CompressionMethod::default().as_str()
    );
    for method in CompressionMethod::KNOWN {
        assert_eq!(serde_json::to_value(method)?, method.as_str());
    }
    Ok(())
}
