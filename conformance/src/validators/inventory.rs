//! Inventory validator.
//!
//! Verifies that the standard AFF4 object types are registered with their
//! expected parent:
//! - object (root)
//! - zip_volume and stream extend object
//! - zip_segment, image and map extend stream
//!
//! Registries holding only extension types report missing standard types as
//! warnings.

use aff4_lexicon::{iris, SchemaRegistry};

use crate::report::{ConformanceReport, Finding};

const VALIDATOR: &str = "inventory";

/// Standard object types and the parent each must extend.
const EXPECTED: [(&str, Option<&str>); 6] = [
    (iris::AFF4_OBJECT_TYPE, None),
    (iris::AFF4_ZIP_TYPE, Some(iris::AFF4_OBJECT_TYPE)),
    (iris::AFF4_STREAM_TYPE, Some(iris::AFF4_OBJECT_TYPE)),
    (iris::AFF4_ZIP_SEGMENT_TYPE, Some(iris::AFF4_STREAM_TYPE)),
    (iris::AFF4_IMAGE_TYPE, Some(iris::AFF4_STREAM_TYPE)),
    (iris::AFF4_MAP_TYPE, Some(iris::AFF4_STREAM_TYPE)),
];

/// Validates the presence and parentage of the standard object types.
pub fn validate(registry: &SchemaRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for (object_type, parent) in EXPECTED {
        let Ok(schema) = registry.get_schema(object_type) else {
            report.push(
                Finding::warn(VALIDATOR, "Standard object type not registered").about(object_type),
            );
            continue;
        };
        match parent {
            Some(parent) if !schema.extends(parent) => report.push(
                Finding::fail(VALIDATOR, format!("Does not extend <{parent}>")).about(object_type),
            ),
            None if !schema.parents().is_empty() => report.push(
                Finding::fail(VALIDATOR, "Root object type has parents").about(object_type),
            ),
            _ => report.push(Finding::pass(VALIDATOR, "Registered").about(object_type)),
        }
    }
    report
}
