//! Compression enumeration validator.
//!
//! The image `compression` attribute must enumerate exactly the encodable
//! compression methods, each aliased by its short name and mapped to the
//! identifier `CompressionMethod::to_identifier` produces.

use aff4_lexicon::{iris, CompressionMethod, SchemaRegistry};

use crate::report::{ConformanceReport, Finding};

const VALIDATOR: &str = "compression";

/// Validates the image compression enumeration against the identifier
/// mapping.
pub fn validate(registry: &SchemaRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let Ok(image) = registry.get_schema(iris::AFF4_IMAGE_TYPE) else {
        report.push(Finding::warn(VALIDATOR, "No image schema registered; skipped"));
        return report;
    };
    let Some(attribute) = image.attribute_by_identifier(iris::AFF4_IMAGE_COMPRESSION) else {
        report.push(
            Finding::fail(VALIDATOR, "Image schema does not declare compression")
                .about(iris::AFF4_IMAGE_TYPE),
        );
        return report;
    };

    let mut problems = Vec::new();
    for (alias, identifier) in attribute.allowed_values() {
        let method = CompressionMethod::from_identifier(identifier);
        if !method.is_known() {
            problems.push(format!("{alias}: <{identifier}> decodes to unknown"));
        } else if method.as_str() != alias.as_str() {
            problems.push(format!("{alias}: <{identifier}> decodes to {method}"));
        }
    }
    for method in CompressionMethod::KNOWN {
        let expected = method.to_identifier().ok();
        if attribute.canonical_value(method.as_str()) != expected {
            problems.push(format!("{method}: missing or not mapped to its identifier"));
        }
    }

    if problems.is_empty() {
        report.push(
            Finding::pass(
                VALIDATOR,
                format!(
                    "Compression enumeration matches the {} known methods",
                    CompressionMethod::KNOWN.len()
                ),
            )
            .about(iris::AFF4_IMAGE_TYPE),
        );
    } else {
        report.push(
            Finding::fail(VALIDATOR, "Compression enumeration disagrees with the mapping")
                .about(iris::AFF4_IMAGE_TYPE)
                .with_details(problems),
        );
    }
    report
}
