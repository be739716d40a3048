//! Vocabulary validator.
//!
//! Checks the identifiers declared by each schema's own attributes:
//! - identifiers are a known namespace followed by a non-empty local name
//! - value types are URN or one of the supported XSD types
//! - enumerated attributes have non-empty, distinct canonical values
//!
//! Object types outside the AFF4 namespace are legal for extensions and are
//! reported as warnings.

use std::collections::HashSet;

use aff4_lexicon::{iris, Schema, SchemaRegistry};

use crate::report::{ConformanceReport, Finding};

const NAMESPACE: &str = "vocabulary/namespace";
const VALUE_TYPE: &str = "vocabulary/value_type";
const ENUMERATION: &str = "vocabulary/enumeration";

/// Namespaces standard attribute identifiers may live in. More specific
/// prefixes come first.
const KNOWN_NAMESPACES: [&str; 5] = [
    iris::AFF4_MEMORY,
    iris::AFF4_DISK,
    iris::AFF4,
    iris::AFF4_VOLATILE,
    iris::RDF,
];

/// Validates the vocabulary of every registered schema.
pub fn validate(registry: &SchemaRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for schema in registry.schemas() {
        validate_object_type(schema, &mut report);
        validate_identifiers(schema, &mut report);
        validate_value_types(schema, &mut report);
        validate_enumerations(schema, &mut report);
    }
    report
}

/// Returns the local name of `identifier` if it extends a known namespace.
fn local_name(identifier: &str) -> Option<&str> {
    KNOWN_NAMESPACES
        .iter()
        .find_map(|ns| identifier.strip_prefix(ns))
        .filter(|local| !local.is_empty())
}

fn validate_object_type(schema: &Schema, report: &mut ConformanceReport) {
    let object_type = schema.object_type();
    if local_name(object_type).is_some() {
        report.push(Finding::pass(NAMESPACE, "Object type is namespaced").about(object_type));
    } else {
        report.push(
            Finding::warn(NAMESPACE, "Object type lies outside the AFF4 namespaces")
                .about(object_type),
        );
    }
}

fn validate_identifiers(schema: &Schema, report: &mut ConformanceReport) {
    let mut outside = Vec::new();
    let mut seen = HashSet::new();
    let mut duplicated = Vec::new();

    for (alias, attribute) in schema.attributes() {
        if local_name(attribute.identifier()).is_none() {
            outside.push(format!("{alias}: <{}>", attribute.identifier()));
        }
        if !seen.insert(attribute.identifier()) {
            duplicated.push(format!("{alias}: <{}>", attribute.identifier()));
        }
    }

    if outside.is_empty() {
        report.push(
            Finding::pass(NAMESPACE, "All attribute identifiers are namespaced")
                .about(schema.object_type()),
        );
    } else {
        // Extension attributes may use their own namespace.
        report.push(
            Finding::warn(NAMESPACE, "Attribute identifiers outside the AFF4 namespaces")
                .about(schema.object_type())
                .with_details(outside),
        );
    }

    if !duplicated.is_empty() {
        report.push(
            Finding::fail(NAMESPACE, "Identifier declared under more than one alias")
                .about(schema.object_type())
                .with_details(duplicated),
        );
    }
}

fn validate_value_types(schema: &Schema, report: &mut ConformanceReport) {
    let unknown: Vec<String> = schema
        .attributes()
        .iter()
        .filter(|(_, a)| !iris::is_value_type(a.value_type()))
        .map(|(alias, a)| format!("{alias}: {}", a.value_type()))
        .collect();

    if unknown.is_empty() {
        report.push(
            Finding::pass(VALUE_TYPE, "All value types are supported").about(schema.object_type()),
        );
    } else {
        report.push(
            Finding::fail(VALUE_TYPE, "Unsupported value types")
                .about(schema.object_type())
                .with_details(unknown),
        );
    }
}

fn validate_enumerations(schema: &Schema, report: &mut ConformanceReport) {
    for (alias, attribute) in schema.attributes() {
        if !attribute.is_enumerated() {
            continue;
        }
        let mut problems = Vec::new();
        let mut canonical = HashSet::new();
        for (value_alias, value) in attribute.allowed_values() {
            if value_alias.is_empty() || value.is_empty() {
                problems.push(format!("empty alias or value: {value_alias:?} -> {value:?}"));
            }
            if !canonical.insert(value.as_str()) {
                problems.push(format!("{value_alias} repeats canonical value {value}"));
            }
        }
        if problems.is_empty() {
            report.push(
                Finding::pass(
                    ENUMERATION,
                    format!("{alias}: {} allowed values", attribute.allowed_values().len()),
                )
                .about(schema.object_type()),
            );
        } else {
            report.push(
                Finding::fail(ENUMERATION, format!("{alias}: malformed enumeration"))
                    .about(schema.object_type())
                    .with_details(problems),
            );
        }
    }
}
