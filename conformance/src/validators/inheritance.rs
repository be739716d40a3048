//! Inheritance validator.
//!
//! Lookups in the lexicon tolerate duplicated parent graphs by visiting each
//! schema instance once. This validator reports those graphs as configuration
//! defects instead:
//! - a schema must not appear among its own ancestors
//! - every parent must be the schema registered for its object type
//! - an own attribute that shadows an inherited alias should keep the
//!   inherited identifier

use std::sync::Arc;

use aff4_lexicon::{Schema, SchemaRegistry};

use crate::report::{ConformanceReport, Finding};

const CYCLE: &str = "inheritance/cycle";
const REGISTERED: &str = "inheritance/registered";
const SHADOWING: &str = "inheritance/shadowing";

/// Validates the parent graph of every registered schema.
pub fn validate(registry: &SchemaRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for schema in registry.schemas() {
        validate_acyclic(schema, &mut report);
        validate_registered_parents(registry, schema, &mut report);
        validate_shadowing(schema, &mut report);
    }
    report
}

fn validate_acyclic(schema: &Schema, report: &mut ConformanceReport) {
    let mut path = vec![schema.object_type()];
    let mut cycles = Vec::new();
    find_cycles(schema, &mut path, &mut cycles);

    if cycles.is_empty() {
        report.push(Finding::pass(CYCLE, "Parent graph is acyclic").about(schema.object_type()));
    } else {
        report.push(
            Finding::fail(CYCLE, "Object type reappears among its own ancestors")
                .about(schema.object_type())
                .with_details(cycles),
        );
    }
}

/// Depth-first search recording every parent edge that leads back to an
/// object type already on the current path.
fn find_cycles<'a>(schema: &'a Schema, path: &mut Vec<&'a str>, cycles: &mut Vec<String>) {
    for parent in schema.parents() {
        let object_type = parent.object_type();
        if path.contains(&object_type) {
            cycles.push(format!("{} -> {}", path.join(" -> "), object_type));
            continue;
        }
        path.push(object_type);
        find_cycles(parent, path, cycles);
        path.pop();
    }
}

fn validate_registered_parents(
    registry: &SchemaRegistry,
    schema: &Schema,
    report: &mut ConformanceReport,
) {
    for parent in schema.parents() {
        let object_type = parent.object_type();
        match registry.get_schema(object_type) {
            Ok(registered) if Arc::ptr_eq(&registered, parent) => report.push(
                Finding::pass(REGISTERED, format!("Parent <{object_type}> is registered"))
                    .about(schema.object_type()),
            ),
            Ok(_) => report.push(
                Finding::warn(
                    REGISTERED,
                    format!("Parent <{object_type}> is a copy of the registered schema"),
                )
                .about(schema.object_type()),
            ),
            Err(err) => report.push(
                Finding::fail(REGISTERED, format!("Parent <{object_type}> is not registered"))
                    .about(schema.object_type())
                    .with_details(vec![err.to_string()]),
            ),
        }
    }
}

fn validate_shadowing(schema: &Schema, report: &mut ConformanceReport) {
    let mut changed = Vec::new();
    for (alias, own) in schema.attributes() {
        for parent in schema.parents() {
            if let Some(inherited) = parent.get_attribute(alias) {
                if inherited.identifier() != own.identifier() {
                    changed.push(format!(
                        "{alias}: <{}> overrides <{}> from <{}>",
                        own.identifier(),
                        inherited.identifier(),
                        parent.object_type()
                    ));
                }
            }
        }
    }
    if !changed.is_empty() {
        report.push(
            Finding::warn(SHADOWING, "Override changes the attribute identifier")
                .about(schema.object_type())
                .with_details(changed),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aff4_lexicon::{iris, Attribute, LexiconError};

    #[test]
    fn self_snapshot_is_a_cycle() {
        let snapshot = Arc::new(Schema::new("urn:t"));
        let mut schema = Schema::new("urn:t");
        schema.add_parent(snapshot);

        let mut report = ConformanceReport::new();
        validate_acyclic(&schema, &mut report);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.findings[0].details, ["urn:t -> urn:t"]);
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let base = Arc::new(Schema::new("base"));
        let mut left = Schema::new("left");
        left.add_parent(Arc::clone(&base));
        let mut right = Schema::new("right");
        right.add_parent(base);
        let mut bottom = Schema::new("bottom");
        bottom.add_parent(Arc::new(left));
        bottom.add_parent(Arc::new(right));

        let mut report = ConformanceReport::new();
        validate_acyclic(&bottom, &mut report);
        assert!(report.all_passed());
    }

    #[test]
    fn unregistered_and_copied_parents() -> Result<(), LexiconError> {
        let mut registry = SchemaRegistry::new();
        registry.register(Schema::new("registered"))?;

        let mut child = Schema::new("child");
        child.add_parent(Arc::new(Schema::new("registered")));
        child.add_parent(Arc::new(Schema::new("missing")));
        registry.register(child)?;

        let report = validate(&registry);
        let findings: Vec<_> = report.by_validator(REGISTERED).collect();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].severity, crate::Severity::Warning);
        assert!(findings[1].is_failure());
        Ok(())
    }

    #[test]
    fn identifier_changing_override_warns() {
        let mut parent = Schema::new("p");
        parent.add_attribute("size", Attribute::new(iris::AFF4_STREAM_SIZE, iris::XSD_INTEGER, ""));
        let mut child = Schema::new("c");
        child.add_parent(Arc::new(parent));
        child.add_attribute("size", Attribute::new("urn:other", iris::XSD_INTEGER, ""));

        let mut report = ConformanceReport::new();
        validate_shadowing(&child, &mut report);
        assert_eq!(report.count(crate::Severity::Warning), 1);
    }
}
