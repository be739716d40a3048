//! End-to-end conformance runs.

use std::sync::Arc;

use aff4_conformance::{run_all, Severity};
use aff4_lexicon::{iris, objects, Attribute, LexiconError, Schema, SchemaRegistry};

#[test]
fn standard_registry_conforms() {
    let report = run_all(SchemaRegistry::standard());
    let failures: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.is_failure())
        .map(|f| format!("{} {:?}: {}", f.validator, f.subject, f.message))
        .collect();
    assert!(failures.is_empty(), "{failures:#?}");
    assert_eq!(report.count(Severity::Warning), 0);
}

#[test]
fn extension_types_warn_but_pass() -> Result<(), LexiconError> {
    let mut registry = SchemaRegistry::new();
    objects::register_all(&mut registry)?;

    let mut bitmap = Schema::new("http://example.com/Schema#bitmap");
    bitmap.add_parent(registry.get_schema(iris::AFF4_MAP_TYPE)?);
    bitmap.add_attribute(
        "block_size",
        Attribute::new("http://example.com/Schema#block_size", iris::XSD_INTEGER, ""),
    );
    registry.register(bitmap)?;

    let report = run_all(&registry);
    assert!(report.all_passed());
    // Both the object type and its attribute lie outside the AFF4 namespaces.
    assert_eq!(report.count(Severity::Warning), 2);
    Ok(())
}

#[test]
fn malformed_registry_fails() -> Result<(), LexiconError> {
    let mut registry = SchemaRegistry::new();
    objects::register_all(&mut registry)?;

    // One parent is a stale snapshot of the schema's own type, the other was
    // never registered.
    let mut looping = Schema::new("http://aff4.org/Schema#looping");
    looping.add_parent(Arc::new(Schema::new("http://aff4.org/Schema#looping")));
    looping.add_parent(Arc::new(Schema::new("http://aff4.org/Schema#unregistered")));
    looping.add_attribute(
        "flag",
        Attribute::new("http://aff4.org/Schema#flag", "http://example.com/bool", ""),
    );
    registry.register(looping)?;

    let report = run_all(&registry);
    assert!(!report.all_passed());
    let failing: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.is_failure())
        .map(|f| f.validator)
        .collect();
    assert!(failing.contains(&"inheritance/cycle"));
    assert!(failing.contains(&"inheritance/registered"));
    assert!(failing.contains(&"vocabulary/value_type"));
    Ok(())
}
