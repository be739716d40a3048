//! AFF4 lexicon conformance suite.
//!
//! Checks a [`SchemaRegistry`] against the rules every AFF4 vocabulary must
//! follow so that containers stay readable by other implementations.
//!
//! # Conformance Scope
//!
//! | Validator | Rule |
//! |-----------|------|
//! | `vocabulary/namespace` | attribute identifiers are namespace + local name |
//! | `vocabulary/value_type` | value types are URN or a supported XSD type |
//! | `vocabulary/enumeration` | enumerated values are non-empty and distinct |
//! | `inheritance/cycle` | no schema is its own ancestor |
//! | `inheritance/registered` | parents are the registered canonical schemas |
//! | `inheritance/shadowing` | overrides keep the inherited identifier |
//! | `compression` | the image compression enumeration matches the mapping |
//! | `inventory` | the standard object types are present |
//!
//! # Entry Point
//!
//! ```
//! use aff4_conformance::run_all;
//! use aff4_lexicon::SchemaRegistry;
//!
//! let report = run_all(SchemaRegistry::standard());
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use aff4_lexicon::SchemaRegistry;

pub use report::{ConformanceReport, Finding, Severity};

/// Runs every validator against `registry` and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Vocabulary (namespaces, value types, enumerations)
/// 2. Inheritance (cycles, registration, shadowing)
/// 3. Compression enumeration
/// 4. Standard inventory
pub fn run_all(registry: &SchemaRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.extend(validators::vocabulary::validate(registry));
    report.extend(validators::inheritance::validate(registry));
    report.extend(validators::compression::validate(registry));
    report.extend(validators::inventory::validate(registry));

    tracing::debug!(
        findings = report.findings.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    report
}
