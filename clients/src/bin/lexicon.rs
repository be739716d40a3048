//! `aff4-lexicon` — Inspects the standard AFF4 vocabulary.
//!
//! **Subcommands:**
//! - `types` — list registered object types
//! - `schema <TYPE> [--json]` — print the effective attributes of an object type
//! - `compression <IDENTIFIER>` / `compression --encode <METHOD>` — translate
//!   compression identifiers
//! - `check` — run the conformance suite; exits non-zero on failure
//!
//! Logging goes to stderr and is configured through `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::BTreeMap;
use std::process;
use std::sync::Arc;

use aff4_conformance::{run_all, Severity};
use aff4_lexicon::{iris, Attribute, CompressionMethod, Schema, SchemaRegistry};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Inspect the AFF4 metadata vocabulary.
#[derive(Parser)]
#[command(name = "aff4-lexicon", about = "Inspect the AFF4 metadata vocabulary", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered object types.
    Types,
    /// Print the effective attributes of an object type.
    Schema {
        /// Object type identifier, or its local name under the AFF4 namespace
        /// (e.g. `image`).
        object_type: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Decode a compression identifier, or encode a method with `--encode`.
    Compression {
        /// Identifier to decode.
        #[arg(required_unless_present = "encode", conflicts_with = "encode")]
        identifier: Option<String>,
        /// Method name to encode: stored, zlib or snappy.
        #[arg(long, value_name = "METHOD")]
        encode: Option<String>,
    },
    /// Run the conformance suite against the standard registry.
    Check,
}

#[derive(Serialize)]
struct SchemaView<'a> {
    object_type: &'a str,
    extends: Vec<&'a str>,
    attributes: BTreeMap<&'a str, AttributeView<'a>>,
}

#[derive(Serialize)]
struct AttributeView<'a> {
    volatile: bool,
    #[serde(flatten)]
    attribute: &'a Attribute,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let registry = SchemaRegistry::standard();

    match args.command {
        Command::Types => {
            for object_type in registry.object_types() {
                println!("{object_type}");
            }
        }
        Command::Schema { object_type, json } => {
            let schema = resolve(registry, &object_type)?;
            if json {
                let rendered = serde_json::to_string_pretty(&view(&schema))
                    .context("Failed to serialize schema to JSON")?;
                println!("{rendered}");
            } else {
                print_schema(&schema);
            }
        }
        Command::Compression { identifier, encode } => match (identifier, encode) {
            (_, Some(name)) => {
                let Some(method) = CompressionMethod::from_name(&name) else {
                    bail!("Unknown compression method name: {name}");
                };
                let identifier = method
                    .to_identifier()
                    .with_context(|| format!("Cannot encode compression method {method}"))?;
                println!("{identifier}");
            }
            (Some(identifier), None) => {
                println!("{}", CompressionMethod::from_identifier(&identifier));
            }
            (None, None) => bail!("Expected an identifier or --encode <METHOD>"),
        },
        Command::Check => check(registry),
    }
    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Looks the object type up as given, then as a local name under the AFF4
/// namespace.
fn resolve(registry: &SchemaRegistry, object_type: &str) -> Result<Arc<Schema>> {
    if registry.contains(object_type) {
        return Ok(registry.get_schema(object_type)?);
    }
    let qualified = format!("{}{}", iris::AFF4, object_type);
    tracing::debug!(object_type, qualified = %qualified, "resolving local name");
    registry
        .get_schema(&qualified)
        .with_context(|| format!("Unknown object type: {object_type}"))
}

fn view(schema: &Schema) -> SchemaView<'_> {
    SchemaView {
        object_type: schema.object_type(),
        extends: schema.ancestors(),
        attributes: schema
            .all_attributes()
            .into_iter()
            .map(|(alias, attribute)| {
                let volatile = iris::is_volatile(attribute.identifier());
                (alias, AttributeView { volatile, attribute })
            })
            .collect(),
    }
}

fn print_schema(schema: &Schema) {
    println!("{}", schema.object_type());
    let ancestors = schema.ancestors();
    if !ancestors.is_empty() {
        println!("  extends {}", ancestors.join(", "));
    }
    for (alias, attribute) in schema.all_attributes() {
        let inherited = if schema.attributes().contains_key(alias) {
            ""
        } else {
            " (inherited)"
        };
        let volatile = if iris::is_volatile(attribute.identifier()) {
            " (volatile)"
        } else {
            ""
        };
        println!(
            "  {:20} {} : {}{}{}",
            alias,
            attribute.identifier(),
            attribute.value_type(),
            inherited,
            volatile
        );
        if !attribute.description().is_empty() {
            println!("  {:20} {}", "", attribute.description());
        }
        for (value_alias, value) in attribute.allowed_values() {
            println!("  {:20}   {} = {}", "", value_alias, value);
        }
    }
}

fn check(registry: &SchemaRegistry) {
    let report = run_all(registry);

    println!("AFF4 Lexicon Conformance Report");
    println!("===============================");
    println!();

    for finding in &report.findings {
        let subject = finding
            .subject
            .as_deref()
            .map(|s| format!(" <{s}>"))
            .unwrap_or_default();
        println!(
            "[{}] {}{} — {}",
            finding.severity.label(),
            finding.validator,
            subject,
            finding.message
        );
        for detail in &finding.details {
            println!("       {}", detail);
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }
    println!("Conformance PASSED.");
}
