//! AFF4 metadata vocabulary as typed Rust data.
//!
//! The `aff4-lexicon` crate describes which metadata attributes each AFF4
//! object type may carry, how object-type schemas inherit from one another,
//! and how compression methods map to their interoperable identifiers.
//!
//! # Entry Point
//!
//! ```
//! use aff4_lexicon::{iris, CompressionMethod, SchemaRegistry};
//!
//! let image = SchemaRegistry::standard().get_schema(iris::AFF4_IMAGE_TYPE)?;
//! let compression = image.get_attribute("compression").map(|a| a.value_type());
//! assert_eq!(compression, Some(iris::URN_TYPE));
//!
//! let method = CompressionMethod::from_identifier(iris::AFF4_IMAGE_COMPRESSION_SNAPPY);
//! assert_eq!(method, CompressionMethod::Snappy);
//! # Ok::<(), aff4_lexicon::LexiconError>(())
//! ```
//!
//! # Custom registries
//!
//! Components that define their own object types build a [`SchemaRegistry`]
//! of their own, registering each schema after its parents:
//!
//! ```
//! use aff4_lexicon::{iris, objects, Attribute, Schema, SchemaRegistry};
//!
//! let mut registry = SchemaRegistry::new();
//! objects::register_all(&mut registry)?;
//!
//! let mut bitmap = Schema::new("http://example.com/Schema#bitmap");
//! bitmap.add_parent(registry.get_schema(iris::AFF4_MAP_TYPE)?);
//! bitmap.add_attribute(
//!     "block_size",
//!     Attribute::new("http://example.com/Schema#block_size", iris::XSD_INTEGER, ""),
//! );
//! let bitmap = registry.register(bitmap)?;
//! assert!(bitmap.extends(iris::AFF4_STREAM_TYPE));
//! # Ok::<(), aff4_lexicon::LexiconError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod compression;
pub mod error;
pub mod iris;
pub mod model;
pub mod objects;
pub mod registry;

pub use compression::CompressionMethod;
pub use error::LexiconError;
pub use model::{Attribute, Schema};
pub use registry::SchemaRegistry;
