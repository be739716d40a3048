//! Schema registry: one canonical [`Schema`] per object type.
//!
//! A registry is an explicit value owned by whichever component manages
//! object-type definitions. [`SchemaRegistry::standard`] is the one shared
//! instance; it holds the standard AFF4 schemas and is built on first use.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::error::LexiconError;
use crate::model::Schema;
use crate::objects;

/// Keyed-by-object-type store of published schemas.
///
/// Registration needs `&mut` access and therefore happens before the
/// registry is shared. A registered schema is handed out as `Arc<Schema>`
/// and is never mutated again.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry holding the standard AFF4 object schemas.
    ///
    /// ```
    /// use aff4_lexicon::{iris, SchemaRegistry};
    ///
    /// let image = SchemaRegistry::standard().get_schema(iris::AFF4_IMAGE_TYPE)?;
    /// assert!(image.get_attribute("size").is_some());
    /// # Ok::<(), aff4_lexicon::LexiconError>(())
    /// ```
    #[must_use]
    pub fn standard() -> &'static SchemaRegistry {
        static STANDARD: OnceLock<SchemaRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let schemas = objects::standard_schemas()
                .into_iter()
                .map(|schema| (schema.object_type().to_string(), schema))
                .collect();
            SchemaRegistry { schemas }
        })
    }

    /// Publishes `schema` under its object type.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::DuplicateSchema`] if a schema for the same
    /// object type is already registered; the existing schema is kept.
    pub fn register(&mut self, schema: Schema) -> Result<Arc<Schema>, LexiconError> {
        let object_type = schema.object_type().to_string();
        if self.schemas.contains_key(&object_type) {
            return Err(LexiconError::DuplicateSchema { object_type });
        }
        tracing::debug!(
            object_type = %object_type,
            attributes = schema.attributes().len(),
            parents = schema.parents().len(),
            "registering schema"
        );
        let schema = Arc::new(schema);
        self.schemas.insert(object_type, Arc::clone(&schema));
        Ok(schema)
    }

    /// Returns the canonical schema for `object_type`.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UnknownObjectType`] if nothing is registered
    /// under `object_type`. Unknown types are never created implicitly.
    pub fn get_schema(&self, object_type: &str) -> Result<Arc<Schema>, LexiconError> {
        self.schemas
            .get(object_type)
            .cloned()
            .ok_or_else(|| LexiconError::UnknownObjectType {
                object_type: object_type.to_string(),
            })
    }

    /// Returns `true` if a schema is registered for `object_type`.
    #[must_use]
    pub fn contains(&self, object_type: &str) -> bool {
        self.schemas.contains_key(object_type)
    }

    /// Registered object types in sorted order.
    pub fn object_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// All registered schemas, sorted by object type.
    pub fn schemas(&self) -> impl Iterator<Item = &Arc<Schema>> {
        self.schemas.values()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
