//! Core schema model types.
//!
//! An [`Attribute`] describes one legal metadata field. A [`Schema`] collects
//! the attributes legal on one AFF4 object type and the parent schemas it
//! inherits from. Schemas are built with `&mut` access and then published
//! behind an [`Arc`]; once shared they are never mutated again.

use std::collections::{BTreeMap, HashSet};
use std::ops::ControlFlow;
use std::sync::Arc;

/// A legal metadata field: identifier, value type, description, and an
/// optional closed set of allowed values.
///
/// Validation of stored values happens in the RDF value layer; this type only
/// records what is legal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    identifier: String,
    value_type: String,
    description: String,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "BTreeMap::is_empty")
    )]
    allowed_values: BTreeMap<String, String>,
}

impl Attribute {
    /// Creates an unconstrained attribute.
    pub fn new(
        identifier: impl Into<String>,
        value_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            value_type: value_type.into(),
            description: description.into(),
            allowed_values: BTreeMap::new(),
        }
    }

    /// Adds `alias → value` to the enumeration constraint, replacing any
    /// value previously registered under `alias`.
    pub fn allowed_value(&mut self, alias: impl Into<String>, value: impl Into<String>) {
        self.allowed_values.insert(alias.into(), value.into());
    }

    /// Builder form of [`Attribute::allowed_value`].
    #[must_use]
    pub fn with_allowed_value(
        mut self,
        alias: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.allowed_value(alias, value);
        self
    }

    /// Fully-qualified identifier of the attribute.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Fully-qualified identifier of the value type.
    #[must_use]
    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    /// Free-text documentation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The enumeration constraint as `alias → canonical value`. Empty when
    /// the attribute is unconstrained.
    #[must_use]
    pub fn allowed_values(&self) -> &BTreeMap<String, String> {
        &self.allowed_values
    }

    /// Returns `true` if the attribute is restricted to a closed set of values.
    #[must_use]
    pub fn is_enumerated(&self) -> bool {
        !self.allowed_values.is_empty()
    }

    /// Resolves an enumeration alias to its canonical value.
    #[must_use]
    pub fn canonical_value(&self, alias: &str) -> Option<&str> {
        self.allowed_values.get(alias).map(String::as_str)
    }

    /// Returns `true` if `value` is legal for this attribute: either the
    /// attribute is unconstrained or `value` is one of the canonical values.
    #[must_use]
    pub fn permits(&self, value: &str) -> bool {
        !self.is_enumerated() || self.allowed_values.values().any(|v| v == value)
    }
}

/// The legal attributes of one AFF4 object type.
///
/// Lookups consult the schema's own attributes first and then each parent
/// in declaration order, depth-first. Every traversal tracks the schemas it
/// has visited, so an ancestor shared through the same `Arc` is seen once.
/// Distinct schemas are always visited, even when they carry the same object
/// type.
///
/// ```
/// use std::sync::Arc;
/// use aff4_lexicon::{iris, Attribute, Schema};
///
/// let mut stream = Schema::new(iris::AFF4_STREAM_TYPE);
/// stream.add_attribute(
///     "size",
///     Attribute::new(iris::AFF4_STREAM_SIZE, iris::XSD_INTEGER, "Stream length."),
/// );
///
/// let mut image = Schema::new(iris::AFF4_IMAGE_TYPE);
/// image.add_parent(Arc::new(stream));
/// image.add_attribute(
///     "chunk_size",
///     Attribute::new(iris::AFF4_IMAGE_CHUNK_SIZE, iris::XSD_INTEGER, "Chunk size."),
/// );
///
/// let all = image.all_attributes();
/// assert!(all.contains_key("size"));
/// assert!(all.contains_key("chunk_size"));
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    object_type: String,
    attributes: BTreeMap<String, Attribute>,
    parents: Vec<Arc<Schema>>,
}

impl Schema {
    /// Creates an empty schema for `object_type`.
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            attributes: BTreeMap::new(),
            parents: Vec::new(),
        }
    }

    /// Declares `attribute` under `alias`, discarding any attribute this
    /// schema previously declared under the same alias.
    pub fn add_attribute(&mut self, alias: impl Into<String>, attribute: Attribute) {
        self.attributes.insert(alias.into(), attribute);
    }

    /// Appends `parent` to the ordered parent list. Earlier parents take
    /// precedence over later ones.
    pub fn add_parent(&mut self, parent: Arc<Schema>) {
        self.parents.push(parent);
    }

    /// The object type this schema governs.
    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The schema's own attributes, excluding inherited ones.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, Attribute> {
        &self.attributes
    }

    /// Direct parents in declaration order.
    #[must_use]
    pub fn parents(&self) -> &[Arc<Schema>] {
        &self.parents
    }

    /// Looks up the effective attribute for `alias`.
    ///
    /// Own attributes shadow inherited ones; among parents, the first match in
    /// declaration order (depth-first) wins. Returns `None` if no schema in the
    /// chain declares `alias`.
    #[must_use]
    pub fn get_attribute(&self, alias: &str) -> Option<&Attribute> {
        let found = self.walk(&mut HashSet::new(), &mut |schema| {
            match schema.attributes.get(alias) {
                Some(attribute) => ControlFlow::Break(attribute),
                None => ControlFlow::Continue(()),
            }
        });
        match found {
            ControlFlow::Break(attribute) => Some(attribute),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Looks up the effective attribute whose identifier is `identifier`,
    /// using the same precedence as [`Schema::get_attribute`].
    #[must_use]
    pub fn attribute_by_identifier(&self, identifier: &str) -> Option<&Attribute> {
        let found = self.walk(&mut HashSet::new(), &mut |schema| {
            match schema
                .attributes
                .values()
                .find(|a| a.identifier == identifier)
            {
                Some(attribute) => ControlFlow::Break(attribute),
                None => ControlFlow::Continue(()),
            }
        });
        match found {
            ControlFlow::Break(attribute) => Some(attribute),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Returns every effective attribute keyed by alias.
    ///
    /// When several schemas in the chain declare the same alias, the one
    /// reached first wins: own attributes, then parents in declaration order.
    #[must_use]
    pub fn all_attributes(&self) -> BTreeMap<&str, &Attribute> {
        let mut merged = BTreeMap::new();
        let _ = self.walk(&mut HashSet::new(), &mut |schema| {
            for (alias, attribute) in &schema.attributes {
                merged.entry(alias.as_str()).or_insert(attribute);
            }
            ControlFlow::<()>::Continue(())
        });
        merged
    }

    /// Distinct ancestor object types in traversal order, excluding this
    /// schema's own type.
    #[must_use]
    pub fn ancestors(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let _ = self.walk(&mut HashSet::new(), &mut |schema| {
            let object_type = schema.object_type.as_str();
            if object_type != self.object_type && !seen.contains(&object_type) {
                seen.push(object_type);
            }
            ControlFlow::<()>::Continue(())
        });
        seen
    }

    /// Returns `true` if `object_type` is an ancestor of this schema.
    #[must_use]
    pub fn extends(&self, object_type: &str) -> bool {
        self.ancestors().contains(&object_type)
    }

    /// Depth-first pre-order walk over this schema and its ancestors, visiting
    /// each schema instance at most once.
    fn walk<'a, B, F>(
        &'a self,
        visited: &mut HashSet<*const Schema>,
        visit: &mut F,
    ) -> ControlFlow<B>
    where
        F: FnMut(&'a Schema) -> ControlFlow<B>,
    {
        if !visited.insert(std::ptr::from_ref(self)) {
            tracing::trace!(object_type = %self.object_type, "schema already visited");
            return ControlFlow::Continue(());
        }
        if let ControlFlow::Break(b) = visit(self) {
            return ControlFlow::Break(b);
        }
        for parent in &self.parents {
            if let ControlFlow::Break(b) = parent.walk(visited, visit) {
                return ControlFlow::Break(b);
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iris::*;

    fn attr(identifier: &str) -> Attribute {
        Attribute::new(identifier, XSD_INTEGER, "")
    }

    #[test]
    fn allowed_values_last_write_wins() {
        let mut a = Attribute::new(AFF4_STREAM_WRITE_MODE, XSD_STRING, "Open mode.");
        assert!(!a.is_enumerated());
        assert!(a.permits("anything"));

        a.allowed_value("read", "read");
        a.allowed_value("read", "r");
        assert_eq!(a.allowed_values().len(), 1);
        assert_eq!(a.canonical_value("read"), Some("r"));
        assert!(a.permits("r"));
        assert!(!a.permits("read"));
        assert_eq!(a.canonical_value("write"), None);
    }

    #[test]
    fn add_attribute_replaces_alias() {
        let mut s = Schema::new(AFF4_STREAM_TYPE);
        s.add_attribute("size", attr("first"));
        s.add_attribute("size", attr("second"));
        assert_eq!(s.attributes().len(), 1);
        assert_eq!(s.get_attribute("size").map(Attribute::identifier), Some("second"));
    }

    #[test]
    fn missing_alias_is_none() {
        let s = Schema::new(AFF4_STREAM_TYPE);
        assert!(s.get_attribute("nope").is_none());
        assert!(s.all_attributes().is_empty());
        assert!(s.ancestors().is_empty());
    }

    #[test]
    fn snapshot_of_own_type_is_still_searched() {
        let mut snapshot = Schema::new("t");
        snapshot.add_attribute("old", attr("old"));
        snapshot.add_attribute("new", attr("stale"));
        let mut s = Schema::new("t");
        s.add_attribute("new", attr("new"));
        s.add_parent(Arc::new(snapshot));

        assert_eq!(s.get_attribute("old").map(Attribute::identifier), Some("old"));
        assert_eq!(s.get_attribute("new").map(Attribute::identifier), Some("new"));
        assert_eq!(s.all_attributes().len(), 2);
        assert!(s.ancestors().is_empty());
    }

    #[test]
    fn distinct_parents_sharing_a_type_are_both_searched() {
        let mut first = Schema::new("x");
        first.add_attribute("a", attr("urn:a"));
        let mut second = Schema::new("x");
        second.add_attribute("b", attr("urn:b"));
        let mut s = Schema::new("s");
        s.add_parent(Arc::new(first));
        s.add_parent(Arc::new(second));

        assert_eq!(s.get_attribute("b").map(Attribute::identifier), Some("urn:b"));
        assert_eq!(s.all_attributes().into_keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(s.ancestors(), ["x"]);
    }

    #[test]
    fn shared_parent_is_visited_once() {
        let mut base = Schema::new("base");
        base.add_attribute("a", attr("urn:a"));
        let base = Arc::new(base);
        let mut s = Schema::new("s");
        s.add_parent(Arc::clone(&base));
        s.add_parent(base);

        let mut visits = 0;
        let _ = s.walk(&mut HashSet::new(), &mut |schema| {
            if schema.object_type() == "base" {
                visits += 1;
            }
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(visits, 1);
    }

    #[test]
    fn attribute_by_identifier_follows_precedence() {
        let mut parent = Schema::new("p");
        parent.add_attribute("x", Attribute::new("iri", XSD_STRING, "parent"));
        let mut child = Schema::new("c");
        child.add_attribute("y", Attribute::new("iri", XSD_STRING, "child"));
        child.add_parent(Arc::new(parent));

        assert_eq!(
            child.attribute_by_identifier("iri").map(Attribute::description),
            Some("child")
        );
        assert!(child.attribute_by_identifier("other").is_none());
    }
}
