//! Errors raised by the lexicon.

use thiserror::Error;

/// Failures reported by schema registration, schema lookup and compression
/// encoding.
///
/// Decoding an unknown compression identifier and looking up an undeclared
/// attribute alias are not errors; they yield
/// [`CompressionMethod::Unknown`](crate::CompressionMethod::Unknown) and
/// `None` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// `CompressionMethod::Unknown` has no interoperable identifier.
    #[error("the unknown compression method has no identifier and cannot be encoded")]
    UnencodableCompression,

    /// No schema is registered for the object type.
    #[error("no schema registered for object type <{object_type}>")]
    UnknownObjectType {
        /// The object type that was looked up.
        object_type: String,
    },

    /// A schema for the object type was already registered.
    #[error("a schema for object type <{object_type}> is already registered")]
    DuplicateSchema {
        /// The object type that was registered twice.
        object_type: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_object_type() {
        let err = LexiconError::UnknownObjectType {
            object_type: "http://aff4.org/Schema#bogus".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no schema registered for object type <http://aff4.org/Schema#bogus>"
        );
    }
}
