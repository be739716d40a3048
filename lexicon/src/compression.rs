//! Compression method identifiers.
//!
//! Containers always record a compression choice as its interoperable
//! identifier. [`CompressionMethod`] is the compact form used while reading
//! and writing image chunks; it is never persisted itself.

use std::fmt;

use crate::error::LexiconError;
use crate::iris::{
    AFF4_IMAGE_COMPRESSION_SNAPPY, AFF4_IMAGE_COMPRESSION_STORED, AFF4_IMAGE_COMPRESSION_ZLIB,
};

/// Compression applied to the chunks of an image stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum CompressionMethod {
    /// Unrecognized or unspecified compression.
    Unknown = 0,
    /// No compression.
    Stored = 1,
    /// Zlib (RFC 1950). Images default to this method.
    #[default]
    Zlib = 2,
    /// Snappy.
    Snappy = 3,
}

impl CompressionMethod {
    /// The methods that have an interoperable identifier.
    pub const KNOWN: [CompressionMethod; 3] = [
        CompressionMethod::Stored,
        CompressionMethod::Zlib,
        CompressionMethod::Snappy,
    ];

    /// Decodes a compression identifier.
    ///
    /// Never fails: any identifier other than the three standard ones decodes
    /// to [`CompressionMethod::Unknown`].
    ///
    /// ```
    /// use aff4_lexicon::CompressionMethod;
    ///
    /// assert_eq!(
    ///     CompressionMethod::from_identifier("https://www.ietf.org/rfc/rfc1950.txt"),
    ///     CompressionMethod::Zlib
    /// );
    /// assert_eq!(
    ///     CompressionMethod::from_identifier("bogus://nothing"),
    ///     CompressionMethod::Unknown
    /// );
    /// ```
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            AFF4_IMAGE_COMPRESSION_STORED => CompressionMethod::Stored,
            AFF4_IMAGE_COMPRESSION_ZLIB => CompressionMethod::Zlib,
            AFF4_IMAGE_COMPRESSION_SNAPPY => CompressionMethod::Snappy,
            other => {
                tracing::debug!(identifier = other, "unrecognized compression identifier");
                CompressionMethod::Unknown
            }
        }
    }

    /// Encodes this method as its interoperable identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UnencodableCompression`] for
    /// [`CompressionMethod::Unknown`], which has no identifier.
    pub fn to_identifier(self) -> Result<&'static str, LexiconError> {
        match self {
            CompressionMethod::Stored => Ok(AFF4_IMAGE_COMPRESSION_STORED),
            CompressionMethod::Zlib => Ok(AFF4_IMAGE_COMPRESSION_ZLIB),
            CompressionMethod::Snappy => Ok(AFF4_IMAGE_COMPRESSION_SNAPPY),
            CompressionMethod::Unknown => Err(LexiconError::UnencodableCompression),
        }
    }

    /// Returns `true` for every method except [`CompressionMethod::Unknown`].
    #[must_use]
    pub fn is_known(self) -> bool {
        self != CompressionMethod::Unknown
    }

    /// Short lowercase name, also used as the enumeration alias in the image
    /// schema.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CompressionMethod::Unknown => "unknown",
            CompressionMethod::Stored => "stored",
            CompressionMethod::Zlib => "zlib",
            CompressionMethod::Snappy => "snappy",
        }
    }

    /// Looks a method up by its short name (see [`CompressionMethod::as_str`]).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .chain([CompressionMethod::Unknown])
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
