//! Property-based tests for the compression identifier mapping.

use aff4_lexicon::{iris, CompressionMethod, LexiconError};
use proptest::prelude::*;

const KNOWN_IDENTIFIERS: [&str; 3] = [
    iris::AFF4_IMAGE_COMPRESSION_STORED,
    iris::AFF4_IMAGE_COMPRESSION_ZLIB,
    iris::AFF4_IMAGE_COMPRESSION_SNAPPY,
];

proptest! {
    /// Decoding never fails: anything but a standard identifier is Unknown.
    #[test]
    fn prop_unrecognized_decodes_to_unknown(s in ".*") {
        prop_assume!(!KNOWN_IDENTIFIERS.contains(&s.as_str()));
        prop_assert_eq!(CompressionMethod::from_identifier(&s), CompressionMethod::Unknown);
    }

    /// Near misses of a standard identifier are not accepted.
    #[test]
    fn prop_suffixed_identifier_is_unknown(idx in 0usize..3, suffix in ".+") {
        let id = format!("{}{}", KNOWN_IDENTIFIERS[idx], suffix);
        prop_assert_eq!(CompressionMethod::from_identifier(&id), CompressionMethod::Unknown);
    }

    /// Encoding a decoded standard identifier gives back the same string.
    #[test]
    fn prop_known_identifier_round_trip(idx in 0usize..3) {
        let id = KNOWN_IDENTIFIERS[idx];
        prop_assert_eq!(CompressionMethod::from_identifier(id).to_identifier(), Ok(id));
    }
}

#[test]
fn every_decoded_value_is_encodable_or_unknown() {
    for id in KNOWN_IDENTIFIERS.into_iter().chain(["", "zlib", "bogus://nothing"]) {
        let method = CompressionMethod::from_identifier(id);
        match method.to_identifier() {
            Ok(encoded) => assert_eq!(encoded, id),
            Err(err) => {
                assert_eq!(method, CompressionMethod::Unknown);
                assert_eq!(err, LexiconError::UnencodableCompression);
            }
        }
    }
}
