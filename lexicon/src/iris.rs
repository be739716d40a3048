//! Identifier constants for the AFF4 vocabulary.
//!
//! Every identifier is a namespace prefix concatenated with a local name.
//! Identifiers compare by exact string equality; no normalization is applied.
//! These literals must stay bit-exact across AFF4 implementations.

/// Version of the AFF4 vocabulary these identifiers describe.
pub const AFF4_VERSION: &str = "0.1";

/// Largest single read a collaborator should request from a stream, in bytes.
pub const AFF4_MAX_READ_LEN: usize = 100 * 1024 * 1024;

// Namespaces
/// AFF4 object-schema namespace.
pub const AFF4: &str = "http://aff4.org/Schema#";
/// XML Schema datatype namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// Memory-image category namespace.
pub const AFF4_MEMORY: &str = "http://aff4.org/Schema#memory/";
/// Disk-image category namespace.
pub const AFF4_DISK: &str = "http://aff4.org/Schema#disk/";
/// Volatile namespace.
///
/// Attributes in this namespace describe in-memory state only and must never
/// be written to durable storage.
pub const AFF4_VOLATILE: &str = "http://aff4.org/VolatileSchema#";

// Value types
/// Reference to another AFF4 object by URN.
pub const URN_TYPE: &str = "URN";
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:hexBinary`, used for raw bytes.
pub const XSD_HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:int`.
pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
/// `xsd:long`.
pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

/// Every value type an attribute may declare.
pub const VALUE_TYPES: &[&str] = &[
    URN_TYPE,
    XSD_STRING,
    XSD_HEX_BINARY,
    XSD_INTEGER,
    XSD_INT,
    XSD_LONG,
    XSD_BOOLEAN,
];

// Object types
/// Base object type every AFF4 object extends.
pub const AFF4_OBJECT_TYPE: &str = "http://aff4.org/Schema#object";
/// Zip-based volume container.
pub const AFF4_ZIP_TYPE: &str = "http://aff4.org/Schema#zip_volume";
/// Base type of all byte streams.
pub const AFF4_STREAM_TYPE: &str = "http://aff4.org/Schema#stream";
/// A single member stream of a zip volume.
pub const AFF4_ZIP_SEGMENT_TYPE: &str = "http://aff4.org/Schema#zip_segment";
/// Chunked, optionally compressed image stream stored in bevies.
pub const AFF4_IMAGE_TYPE: &str = "http://aff4.org/Schema#image";
/// Stream mapping ranges of one stream onto another.
pub const AFF4_MAP_TYPE: &str = "http://aff4.org/Schema#map";

// Attributes
/// `rdf:type`.
pub const AFF4_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// Volume an object is stored in.
pub const AFF4_STORED: &str = "http://aff4.org/Schema#stored";
/// Objects a volume contains.
pub const AFF4_CONTAINS: &str = "http://aff4.org/Schema#contains";
/// Stream length in bytes.
pub const AFF4_STREAM_SIZE: &str = "http://aff4.org/Schema#size";
/// Open mode of a stream: `read`, `truncate` or `append`.
pub const AFF4_STREAM_WRITE_MODE: &str = "http://aff4.org/VolatileSchema#writable";
/// Uncompressed chunk size of an image.
pub const AFF4_IMAGE_CHUNK_SIZE: &str = "http://aff4.org/Schema#chunk_size";
/// Chunks stored per bevy segment.
pub const AFF4_IMAGE_CHUNKS_PER_SEGMENT: &str = "http://aff4.org/Schema#chunks_per_segment";
/// Compression applied to image chunks.
pub const AFF4_IMAGE_COMPRESSION: &str = "http://aff4.org/Schema#compression";
/// General category of an image.
pub const AFF4_CATEGORY: &str = "http://aff4.org/Schema#category";

// Compression identifiers
/// Zlib (RFC 1950).
pub const AFF4_IMAGE_COMPRESSION_ZLIB: &str = "https://www.ietf.org/rfc/rfc1950.txt";
/// Snappy.
pub const AFF4_IMAGE_COMPRESSION_SNAPPY: &str = "https://github.com/google/snappy";
/// Chunks stored without compression.
pub const AFF4_IMAGE_COMPRESSION_STORED: &str = "http://aff4.org/Schema#compression/stored";

// Categories
/// Physical memory image.
pub const AFF4_MEMORY_PHYSICAL: &str = "http://aff4.org/Schema#memory/physical";
/// Virtual memory image.
pub const AFF4_MEMORY_VIRTUAL: &str = "http://aff4.org/Schema#memory/virtual";
/// Pagefile image.
pub const AFF4_MEMORY_PAGEFILE: &str = "http://aff4.org/Schema#memory/pagefile";
/// Index of a pagefile image.
pub const AFF4_MEMORY_PAGEFILE_NUM: &str = "http://aff4.org/Schema#memory/pagefile_number";
/// Raw disk image.
pub const AFF4_DISK_RAW: &str = "http://aff4.org/Schema#disk/raw";
/// Single partition image.
pub const AFF4_DISK_PARTITION: &str = "http://aff4.org/Schema#disk/partition";

/// Returns `true` if `identifier` lies in the volatile namespace.
///
/// ```
/// use aff4_lexicon::iris;
///
/// assert!(iris::is_volatile(iris::AFF4_STREAM_WRITE_MODE));
/// assert!(!iris::is_volatile(iris::AFF4_STREAM_SIZE));
/// ```
#[must_use]
pub fn is_volatile(identifier: &str) -> bool {
    identifier.starts_with(AFF4_VOLATILE)
}

/// Returns `true` if `value_type` is one of [`VALUE_TYPES`].
#[must_use]
pub fn is_value_type(value_type: &str) -> bool {
    VALUE_TYPES.contains(&value_type)
}
