//! Error types for 3MF analysis
//!
//! All errors carry an error code for categorization. Only a handful of them
//! ever reach the caller of [`crate::analyze_bytes`] and friends: the rest are
//! produced by individual extractors and absorbed by the aggregator, which
//! degrades the affected section of the result instead of failing.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: XML parsing and structure errors
//! - **E3xxx**: Value and document decoding errors
//! - **E5xxx**: Caller misuse
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E1002`: Not a ZIP archive (fatal)
//! - `E1003`: Missing entry in archive
//! - `E1004`: Entry exceeds the configured size limit
//! - `E1005`: ZIP error reading an individual entry
//! - `E2001`: XML parsing error
//! - `E2002`: XML attribute error
//! - `E2003`: Invalid XML structure
//! - `E3002`: Numeric parse error
//! - `E3003`: JSON decoding error
//! - `E3004`: Unrecognized vendor metadata document
//! - `E5001`: Invalid analysis source (fatal)
//! - `E5002`: Upload rejected before analysis (fatal)

use std::io;
use thiserror::Error;

/// Result type for analyzer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analyzing a 3MF container
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Truncated or corrupted entry data
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The supplied bytes or file are not a readable ZIP container
    ///
    /// **Error Code**: E1002
    ///
    /// This is the only archive-level failure that aborts an analysis.
    ///
    /// **Suggestions**:
    /// - Verify the file is a valid 3MF (ZIP) archive
    /// - Try re-downloading or re-exporting the file
    #[error("[E1002] Not a 3MF archive: {0}")]
    NotAnArchive(String),

    /// ZIP error while reading an individual entry
    ///
    /// **Error Code**: E1005
    ///
    /// **Common Causes**:
    /// - Unsupported compression method
    /// - Corrupted entry headers
    #[error("[E1005] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Entry not present in the archive
    ///
    /// **Error Code**: E1003
    #[error("[E1003] Missing entry: {0}")]
    MissingFile(String),

    /// Entry larger than the configured limit
    ///
    /// **Error Code**: E1004
    ///
    /// **Suggestions**:
    /// - Raise [`crate::AnalyzerConfig::with_max_entry_size`] if the file is trusted
    #[error("[E1004] Entry '{name}' is {size} bytes, limit is {limit} bytes")]
    EntryTooLarge {
        /// Entry name within the archive
        name: String,
        /// Uncompressed size reported by the archive
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// XML parsing error
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax
    /// - Invalid character encoding
    /// - Unclosed tags
    #[error("[E2001] XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error
    ///
    /// **Error Code**: E2002
    #[error("[E2002] XML attribute error: {0}")]
    XmlAttr(String),

    /// Invalid XML structure
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Missing required attributes on `<vertex>`
    /// - DTD declarations in untrusted documents
    /// - Non UTF-8 element or attribute names
    #[error("[E2003] Invalid XML structure: {0}")]
    InvalidXml(String),

    /// Parse error for numeric values
    ///
    /// **Error Code**: E3002
    ///
    /// **Suggestions**:
    /// - Verify numeric values use proper format (e.g., "1.5" not "1,5")
    #[error("[E3002] Parse error: {0}")]
    ParseError(String),

    /// JSON decoding error
    ///
    /// **Error Code**: E3003
    #[error("[E3003] JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON document that matches neither vendor metadata generation
    ///
    /// **Error Code**: E3004
    #[error("[E3004] Unrecognized vendor metadata: {0}")]
    UnrecognizedMetadata(String),

    /// Neither or both of path and buffer were supplied
    ///
    /// **Error Code**: E5001
    #[error("[E5001] Invalid analysis source: {0}")]
    InvalidSource(String),

    /// Upload refused before analysis
    ///
    /// **Error Code**: E5002
    #[error("[E5002] Unsupported upload: {0}")]
    UnsupportedUpload(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(format!("Attribute parsing failed: {}", err))
    }
}

impl Error {
    /// Create an InvalidXml error with element context
    ///
    /// # Example
    /// ```ignore
    /// Error::invalid_xml_element("vertex", "Missing required 'x' attribute")
    /// ```
    pub fn invalid_xml_element(element: &str, message: &str) -> Self {
        Error::InvalidXml(format!("Element '<{}>': {}", element, message))
    }

    /// Create a ParseError with context about what was being parsed
    ///
    /// # Arguments
    /// * `field_name` - The name of the field being parsed (e.g., "vertex x coordinate")
    /// * `value` - The value that failed to parse
    /// * `expected_type` - The expected type (e.g., "floating-point number")
    pub fn parse_error_with_context(field_name: &str, value: &str, expected_type: &str) -> Self {
        Error::ParseError(format!(
            "Failed to parse '{}': expected {}, got '{}'",
            field_name, expected_type, value
        ))
    }
}
