//! Error types for reading and writing rule documents

use landmark_core::{UnknownNameError, Version};
use landmark_rules::RuleError;
use thiserror::Error;

/// Failure to encode or decode a document.
///
/// Decoding stops at the first error; partial documents are never returned.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A rule or rule set in the document is malformed.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Written by a newer release than this one reads.
    #[error("Document version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: Version, supported: Version },

    #[error("<{element}> is missing attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// No `Orient` element binds the REFERENCE mark.
    #[error("No landmark is bound to REFERENCE")]
    MissingReference,

    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),

    #[error("XML parse error: {0}")]
    Parse(String),

    #[error("XML write error: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
