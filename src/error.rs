//! Error types for MPD decoding and encoding.

use thiserror::Error;

/// Errors raised while decoding an MPD document.
///
/// Decoding stops at the first error; no partial document is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying XML is malformed (bad markup, invalid escapes, ...).
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// A required element is missing from the document.
    #[error("Missing required element <{element}>")]
    MissingElement { element: &'static str },

    /// A required attribute is missing from an element.
    #[error("Missing required attribute {attribute:?} on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute value does not match its expected lexical form.
    ///
    /// Also covers `ConditionalUint` attributes whose text matches neither
    /// the unsigned-integer nor the boolean alternative.
    #[error("Invalid value {value:?} for attribute {attribute:?} on <{element}>")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

/// Errors raised while encoding an MPD document.
///
/// Only produced when the underlying byte sink fails, which cannot happen
/// for in-memory encoding; treated as fatal by callers.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to write XML output: {0}")]
    Write(String),
}
