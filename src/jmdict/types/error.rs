//! Custom error types for the jmdict-reader crate.

use thiserror::Error;

/// The primary error type for all decode operations in this crate.
///
/// Every variant is terminal: a decode that returns one of these has produced
/// no dictionary at all.
#[derive(Debug, Error)]
pub enum JmdictError {
    /// An error originating from I/O operations on the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tokenizer rejected the input as XML (mismatched tags, bad syntax).
    #[error("XML syntax error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// The document is well-formed XML but does not follow the JMdict structure.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// An entity reference that is neither predefined nor in the entity registry.
    #[error("Unresolvable entity reference '&{name};' near byte {position}")]
    UnresolvableEntity { name: String, position: u64 },

    /// An entry lacks an element it must contain at least once.
    #[error("Entry {entry}: expected at least one <{element}>")]
    MissingElement { entry: u64, element: &'static str },

    /// A classification token outside its closed vocabulary.
    #[error("Entry {entry}: unknown {field} code '{token}'")]
    UnknownCode {
        entry: u64,
        field: &'static str,
        token: String,
    },

    /// A priority token that does not match `<code><rank>`.
    #[error("Entry {entry}: malformed priority token '{raw}' in <{field}>")]
    MalformedPriority {
        entry: u64,
        field: &'static str,
        raw: String,
    },
}

/// Returned by [`Priority::from_str`](crate::Priority) for tokens outside the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed priority token '{raw}'")]
pub struct PriorityError {
    pub raw: String,
}

/// Returned by the vocabulary `FromStr` impls for tokens outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} code '{token}'")]
pub struct UnknownCodeError {
    pub field: &'static str,
    pub token: String,
}

/// A convenience `Result` type alias using the crate's `JmdictError` type.
pub type Result<T> = std::result::Result<T, JmdictError>;
