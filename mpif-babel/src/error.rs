//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A scalar that must be numeric holds a non-numeric token
    #[error("Invalid number '{value}' for {tag}")]
    InvalidNumber { tag: String, value: String },
    /// Input is neither MPIF content, a readable file, nor a record
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Reading or writing a file failed
    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}

/// Degraded-parse notices collected while decoding an MPIF document.
///
/// The decoder never fails on these; it substitutes a default and records what happened so
/// callers can decide whether the result is good enough.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeWarning {
    #[error("no data_ block header found")]
    MissingDataHeader,
    #[error("non-numeric value '{value}' for {tag} treated as absent")]
    InvalidNumber { tag: String, value: String },
    #[error("invalid row count '{value}' for {tag}")]
    InvalidCount { tag: String, value: String },
    #[error("{tag} declared but loop header {header} not found")]
    MissingLoopHeader { tag: String, header: String },
    #[error("line {line}: {kind} row has {found} of {expected} columns, dropped")]
    TruncatedRow {
        kind: String,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{kind} loop declares {declared} rows but {found} were read")]
    ShortLoop {
        kind: String,
        declared: usize,
        found: usize,
    },
    #[error("{block}: unreadable data row '{row}' skipped")]
    UnreadableRow { block: String, row: String },
}
