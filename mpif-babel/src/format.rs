//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing synthesis records.

use crate::error::FormatError;
use crate::model::MpifRecord;
use std::collections::HashMap;

/// Trait for record formats
///
/// Implementors provide bidirectional conversion between a string representation and
/// [`MpifRecord`]. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<MpifRecord, FormatError> {
///         // Parse source to a record
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "mpif", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → record)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (record → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a record
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<MpifRecord, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a record into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _record: &MpifRecord) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Parse with extra parameters.
    ///
    /// The default implementation accepts no parameters and delegates to [`Format::parse`].
    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<MpifRecord, FormatError> {
        if options.is_empty() {
            self.parse(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }

    /// Serialize with extra parameters.
    ///
    /// The default implementation accepts no parameters and delegates to [`Format::serialize`].
    fn serialize_with_options(
        &self,
        record: &MpifRecord,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(record)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Read a boolean parameter. A key given without a value counts as `true`.
pub fn option_flag(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    let Some(value) = options.get(key) else {
        return Ok(default);
    };
    if value.is_empty() {
        return Ok(true);
    }
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::InvalidInput(format!(
            "Invalid boolean value '{other}' for --extra-{key}"
        ))),
    }
}
