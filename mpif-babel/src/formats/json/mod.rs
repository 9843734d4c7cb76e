//! JSON format implementation
//!
//! The JSON form of a synthesis record uses the camelCase keys of the data model, so records
//! produced by other MPIF tools load directly. Output is pretty-printed unless the
//! `compact` option is set. Parsed rows without an `id` are numbered the way
//! [`RecordBuilder`] numbers them.

use crate::builder::RecordBuilder;
use crate::error::FormatError;
use crate::format::{option_flag, Format};
use crate::model::MpifRecord;
use std::collections::HashMap;

/// JSON record format (`json`).
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json(&self, record: &MpifRecord, pretty: bool) -> Result<String, FormatError> {
        let result = if pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

/// Read a JSON record and number its unnamed synthesis rows.
pub fn parse_record(source: &str) -> Result<MpifRecord, serde_json::Error> {
    let record = serde_json::from_str(source)?;
    Ok(RecordBuilder::from_record(record).build())
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Synthesis record as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<MpifRecord, FormatError> {
        parse_record(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, record: &MpifRecord) -> Result<String, FormatError> {
        self.to_json(record, self.pretty)
    }

    fn serialize_with_options(
        &self,
        record: &MpifRecord,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let compact = option_flag(options, "compact", !self.pretty)?;
        self.to_json(record, !compact)
    }
}
