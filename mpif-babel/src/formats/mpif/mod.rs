//! MPIF format implementation
//!
//!     MPIF is a line-oriented tagged-text serialization of a synthesis record, modeled on
//!     crystallographic file conventions:
//!
//!         data_<name>                         document header
//!         _mpif_<tag>\t<value>                scalar, strings wrapped in single quotes
//!         _mpif_<tag>                         free-text block: tag line, lone `;`,
//!         ;                                   the text, closing lone `;`
//!         text
//!         ;
//!         _mpif_<kind>_number\t<n>            loop: declared row count, `loop_`,
//!         loop_                               one header per column,
//!         _mpif_<kind>_<column>               one tab-separated line per row
//!         cell\tcell\t...
//!
//!     The product's crystallographic block and the adsorption-isotherm block are embedded as
//!     free-text blocks and handled by [`crate::embedded`].
//!
//!     Free text must not contain a line holding only `;`: the block would end there.

use crate::error::{DecodeWarning, FormatError};
use crate::format::{option_flag, Format};
use crate::model::MpifRecord;
use std::collections::HashMap;

mod index;
pub mod parser;
mod rows;
pub mod serializer;
pub mod tags;

pub use index::TagIndex;
pub use parser::decode_with_options;
pub use serializer::encode;

/// Options for [`decode_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Return embedded blocks structured (`true`) or as raw text (`false`).
    pub parse_embedded: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            parse_embedded: true,
        }
    }
}

/// A decoded record together with every degraded-parse notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub record: MpifRecord,
    pub warnings: Vec<DecodeWarning>,
}

/// Parse MPIF text with embedded blocks structured.
pub fn decode(text: &str) -> Result<Decoded, FormatError> {
    decode_with_options(text, &DecodeOptions::default())
}

/// The MPIF tagged-text format.
///
/// Parsing option: `parse-embedded` (default `true`).
#[derive(Debug, Default, Clone, Copy)]
pub struct MpifFormat;

impl Format for MpifFormat {
    fn name(&self) -> &str {
        "mpif"
    }

    fn description(&self) -> &str {
        "MPIF tagged-text synthesis record"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mpif"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<MpifRecord, FormatError> {
        decode(source).map(|decoded| decoded.record)
    }

    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<MpifRecord, FormatError> {
        let options = DecodeOptions {
            parse_embedded: option_flag(options, "parse-embedded", true)?,
        };
        decode_with_options(source, &options).map(|decoded| decoded.record)
    }

    fn serialize(&self, record: &MpifRecord) -> Result<String, FormatError> {
        Ok(encode(record))
    }
}
