//! Loading records from files, MPIF text or existing records
//!
//!     [`load`] accepts a single string and works out what it is: a path to an existing file
//!     (`.json` files are read as JSON records, anything else as MPIF), or MPIF content
//!     itself (recognized by `data_` or `_mpif_`). Anything else is rejected with
//!     [`FormatError::InvalidInput`] naming the input. JSON records get row ids assigned
//!     like [`crate::RecordBuilder`] output. Callers holding a path should use
//!     [`load_record`] with [`Input::Path`], which never falls back to content sniffing.

use crate::error::FormatError;
use crate::formats::json::parse_record;
use crate::formats::mpif::{decode_with_options, DecodeOptions, Decoded};
use crate::model::MpifRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// The inputs a record can be loaded from.
#[derive(Debug, Clone)]
pub enum Input {
    /// MPIF document content
    Text(String),
    /// Path to an `.mpif` or `.json` file
    Path(PathBuf),
    /// An already constructed record, passed through
    Record(MpifRecord),
}

/// Resolve a string to a decoded record; see the module docs for the rules.
pub fn load(input: &str, options: &DecodeOptions) -> Result<Decoded, FormatError> {
    let path = Path::new(input);
    if path.is_file() {
        return load_path(path, options);
    }
    if looks_like_mpif(input) {
        return decode_with_options(input, options);
    }
    Err(FormatError::InvalidInput(input.to_string()))
}

/// Load a record from a typed input.
pub fn load_record(input: Input, options: &DecodeOptions) -> Result<Decoded, FormatError> {
    match input {
        Input::Text(text) => {
            if looks_like_mpif(&text) {
                decode_with_options(&text, options)
            } else {
                Err(FormatError::InvalidInput(text))
            }
        }
        Input::Path(path) => load_path(&path, options),
        Input::Record(record) => Ok(Decoded {
            record,
            warnings: Vec::new(),
        }),
    }
}

fn looks_like_mpif(text: &str) -> bool {
    text.contains("data_") || text.contains("_mpif_")
}

fn load_path(path: &Path, options: &DecodeOptions) -> Result<Decoded, FormatError> {
    log::info!("loading {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| FormatError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let record = parse_record(&content)
            .map_err(|e| FormatError::ParseError(format!("{}: {e}", path.display())))?;
        Ok(Decoded {
            record,
            warnings: Vec::new(),
        })
    } else {
        decode_with_options(&content, options)
    }
}
