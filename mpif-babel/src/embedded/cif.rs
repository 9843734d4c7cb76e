//! Crystallographic-properties block
//!
//!     The block carried in `_mpif_product_cif`. Properties keep their leading underscore as
//!     part of the key (`_cell_length_a`), loop headers are kept verbatim and loop rows are
//!     whitespace-split tokens. Values containing whitespace therefore do not survive a round
//!     trip as single tokens; the block is stored exactly as the grammar reads it.

use super::{scan, Item};
use crate::model::{CifBlock, CifLoop};

/// Parse crystallographic block text into its structured form.
///
/// Tag lines containing a tab are not treated as properties. Comment lines and blank lines
/// are ignored outside loops. A key with no value on its line or the next is kept with an
/// empty value, so it is written back as a bare key.
pub fn decode_cif(text: &str) -> CifBlock {
    let mut block = CifBlock::default();

    for item in scan(text) {
        match item {
            Item::DataName(name) => block.data_name = name.to_string(),
            Item::Tag { tag, value, raw } => {
                if !raw.contains('\t') {
                    block.properties.insert(tag.to_string(), value.to_string());
                }
            }
            Item::Loop(table) => block.loops.push(CifLoop {
                headers: table.headers.iter().map(|h| h.to_string()).collect(),
                data: table
                    .rows
                    .iter()
                    .filter(|row| !row.is_empty())
                    .map(|row| row.iter().map(|v| v.to_string()).collect())
                    .collect(),
            }),
        }
    }

    block
}

/// Write a structured crystallographic block back to text.
pub fn encode_cif(block: &CifBlock) -> String {
    let mut lines = Vec::new();

    if !block.data_name.is_empty() {
        lines.push(format!("data_{}", block.data_name));
    }

    for (key, value) in &block.properties {
        lines.push(format!("{key}   {value}"));
    }

    for lp in &block.loops {
        lines.push("loop_".to_string());
        for header in &lp.headers {
            lines.push(format!(" {header}"));
        }
        for row in &lp.data {
            lines.push(format!("  {}", row.join("  ")));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
