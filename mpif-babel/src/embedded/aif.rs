//! Adsorption-isotherm block
//!
//!     The block carried in `_mpif_aif`. Property keys are stored without their leading
//!     underscore. Loops whose headers mention `_adsorp_` hold the adsorption branch, loops
//!     mentioning `_desorp_` the desorption branch; other loops are ignored.
//!
//!     Each row is `pressure loading [p0]`. A row that does not parse as numbers is dropped
//!     and reported as a [`DecodeWarning::UnreadableRow`].

use super::{scan, Item};
use crate::error::DecodeWarning;
use crate::model::{AifBlock, IsothermPoint};
use crate::values::{format_number, parse_number};

const ADSORPTION: &str = "_adsorp_";
const DESORPTION: &str = "_desorp_";

/// Parse adsorption block text, discarding warnings.
pub fn decode_aif(text: &str) -> AifBlock {
    decode_aif_with_warnings(text, &mut Vec::new())
}

/// Parse adsorption block text, recording unreadable rows.
pub fn decode_aif_with_warnings(text: &str, warnings: &mut Vec<DecodeWarning>) -> AifBlock {
    let mut block = AifBlock::default();

    for item in scan(text) {
        match item {
            Item::DataName(name) => block.data_name = name.to_string(),
            Item::Tag { tag, value, .. } => {
                if tag.starts_with(ADSORPTION) || tag.starts_with(DESORPTION) {
                    continue;
                }
                block
                    .properties
                    .insert(tag[1..].to_string(), value.to_string());
            }
            Item::Loop(table) => {
                let branch = if table.has_header_containing(ADSORPTION) {
                    &mut block.adsorption_data
                } else if table.has_header_containing(DESORPTION) {
                    &mut block.desorption_data
                } else {
                    log::debug!("aif: skipping loop with headers {:?}", table.headers);
                    continue;
                };

                for row in &table.rows {
                    match read_point(row) {
                        Some(point) => branch.push(point),
                        None => {
                            let warning = DecodeWarning::UnreadableRow {
                                block: "aif".to_string(),
                                row: row.join(" "),
                            };
                            log::warn!("{warning}");
                            warnings.push(warning);
                        }
                    }
                }
            }
        }
    }

    block
}

fn read_point(row: &[&str]) -> Option<IsothermPoint> {
    if row.len() < 2 {
        return None;
    }
    let pressure = parse_number(row[0])?;
    let loading = parse_number(row[1])?;
    let p0 = match row.get(2) {
        None | Some(&"?") | Some(&".") => None,
        Some(token) => Some(parse_number(token)?),
    };
    Some(IsothermPoint {
        pressure,
        loading,
        p0,
    })
}

/// Write a structured adsorption block back to text.
///
/// A `p0` column is added to a branch only when at least one of its points carries `p0`;
/// points without one are written as `?` in that column.
pub fn encode_aif(block: &AifBlock) -> String {
    let mut lines = Vec::new();

    if !block.data_name.is_empty() {
        lines.push(format!("data_{}", block.data_name));
        lines.push(String::new());
    }

    let width = block
        .properties
        .keys()
        .map(|key| key.len() + 1)
        .max()
        .unwrap_or(0);
    for (key, value) in &block.properties {
        lines.push(format!("{:<width$}    {value}", format!("_{key}")));
    }
    if !block.properties.is_empty() {
        lines.push(String::new());
    }

    push_branch(&mut lines, "adsorp", &block.adsorption_data);
    push_branch(&mut lines, "desorp", &block.desorption_data);

    lines.join("\n")
}

fn push_branch(lines: &mut Vec<String>, prefix: &str, points: &[IsothermPoint]) {
    if points.is_empty() {
        return;
    }
    let with_p0 = points.iter().any(|p| p.p0.is_some());

    lines.push("loop_".to_string());
    lines.push(format!("_{prefix}_pressure"));
    lines.push(format!("_{prefix}_loading"));
    if with_p0 {
        lines.push(format!("_{prefix}_p0"));
    }
    for point in points {
        let mut row = format!(
            "{}    {}",
            format_number(point.pressure),
            format_number(point.loading)
        );
        if with_p0 {
            let p0 = point.p0.map(format_number).unwrap_or_else(|| "?".to_string());
            row.push_str("    ");
            row.push_str(&p0);
        }
        lines.push(row);
    }
    lines.push(String::new());
}
