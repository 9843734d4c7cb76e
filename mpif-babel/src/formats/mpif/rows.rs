//! Loop tables of the synthesis details section
//!
//!     Each row collection is written as
//!
//!         _mpif_<kind>_number    <count>
//!         loop_
//!         _mpif_<kind>_<column>  (one line per column)
//!         cell<TAB>cell<TAB>...  (one line per row)
//!
//!     A [`LoopSchema`] names the table and its columns; [`LoopRow`] converts a row type to
//!     and from its cells.

use crate::error::DecodeWarning;
use crate::model::{Hardware, Step, Substance, Vessel};
use crate::values::{cell_text, format_number, is_null_token, parse_number};

/// Kind name and column order of a loop table.
#[derive(Debug, Clone, Copy)]
pub struct LoopSchema {
    pub kind: &'static str,
    pub columns: &'static [&'static str],
}

impl LoopSchema {
    pub fn count_tag(&self) -> String {
        format!("_mpif_{}_number", self.kind)
    }

    pub fn header(&self, column: &str) -> String {
        format!("_mpif_{}_{column}", self.kind)
    }

    pub fn id_header(&self) -> String {
        self.header("id")
    }
}

pub const SUBSTRATE: LoopSchema = LoopSchema {
    kind: "substrate",
    columns: &[
        "id",
        "name",
        "molarity",
        "molarity_unit",
        "amount",
        "amount_unit",
        "supplier",
        "purity_percent",
        "cas",
        "smiles",
    ],
};

pub const SOLVENT: LoopSchema = LoopSchema {
    kind: "solvent",
    columns: SUBSTRATE.columns,
};

pub const VESSEL: LoopSchema = LoopSchema {
    kind: "vessel",
    columns: &[
        "id",
        "volume",
        "volume_unit",
        "material",
        "type",
        "supplier",
        "purpose",
        "note",
    ],
};

pub const HARDWARE: LoopSchema = LoopSchema {
    kind: "hardware",
    columns: &[
        "id",
        "purpose",
        "general_name",
        "product_name",
        "supplier",
        "note",
    ],
};

pub const PROCEDURE: LoopSchema = LoopSchema {
    kind: "procedure",
    columns: &["id", "type", "atmosphere", "detail"],
};

/// Tab-split cells of one data row, with typed accessors.
pub struct Cells<'a, 'w> {
    schema: LoopSchema,
    values: Vec<&'a str>,
    warnings: &'w mut Vec<DecodeWarning>,
}

impl<'a, 'w> Cells<'a, 'w> {
    pub fn new(
        schema: LoopSchema,
        values: Vec<&'a str>,
        warnings: &'w mut Vec<DecodeWarning>,
    ) -> Self {
        Self {
            schema,
            values,
            warnings,
        }
    }

    fn raw(&self, column: usize) -> &'a str {
        self.values.get(column).map(|v| v.trim()).unwrap_or_default()
    }

    fn id(&self) -> String {
        self.text(0).unwrap_or_default()
    }

    fn text(&self, column: usize) -> Option<String> {
        cell_text(self.raw(column))
    }

    fn number(&mut self, column: usize) -> Option<f64> {
        let raw = self.raw(column);
        if is_null_token(raw) {
            return None;
        }
        let parsed = parse_number(raw);
        if parsed.is_none() {
            let warning = DecodeWarning::InvalidNumber {
                tag: self.schema.header(self.schema.columns[column]),
                value: raw.to_string(),
            };
            log::warn!("{warning}");
            self.warnings.push(warning);
        }
        parsed
    }
}

/// A row type stored in one of the synthesis loop tables.
///
/// The schema is supplied by the caller: substrates and solvents share [`Substance`] but are
/// written to different tables.
pub trait LoopRow: Sized {
    /// Cell texts in column order.
    fn to_cells(&self) -> Vec<String>;

    fn from_cells(cells: &mut Cells<'_, '_>) -> Self;
}

/// Blank text counts as absent: a blank cell at either end of a row would be trimmed away
/// with its tab on decode.
fn text_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn id_or_unknown(id: &str) -> String {
    text_or(&Some(id.to_string()), "?")
}

fn number_or_empty(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

impl LoopRow for Substance {
    fn to_cells(&self) -> Vec<String> {
        vec![
            id_or_unknown(&self.id),
            text_or(&self.name, ""),
            number_or_empty(self.molarity),
            text_or(&self.molarity_unit, ""),
            number_or_empty(self.amount),
            text_or(&self.amount_unit, ""),
            text_or(&self.supplier, ""),
            number_or_empty(self.purity),
            text_or(&self.cas_number, ""),
            text_or(&self.smiles, "?"),
        ]
    }

    fn from_cells(cells: &mut Cells<'_, '_>) -> Self {
        Substance {
            id: cells.id(),
            name: cells.text(1),
            molarity: cells.number(2),
            molarity_unit: cells.text(3),
            amount: cells.number(4),
            amount_unit: cells.text(5),
            supplier: cells.text(6),
            purity: cells.number(7),
            cas_number: cells.text(8),
            smiles: cells.text(9),
        }
    }
}

impl LoopRow for Vessel {
    fn to_cells(&self) -> Vec<String> {
        vec![
            id_or_unknown(&self.id),
            number_or_empty(self.volume),
            text_or(&self.volume_unit, ""),
            text_or(&self.material, ""),
            text_or(&self.vessel_type, ""),
            text_or(&self.supplier, "-"),
            text_or(&self.purpose, ""),
            text_or(&self.note, "-"),
        ]
    }

    fn from_cells(cells: &mut Cells<'_, '_>) -> Self {
        Vessel {
            id: cells.id(),
            volume: cells.number(1),
            volume_unit: cells.text(2),
            material: cells.text(3),
            vessel_type: cells.text(4),
            supplier: cells.text(5),
            purpose: cells.text(6),
            note: cells.text(7),
        }
    }
}

impl LoopRow for Hardware {
    fn to_cells(&self) -> Vec<String> {
        vec![
            id_or_unknown(&self.id),
            text_or(&self.purpose, ""),
            text_or(&self.general_name, ""),
            text_or(&self.product_name, ""),
            text_or(&self.supplier, "-"),
            text_or(&self.note, "-"),
        ]
    }

    fn from_cells(cells: &mut Cells<'_, '_>) -> Self {
        Hardware {
            id: cells.id(),
            purpose: cells.text(1),
            general_name: cells.text(2),
            product_name: cells.text(3),
            supplier: cells.text(4),
            note: cells.text(5),
        }
    }
}

impl LoopRow for Step {
    fn to_cells(&self) -> Vec<String> {
        vec![
            id_or_unknown(&self.id),
            text_or(&self.step_type, ""),
            text_or(&self.atmosphere, ""),
            text_or(&self.detail, "?"),
        ]
    }

    fn from_cells(cells: &mut Cells<'_, '_>) -> Self {
        Step {
            id: cells.id(),
            step_type: cells.text(1),
            atmosphere: cells.text(2),
            detail: cells.text(3),
        }
    }
}
