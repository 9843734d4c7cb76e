//! Characterization data from columnar sources
//!
//! Instruments export diffraction patterns, thermogravimetric curves and isotherms as
//! columns. These helpers zip such columns into the point shapes of the record, and read
//! named numeric columns out of delimited text (CSV or TSV with a header row).

use crate::error::FormatError;
use crate::model::{AifBlock, IsothermPoint, Pxrd, PxrdPoint, Tga, TgaPoint};
use crate::values::parse_number;
use std::io::Read;

fn check_lengths(what: &str, lengths: &[usize]) -> Result<usize, FormatError> {
    let first = lengths.first().copied().unwrap_or(0);
    if lengths.iter().any(|&len| len != first) {
        return Err(FormatError::InvalidInput(format!(
            "{what}: columns have different lengths {lengths:?}"
        )));
    }
    Ok(first)
}

impl Pxrd {
    /// Build a pattern from its 2θ and intensity columns.
    pub fn from_columns(two_theta: &[f64], intensity: &[f64]) -> Result<Self, FormatError> {
        check_lengths("pxrd", &[two_theta.len(), intensity.len()])?;
        Ok(Pxrd {
            source: None,
            wavelength: None,
            data: two_theta
                .iter()
                .zip(intensity)
                .map(|(&two_theta, &intensity)| PxrdPoint {
                    two_theta,
                    intensity,
                })
                .collect(),
        })
    }
}

impl Tga {
    pub fn from_columns(temperature: &[f64], weight_percent: &[f64]) -> Result<Self, FormatError> {
        check_lengths("tga", &[temperature.len(), weight_percent.len()])?;
        Ok(Tga {
            data: temperature
                .iter()
                .zip(weight_percent)
                .map(|(&temperature, &weight_percent)| TgaPoint {
                    temperature,
                    weight_percent,
                })
                .collect(),
        })
    }
}

impl AifBlock {
    /// Build an adsorption branch from pressure, loading and optional p0 columns.
    pub fn from_columns(
        pressure: &[f64],
        loading: &[f64],
        p0: Option<&[f64]>,
    ) -> Result<Self, FormatError> {
        let mut lengths = vec![pressure.len(), loading.len()];
        if let Some(p0) = p0 {
            lengths.push(p0.len());
        }
        check_lengths("aif", &lengths)?;

        let adsorption_data = (0..pressure.len())
            .map(|i| IsothermPoint {
                pressure: pressure[i],
                loading: loading[i],
                p0: p0.map(|p0| p0[i]),
            })
            .collect();
        Ok(AifBlock {
            adsorption_data,
            ..Default::default()
        })
    }
}

/// Read the named numeric columns of comma-separated text with a header row.
pub fn read_columns<R: Read>(reader: R, names: &[&str]) -> Result<Vec<Vec<f64>>, FormatError> {
    read_columns_with_delimiter(reader, b',', names)
}

/// Read the named numeric columns of delimited text with a header row.
///
/// Header names match case-insensitively after trimming. Cells that do not parse as numbers
/// are rejected with the offending row.
pub fn read_columns_with_delimiter<R: Read>(
    reader: R,
    delimiter: u8,
    names: &[&str],
) -> Result<Vec<Vec<f64>>, FormatError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| FormatError::ParseError(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let positions = names
        .iter()
        .map(|name| {
            let wanted = name.trim().to_lowercase();
            headers
                .iter()
                .position(|h| *h == wanted)
                .ok_or_else(|| FormatError::InvalidInput(format!("missing column '{name}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut columns = vec![Vec::new(); names.len()];
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| FormatError::ParseError(e.to_string()))?;
        for (column, &position) in positions.iter().enumerate() {
            let cell = record.get(position).unwrap_or_default();
            let value = parse_number(cell).ok_or_else(|| {
                FormatError::InvalidInput(format!(
                    "row {}: column '{}' holds non-numeric value '{cell}'",
                    row + 1,
                    names[column]
                ))
            })?;
            columns[column].push(value);
        }
    }

    log::debug!("tabular: read {} columns", columns.len());
    Ok(columns)
}
