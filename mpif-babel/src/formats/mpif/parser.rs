//! MPIF parsing (text → record)
//!
//!     The document is read as a list of trimmed lines indexed once by [`TagIndex`]. Each field
//!     is then looked up by tag prefix, free-text blocks are cut out between their `;` lines,
//!     and the five synthesis loops are read from their declared counts.
//!
//!     Parsing is permissive: missing sections yield defaults and malformed values are dropped.
//!     Every such substitution is recorded as a [`DecodeWarning`]. The only hard failure is a
//!     non-numeric formula weight.

use super::index::TagIndex;
use super::rows::{Cells, LoopRow, LoopSchema, HARDWARE, PROCEDURE, SOLVENT, SUBSTRATE, VESSEL};
use super::tags::*;
use super::{DecodeOptions, Decoded};
use crate::embedded::{decode_aif_with_warnings, decode_cif, ends_rows, scan, Item, LoopTable};
use crate::error::{DecodeWarning, FormatError};
use crate::model::{
    AifBlock, Characterization, CifBlock, Embedded, Metadata, MpifRecord, ProductInfo, Pxrd,
    PxrdPoint, Reaction, SynthesisDetails, SynthesisGeneral, Tga, TgaPoint,
};
use crate::values::{is_null_token, parse_number, unquote};

/// Parse MPIF text into a record plus the warnings collected on the way.
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<Decoded, FormatError> {
    let mut parser = Parser {
        index: TagIndex::new(text),
        parse_embedded: options.parse_embedded,
        warnings: Vec::new(),
    };

    let record = MpifRecord {
        metadata: parser.metadata(),
        product_info: parser.product_info()?,
        synthesis_general: parser.synthesis_general(),
        synthesis_details: parser.synthesis_details(),
        characterization: parser.characterization(),
    };

    Ok(Decoded {
        record,
        warnings: parser.warnings,
    })
}

fn report(warnings: &mut Vec<DecodeWarning>, warning: DecodeWarning) {
    log::warn!("{warning}");
    warnings.push(warning);
}

struct Parser<'a> {
    index: TagIndex<'a>,
    parse_embedded: bool,
    warnings: Vec<DecodeWarning>,
}

impl Parser<'_> {
    fn text(&self, tag: &str) -> String {
        self.index.find_value(tag).unwrap_or_default().to_string()
    }

    fn optional(&self, tag: &str) -> Option<String> {
        self.index
            .find_value(tag)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Like [`Parser::optional`], with the null markers read as absent too.
    fn optional_token(&self, tag: &str) -> Option<String> {
        self.index
            .find_value(tag)
            .filter(|value| !is_null_token(value))
            .map(str::to_string)
    }

    /// A value found under a longer tag (`_power` matching `_power_unit`) that is not a number
    /// belongs to that other field and is ignored without a warning.
    fn number(&mut self, tag: &str) -> Option<f64> {
        let (found, raw) = self.index.find_entry(tag)?;
        if found != tag && !is_null_token(raw) && parse_number(raw).is_none() {
            log::debug!("mpif: {tag} absent, skipping {found}");
            return None;
        }
        self.number_value(tag, raw)
    }

    fn number_value(&mut self, tag: &str, raw: &str) -> Option<f64> {
        if is_null_token(raw) {
            return None;
        }
        let parsed = parse_number(raw);
        if parsed.is_none() {
            report(
                &mut self.warnings,
                DecodeWarning::InvalidNumber {
                    tag: tag.to_string(),
                    value: raw.to_string(),
                },
            );
        }
        parsed
    }

    fn block(&self, tag: &str) -> Option<String> {
        self.index.text_block(tag).filter(|text| !text.is_empty())
    }

    fn metadata(&mut self) -> Metadata {
        log::debug!("mpif: reading metadata");
        let data_name = self
            .index
            .first_line(DATA_PREFIX)
            .and_then(|position| self.index.line(position))
            .and_then(|line| line.strip_prefix(DATA_PREFIX));
        if data_name.is_none() {
            report(&mut self.warnings, DecodeWarning::MissingDataHeader);
        }

        Metadata {
            data_name: data_name.unwrap_or_default().to_string(),
            creation_date: self.text(CREATION_DATE),
            generator_version: self.text(GENERATOR_VERSION),
            publication_doi: self.text(PUBLICATION_DOI),
            procedure_status: self.optional(PROCEDURE_STATUS).unwrap_or_else(|| "test".into()),
            name: self.text(AUTHOR_NAME),
            email: self.text(AUTHOR_EMAIL),
            orcid: self.text(AUTHOR_ORCID),
            address: self.text(AUTHOR_ADDRESS),
            phone: self.optional_token(AUTHOR_PHONE).unwrap_or_default(),
        }
    }

    fn product_info(&mut self) -> Result<ProductInfo, FormatError> {
        log::debug!("mpif: reading product information");
        let formula_weight = match self.index.find_value(PRODUCT_FORMULA_WEIGHT) {
            Some(raw) if !is_null_token(raw) => Some(parse_number(raw).ok_or_else(|| {
                FormatError::InvalidNumber {
                    tag: PRODUCT_FORMULA_WEIGHT.to_string(),
                    value: raw.to_string(),
                }
            })?),
            _ => None,
        };

        Ok(ProductInfo {
            product_type: self.text(PRODUCT_TYPE),
            cas_number: self.optional_token(PRODUCT_CAS),
            ccdc_number: self.optional(PRODUCT_CCDC),
            common_name: self.text(PRODUCT_NAME_COMMON),
            systematic_name: self.optional(PRODUCT_NAME_SYSTEMATIC),
            formula: self.optional(PRODUCT_FORMULA),
            formula_weight,
            state: self.text(PRODUCT_STATE),
            color: self.text(PRODUCT_COLOR),
            handling_atmosphere: self.text(PRODUCT_HANDLING_ATMOSPHERE),
            handling_note: self.block(PRODUCT_HANDLING_NOTE),
            cif: self.cif(),
        })
    }

    fn cif(&self) -> Option<Embedded<CifBlock>> {
        let text = self.block(PRODUCT_CIF)?;
        Some(if self.parse_embedded {
            Embedded::Parsed(decode_cif(&text))
        } else {
            Embedded::Raw(text)
        })
    }

    fn synthesis_general(&mut self) -> SynthesisGeneral {
        log::debug!("mpif: reading general synthesis information");
        SynthesisGeneral {
            performed_date: self.text(PERFORMED_DATE),
            lab_temperature: self.number(LAB_TEMPERATURE),
            lab_humidity: self.number(LAB_HUMIDITY),
            reaction: self.reaction(),
            reaction_temperature: self.number(REACTION_TEMPERATURE),
            temperature_controller: self.text(TEMPERATURE_CONTROLLER),
            reaction_time: self.number(REACTION_TIME),
            reaction_time_unit: self.text(REACTION_TIME_UNIT),
            reaction_atmosphere: self.text(REACTION_ATMOSPHERE),
            reaction_container: self.text(REACTION_CONTAINER),
            reaction_note: self.block(REACTION_NOTE),
            product_amount: self.number(PRODUCT_AMOUNT),
            product_amount_unit: self.text(PRODUCT_AMOUNT_UNIT),
            product_yield: self.number(PRODUCT_YIELD),
            scale: self.text(SCALE),
            safety_note: self.block(SAFETY_NOTE),
        }
    }

    /// Reaction-specific lines are read only for the kind named by `_mpif_synthesis_type`.
    fn reaction(&mut self) -> Reaction {
        match Reaction::bare(&self.text(REACTION_TYPE)) {
            Reaction::Evaporation { .. } => Reaction::Evaporation {
                method: self.optional(EVAPORATION_METHOD),
            },
            Reaction::Microwave { .. } => Reaction::Microwave {
                power: self.number(MICROWAVE_POWER),
            },
            Reaction::Mechanochemical { .. } => Reaction::Mechanochemical {
                method: self.optional(MECHANOCHEMICAL_METHOD),
            },
            Reaction::Electrochemical { .. } => Reaction::Electrochemical {
                cathode: self.optional(ELECTROCHEMICAL_CATHODE),
                anode: self.optional(ELECTROCHEMICAL_ANODE),
                reference: self.optional(ELECTROCHEMICAL_REFERENCE),
                voltage: self.number(ELECTROCHEMICAL_VOLTAGE),
                current: self.number(ELECTROCHEMICAL_CURRENT),
            },
            Reaction::Sonochemical { .. } => Reaction::Sonochemical {
                method: self.optional(SONICATION_METHOD),
                power: self.number(SONICATION_POWER),
                power_unit: self.optional(SONICATION_POWER_UNIT),
            },
            Reaction::Photochemical { .. } => Reaction::Photochemical {
                wavelength: self.number(PHOTOCHEMICAL_WAVELENGTH),
                power: self.number(PHOTOCHEMICAL_POWER),
                source: self.optional(PHOTOCHEMICAL_SOURCE),
            },
            other => other,
        }
    }

    fn synthesis_details(&mut self) -> SynthesisDetails {
        log::debug!("mpif: reading synthesis procedure loops");
        SynthesisDetails {
            substrates: self.read_loop(SUBSTRATE),
            solvents: self.read_loop(SOLVENT),
            vessels: self.read_loop(VESSEL),
            hardware: self.read_loop(HARDWARE),
            steps: self.read_loop(PROCEDURE),
            procedure_full: self.block(PROCEDURE_FULL),
        }
    }

    /// Read up to the declared number of rows following the loop's `id` header.
    ///
    /// Rows with fewer tab-separated cells than the schema has columns are skipped and do not
    /// count towards the declared number.
    fn read_loop<R: LoopRow>(&mut self, schema: LoopSchema) -> Vec<R> {
        let count_tag = schema.count_tag();
        let Some(raw_count) = self.index.find_value(&count_tag) else {
            return Vec::new();
        };
        let count = match raw_count.parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                report(
                    &mut self.warnings,
                    DecodeWarning::InvalidCount {
                        tag: count_tag,
                        value: raw_count.to_string(),
                    },
                );
                return Vec::new();
            }
        };
        if count == 0 {
            return Vec::new();
        }

        let id_header = schema.id_header();
        let Some(header_at) = self.index.first_line(&id_header) else {
            report(
                &mut self.warnings,
                DecodeWarning::MissingLoopHeader {
                    tag: count_tag,
                    header: id_header,
                },
            );
            return Vec::new();
        };

        let lines = self.index.lines();
        let data_start = (header_at..lines.len()).find(|&position| {
            let line = lines[position];
            !line.is_empty() && !line.starts_with("_mpif_") && !line.starts_with(LOOP)
        });

        let mut rows = Vec::with_capacity(count);
        if let Some(start) = data_start {
            for (position, line) in lines.iter().enumerate().skip(start) {
                if rows.len() >= count || ends_rows(line) {
                    break;
                }
                let values: Vec<&str> = line.split('\t').collect();
                if values.len() < schema.columns.len() {
                    report(
                        &mut self.warnings,
                        DecodeWarning::TruncatedRow {
                            kind: schema.kind.to_string(),
                            line: position + 1,
                            expected: schema.columns.len(),
                            found: values.len(),
                        },
                    );
                    continue;
                }
                let mut cells = Cells::new(schema, values, &mut self.warnings);
                rows.push(R::from_cells(&mut cells));
            }
        }

        if rows.len() < count {
            report(
                &mut self.warnings,
                DecodeWarning::ShortLoop {
                    kind: schema.kind.to_string(),
                    declared: count,
                    found: rows.len(),
                },
            );
        }
        rows
    }

    fn characterization(&mut self) -> Characterization {
        log::debug!("mpif: reading characterization");
        Characterization {
            pxrd: self.pxrd(),
            tga: self.tga(),
            aif: self.aif(),
        }
    }

    fn pxrd(&mut self) -> Option<Pxrd> {
        let text = self.index.text_block(PXRD_DATA)?;
        let mut pxrd = Pxrd::default();

        for item in scan(&text) {
            match item {
                Item::Tag { tag, value, .. } if tag == PXRD_SOURCE => {
                    pxrd.source = Some(unquote(value))
                        .filter(|source| !source.is_empty())
                        .map(str::to_string);
                }
                Item::Tag { tag, value, .. } if tag == PXRD_LAMBDA => {
                    pxrd.wavelength = self.number_value(tag, unquote(value));
                }
                Item::Loop(table) if table.has_header_containing("_pxrd_") => {
                    let points = self.read_pairs("pxrd", &table);
                    pxrd.data.extend(points.into_iter().map(|(two_theta, intensity)| {
                        PxrdPoint {
                            two_theta,
                            intensity,
                        }
                    }));
                }
                _ => {}
            }
        }

        (!pxrd.data.is_empty()).then_some(pxrd)
    }

    fn tga(&mut self) -> Option<Tga> {
        let text = self.index.text_block(TGA_DATA)?;
        let mut tga = Tga::default();

        for item in scan(&text) {
            if let Item::Loop(table) = item {
                if table.has_header_containing("_tga_") {
                    let points = self.read_pairs("tga", &table);
                    tga.data.extend(points.into_iter().map(|(temperature, weight_percent)| {
                        TgaPoint {
                            temperature,
                            weight_percent,
                        }
                    }));
                }
            }
        }

        (!tga.data.is_empty()).then_some(tga)
    }

    /// First two cells of every row as numbers; unreadable rows are reported and skipped.
    fn read_pairs(&mut self, block: &str, table: &LoopTable<'_>) -> Vec<(f64, f64)> {
        let mut pairs = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let pair = match row.as_slice() {
                [first, second, ..] => parse_number(first).zip(parse_number(second)),
                _ => None,
            };
            match pair {
                Some(pair) => pairs.push(pair),
                None => report(
                    &mut self.warnings,
                    DecodeWarning::UnreadableRow {
                        block: block.to_string(),
                        row: row.join(" "),
                    },
                ),
            }
        }
        pairs
    }

    fn aif(&mut self) -> Option<Embedded<AifBlock>> {
        let text = self.block(AIF)?;
        Some(if self.parse_embedded {
            Embedded::Parsed(decode_aif_with_warnings(&text, &mut self.warnings))
        } else {
            Embedded::Raw(text)
        })
    }
}
