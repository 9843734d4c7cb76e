//! MPIF serialization (record → text)
//!
//! Sections are written in a fixed order: data block header, audit metadata, author details,
//! product information, general synthesis information, synthesis procedure loops and the
//! characterization blocks. Output is deterministic for a given record.

use super::rows::{LoopRow, LoopSchema, HARDWARE, PROCEDURE, SOLVENT, SUBSTRATE, VESSEL};
use super::tags::*;
use crate::embedded::{encode_aif, encode_cif};
use crate::model::{
    AifBlock, Characterization, CifBlock, Embedded, Metadata, MpifRecord, ProductInfo, Pxrd,
    Reaction, SynthesisDetails, SynthesisGeneral, Tga,
};
use crate::values::format_number;

/// Serialize a record to MPIF text.
pub fn encode(record: &MpifRecord) -> String {
    let mut out = Lines::default();

    write_metadata(&mut out, &record.metadata);
    write_product(&mut out, &record.product_info);
    write_synthesis_general(&mut out, &record.synthesis_general);
    write_synthesis_details(&mut out, &record.synthesis_details);
    write_characterization(&mut out, &record.characterization);

    out.lines.join("\n")
}

#[derive(Default)]
struct Lines {
    lines: Vec<String>,
}

impl Lines {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn plain(&mut self, tag: &str, value: &str) {
        self.push(format!("{tag}\t{value}"));
    }

    fn quoted(&mut self, tag: &str, value: &str) {
        self.push(format!("{tag}\t'{value}'"));
    }

    /// Absent numbers are written as `?` so the line keeps its tab and cannot be mistaken
    /// for a shorter tag that prefixes a longer one.
    fn number(&mut self, tag: &str, value: Option<f64>) {
        let value = value.map(format_number).unwrap_or_else(|| "?".to_string());
        self.plain(tag, &value);
    }

    fn text_block(&mut self, tag: &str, text: &str) {
        self.push(tag);
        self.push(TEXT_DELIMITER);
        self.push(text);
        self.push(TEXT_DELIMITER);
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn write_metadata(out: &mut Lines, meta: &Metadata) {
    out.push(format!("{DATA_PREFIX}{}", or_default(&meta.data_name, "unknown")));
    out.plain(CREATION_DATE, &meta.creation_date);
    out.plain(GENERATOR_VERSION, &meta.generator_version);
    out.quoted(PUBLICATION_DOI, &meta.publication_doi);
    out.quoted(PROCEDURE_STATUS, or_default(&meta.procedure_status, "test"));
    out.blank();

    out.push("#Section 1: Author details");
    out.quoted(AUTHOR_NAME, &meta.name);
    out.plain(AUTHOR_EMAIL, &meta.email);
    out.plain(AUTHOR_ORCID, &meta.orcid);
    out.quoted(AUTHOR_ADDRESS, &meta.address);
    out.plain(AUTHOR_PHONE, or_default(&meta.phone, "?"));
    out.blank();
}

fn write_product(out: &mut Lines, product: &ProductInfo) {
    out.push("#Section 2: Product General Information");
    out.quoted(PRODUCT_TYPE, &product.product_type);
    out.plain(PRODUCT_CAS, product.cas_number.as_deref().unwrap_or("?"));
    out.quoted(PRODUCT_CCDC, product.ccdc_number.as_deref().unwrap_or_default());
    out.quoted(PRODUCT_NAME_COMMON, &product.common_name);
    out.quoted(
        PRODUCT_NAME_SYSTEMATIC,
        product.systematic_name.as_deref().unwrap_or_default(),
    );
    out.quoted(PRODUCT_FORMULA, product.formula.as_deref().unwrap_or_default());
    out.number(PRODUCT_FORMULA_WEIGHT, product.formula_weight);
    out.quoted(PRODUCT_STATE, &product.state);
    out.quoted(PRODUCT_COLOR, &product.color);
    out.quoted(PRODUCT_HANDLING_ATMOSPHERE, &product.handling_atmosphere);
    out.text_block(
        PRODUCT_HANDLING_NOTE,
        product.handling_note.as_deref().unwrap_or_default(),
    );

    if let Some(cif) = product.cif.as_ref().and_then(cif_text) {
        out.text_block(PRODUCT_CIF, &cif);
    }
    out.blank();
}

fn cif_text(cif: &Embedded<CifBlock>) -> Option<String> {
    match cif {
        Embedded::Raw(text) if text.is_empty() => None,
        Embedded::Raw(text) => Some(text.clone()),
        Embedded::Parsed(block) if block.is_empty() => None,
        Embedded::Parsed(block) => Some(encode_cif(block)),
    }
}

fn aif_text(aif: &Embedded<AifBlock>) -> Option<String> {
    match aif {
        Embedded::Raw(text) if text.is_empty() => None,
        Embedded::Raw(text) => Some(text.clone()),
        Embedded::Parsed(block) if block.is_empty() => None,
        Embedded::Parsed(block) => Some(encode_aif(block)),
    }
}

fn write_synthesis_general(out: &mut Lines, synthesis: &SynthesisGeneral) {
    out.push("#Section 3: Synthesis General Information");
    out.plain(PERFORMED_DATE, &synthesis.performed_date);
    out.number(LAB_TEMPERATURE, synthesis.lab_temperature);
    out.number(LAB_HUMIDITY, synthesis.lab_humidity);
    out.quoted(REACTION_TYPE, synthesis.reaction.type_name());
    write_reaction(out, &synthesis.reaction);

    out.number(REACTION_TEMPERATURE, synthesis.reaction_temperature);
    out.quoted(TEMPERATURE_CONTROLLER, &synthesis.temperature_controller);
    out.number(REACTION_TIME, synthesis.reaction_time);
    out.quoted(REACTION_TIME_UNIT, &synthesis.reaction_time_unit);
    out.quoted(REACTION_ATMOSPHERE, &synthesis.reaction_atmosphere);
    out.quoted(REACTION_CONTAINER, &synthesis.reaction_container);
    out.text_block(
        REACTION_NOTE,
        synthesis.reaction_note.as_deref().unwrap_or_default(),
    );
    out.number(PRODUCT_AMOUNT, synthesis.product_amount);
    out.quoted(PRODUCT_AMOUNT_UNIT, &synthesis.product_amount_unit);
    if let Some(yield_percent) = synthesis.product_yield {
        out.plain(PRODUCT_YIELD, &format_number(yield_percent));
    }
    out.quoted(SCALE, &synthesis.scale);
    out.text_block(
        SAFETY_NOTE,
        synthesis.safety_note.as_deref().unwrap_or_default(),
    );
    out.blank();
}

/// Lines specific to the reaction kind. Empty texts and absent numbers are left out.
fn write_reaction(out: &mut Lines, reaction: &Reaction) {
    let text = |value: &Option<String>| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
    };

    match reaction {
        Reaction::Evaporation { method } => {
            if let Some(method) = text(method) {
                out.quoted(EVAPORATION_METHOD, &method);
            }
        }
        Reaction::Microwave { power } => {
            if let Some(power) = power {
                out.plain(MICROWAVE_POWER, &format_number(*power));
            }
        }
        Reaction::Mechanochemical { method } => {
            if let Some(method) = text(method) {
                out.quoted(MECHANOCHEMICAL_METHOD, &method);
            }
        }
        Reaction::Electrochemical {
            cathode,
            anode,
            reference,
            voltage,
            current,
        } => {
            if let Some(cathode) = text(cathode) {
                out.plain(ELECTROCHEMICAL_CATHODE, &cathode);
            }
            if let Some(anode) = text(anode) {
                out.plain(ELECTROCHEMICAL_ANODE, &anode);
            }
            if let Some(reference) = text(reference) {
                out.plain(ELECTROCHEMICAL_REFERENCE, &reference);
            }
            if let Some(voltage) = voltage {
                out.plain(ELECTROCHEMICAL_VOLTAGE, &format_number(*voltage));
            }
            if let Some(current) = current {
                out.plain(ELECTROCHEMICAL_CURRENT, &format_number(*current));
            }
        }
        Reaction::Sonochemical {
            method,
            power,
            power_unit,
        } => {
            if let Some(method) = text(method) {
                out.quoted(SONICATION_METHOD, &method);
            }
            if let Some(power) = power {
                out.plain(SONICATION_POWER, &format_number(*power));
            }
            if let Some(unit) = text(power_unit) {
                out.quoted(SONICATION_POWER_UNIT, &unit);
            }
        }
        Reaction::Photochemical {
            wavelength,
            power,
            source,
        } => {
            if let Some(wavelength) = wavelength {
                out.plain(PHOTOCHEMICAL_WAVELENGTH, &format_number(*wavelength));
            }
            if let Some(power) = power {
                out.plain(PHOTOCHEMICAL_POWER, &format_number(*power));
            }
            if let Some(source) = text(source) {
                out.plain(PHOTOCHEMICAL_SOURCE, &source);
            }
        }
        Reaction::Other(_) => {}
    }
}

fn write_synthesis_details(out: &mut Lines, details: &SynthesisDetails) {
    out.push("#Section 4: Synthesis Procedure Details");
    write_loop(out, SUBSTRATE, &details.substrates);
    write_loop(out, SOLVENT, &details.solvents);
    write_loop(out, VESSEL, &details.vessels);
    write_loop(out, HARDWARE, &details.hardware);
    write_loop(out, PROCEDURE, &details.steps);

    if let Some(full) = details.procedure_full.as_deref().filter(|t| !t.is_empty()) {
        out.text_block(PROCEDURE_FULL, full);
        out.blank();
    }
}

fn write_loop<R: LoopRow>(out: &mut Lines, schema: LoopSchema, rows: &[R]) {
    if rows.is_empty() {
        return;
    }
    out.plain(&schema.count_tag(), &rows.len().to_string());
    out.push(LOOP);
    for column in schema.columns {
        out.push(schema.header(column));
    }
    for row in rows {
        out.push(row.to_cells().join("\t"));
    }
    out.blank();
}

fn write_characterization(out: &mut Lines, characterization: &Characterization) {
    let aif = characterization.aif.as_ref().and_then(aif_text);
    if characterization.pxrd.is_none() && characterization.tga.is_none() && aif.is_none() {
        return;
    }

    out.push("#Characterization Information");
    out.blank();

    if let Some(pxrd) = &characterization.pxrd {
        write_pxrd(out, pxrd);
    }
    if let Some(tga) = &characterization.tga {
        write_tga(out, tga);
    }
    if let Some(aif) = aif {
        out.text_block(AIF, &aif);
    }
}

fn write_pxrd(out: &mut Lines, pxrd: &Pxrd) {
    out.push(PXRD_DATA);
    out.push(TEXT_DELIMITER);
    out.quoted(PXRD_SOURCE, pxrd.source.as_deref().unwrap_or_default());
    if let Some(wavelength) = pxrd.wavelength {
        out.plain(PXRD_LAMBDA, &format_number(wavelength));
    }
    out.push(LOOP);
    out.push(PXRD_TWO_THETA);
    out.push(PXRD_INTENSITY);
    for point in &pxrd.data {
        out.push(format!(
            "{}\t{}",
            format_number(point.two_theta),
            format_number(point.intensity)
        ));
    }
    out.push(TEXT_DELIMITER);
    out.blank();
}

fn write_tga(out: &mut Lines, tga: &Tga) {
    out.push(TGA_DATA);
    out.push(TEXT_DELIMITER);
    out.push(LOOP);
    out.push(TGA_TEMPERATURE);
    out.push(TGA_WEIGHT);
    for point in &tga.data {
        out.push(format!(
            "{}\t{}",
            format_number(point.temperature),
            format_number(point.weight_percent)
        ));
    }
    out.push(TEXT_DELIMITER);
    out.blank();
}
