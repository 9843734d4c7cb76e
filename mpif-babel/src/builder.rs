//! Record construction with automatic row identifiers
//!
//!     [`RecordBuilder`] assembles a record section by section and numbers the synthesis rows
//!     on [`RecordBuilder::build`]: every row whose `id` is empty receives its category letter
//!     and 1-based position (`R` substrates, `S` solvents, `V` vessels, `H` hardware,
//!     `P` procedure steps). Explicit ids are left alone.

use crate::model::{
    AifBlock, Characterization, CifBlock, Embedded, Hardware, Metadata, MpifRecord, ProductInfo,
    Pxrd, Step, Substance, SynthesisDetails, SynthesisGeneral, Tga, Vessel,
};

#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: MpifRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, e.g. one just decoded, to update some of its fields.
    pub fn from_record(record: MpifRecord) -> Self {
        Self { record }
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.record.metadata = metadata;
        self
    }

    pub fn product_info(mut self, product_info: ProductInfo) -> Self {
        self.record.product_info = product_info;
        self
    }

    pub fn synthesis_general(mut self, synthesis_general: SynthesisGeneral) -> Self {
        self.record.synthesis_general = synthesis_general;
        self
    }

    pub fn synthesis_details(mut self, synthesis_details: SynthesisDetails) -> Self {
        self.record.synthesis_details = synthesis_details;
        self
    }

    pub fn characterization(mut self, characterization: Characterization) -> Self {
        self.record.characterization = characterization;
        self
    }

    pub fn data_name(mut self, data_name: impl Into<String>) -> Self {
        self.record.metadata.data_name = data_name.into();
        self
    }

    pub fn substrate(mut self, substrate: Substance) -> Self {
        self.record.synthesis_details.substrates.push(substrate);
        self
    }

    pub fn substrates(mut self, substrates: impl IntoIterator<Item = Substance>) -> Self {
        self.record.synthesis_details.substrates.extend(substrates);
        self
    }

    pub fn solvent(mut self, solvent: Substance) -> Self {
        self.record.synthesis_details.solvents.push(solvent);
        self
    }

    pub fn solvents(mut self, solvents: impl IntoIterator<Item = Substance>) -> Self {
        self.record.synthesis_details.solvents.extend(solvents);
        self
    }

    pub fn vessel(mut self, vessel: Vessel) -> Self {
        self.record.synthesis_details.vessels.push(vessel);
        self
    }

    pub fn vessels(mut self, vessels: impl IntoIterator<Item = Vessel>) -> Self {
        self.record.synthesis_details.vessels.extend(vessels);
        self
    }

    pub fn hardware(mut self, hardware: Hardware) -> Self {
        self.record.synthesis_details.hardware.push(hardware);
        self
    }

    pub fn hardware_items(mut self, hardware: impl IntoIterator<Item = Hardware>) -> Self {
        self.record.synthesis_details.hardware.extend(hardware);
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.record.synthesis_details.steps.push(step);
        self
    }

    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.record.synthesis_details.steps.extend(steps);
        self
    }

    pub fn procedure_full(mut self, text: impl Into<String>) -> Self {
        self.record.synthesis_details.procedure_full = Some(text.into());
        self
    }

    pub fn pxrd(mut self, pxrd: Pxrd) -> Self {
        self.record.characterization.pxrd = Some(pxrd);
        self
    }

    pub fn tga(mut self, tga: Tga) -> Self {
        self.record.characterization.tga = Some(tga);
        self
    }

    pub fn aif(mut self, aif: AifBlock) -> Self {
        self.record.characterization.aif = Some(Embedded::Parsed(aif));
        self
    }

    pub fn aif_text(mut self, text: impl Into<String>) -> Self {
        self.record.characterization.aif = Some(Embedded::Raw(text.into()));
        self
    }

    pub fn cif(mut self, cif: CifBlock) -> Self {
        self.record.product_info.cif = Some(Embedded::Parsed(cif));
        self
    }

    pub fn cif_text(mut self, text: impl Into<String>) -> Self {
        self.record.product_info.cif = Some(Embedded::Raw(text.into()));
        self
    }

    /// Finish the record, numbering rows that have no id.
    pub fn build(mut self) -> MpifRecord {
        let details = &mut self.record.synthesis_details;
        assign_ids('R', details.substrates.iter_mut().map(|row| &mut row.id));
        assign_ids('S', details.solvents.iter_mut().map(|row| &mut row.id));
        assign_ids('V', details.vessels.iter_mut().map(|row| &mut row.id));
        assign_ids('H', details.hardware.iter_mut().map(|row| &mut row.id));
        assign_ids('P', details.steps.iter_mut().map(|row| &mut row.id));
        self.record
    }
}

fn assign_ids<'a>(prefix: char, ids: impl Iterator<Item = &'a mut String>) {
    for (position, id) in ids.enumerate() {
        if id.trim().is_empty() {
            *id = format!("{prefix}{}", position + 1);
        }
    }
}
