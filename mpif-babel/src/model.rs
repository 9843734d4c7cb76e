//! Structured synthesis record
//!
//!     The record mirrors the five sections of an MPIF document. Field names serialize to the
//!     camelCase keys used by the JSON form of the format, so records written by other MPIF
//!     tools deserialize without a mapping layer.
//!
//!     Strings that always appear in an encoded document (with an empty or fixed default) are
//!     plain `String`s. Values that may be genuinely absent are `Option`s. Numbers are `f64`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A complete synthesis record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MpifRecord {
    pub metadata: Metadata,
    pub product_info: ProductInfo,
    pub synthesis_general: SynthesisGeneral,
    pub synthesis_details: SynthesisDetails,
    pub characterization: Characterization,
}

/// Audit and author information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub data_name: String,
    pub creation_date: String,
    pub generator_version: String,
    #[serde(rename = "publicationDOI")]
    pub publication_doi: String,
    pub procedure_status: String,
    pub name: String,
    pub email: String,
    pub orcid: String,
    pub address: String,
    pub phone: String,
}

/// General information about the synthesized product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInfo {
    #[serde(rename = "type")]
    pub product_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cas_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccdc_number: Option<String>,
    pub common_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systematic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula_weight: Option<f64>,
    pub state: String,
    pub color: String,
    pub handling_atmosphere: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cif: Option<Embedded<CifBlock>>,
}

/// An embedded sub-document, kept either verbatim or parsed into its structured form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Embedded<T> {
    Raw(String),
    Parsed(T),
}

/// Crystallographic-properties block (`productInfo.cif`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CifBlock {
    pub data_name: String,
    pub properties: IndexMap<String, String>,
    pub loops: Vec<CifLoop>,
}

impl CifBlock {
    pub fn is_empty(&self) -> bool {
        self.data_name.is_empty() && self.properties.is_empty() && self.loops.is_empty()
    }
}

/// A loop table inside a crystallographic block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CifLoop {
    pub headers: Vec<String>,
    pub data: Vec<Vec<String>>,
}

/// Adsorption-isotherm block (`characterization.aif`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AifBlock {
    pub data_name: String,
    pub properties: IndexMap<String, String>,
    pub adsorption_data: Vec<IsothermPoint>,
    pub desorption_data: Vec<IsothermPoint>,
}

impl AifBlock {
    pub fn is_empty(&self) -> bool {
        self.data_name.is_empty()
            && self.properties.is_empty()
            && self.adsorption_data.is_empty()
            && self.desorption_data.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsothermPoint {
    pub pressure: f64,
    pub loading: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p0: Option<f64>,
}

/// Conditions shared by every synthesis plus the reaction-specific parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SynthesisGeneral {
    pub performed_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_humidity: Option<f64>,
    #[serde(flatten)]
    pub reaction: Reaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_temperature: Option<f64>,
    pub temperature_controller: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_time: Option<f64>,
    pub reaction_time_unit: String,
    pub reaction_atmosphere: String,
    pub reaction_container: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_amount: Option<f64>,
    pub product_amount_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_yield: Option<f64>,
    pub scale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_note: Option<String>,
}

/// The reaction kind together with the parameters that only apply to that kind.
///
/// `Other` keeps the raw `reactionType` text (for example `mix`) and carries no extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReactionFields", into = "ReactionFields")]
pub enum Reaction {
    Evaporation {
        method: Option<String>,
    },
    Microwave {
        power: Option<f64>,
    },
    Mechanochemical {
        method: Option<String>,
    },
    Electrochemical {
        cathode: Option<String>,
        anode: Option<String>,
        reference: Option<String>,
        voltage: Option<f64>,
        current: Option<f64>,
    },
    Sonochemical {
        method: Option<String>,
        power: Option<f64>,
        power_unit: Option<String>,
    },
    Photochemical {
        wavelength: Option<f64>,
        power: Option<f64>,
        source: Option<String>,
    },
    Other(String),
}

impl Default for Reaction {
    fn default() -> Self {
        Reaction::Other(String::new())
    }
}

impl Reaction {
    /// The `reactionType` discriminant as written in documents.
    pub fn type_name(&self) -> &str {
        match self {
            Reaction::Evaporation { .. } => "evaporation",
            Reaction::Microwave { .. } => "microwave",
            Reaction::Mechanochemical { .. } => "mechanochemical",
            Reaction::Electrochemical { .. } => "electrochemical",
            Reaction::Sonochemical { .. } => "sonochemical",
            Reaction::Photochemical { .. } => "photochemical",
            Reaction::Other(name) => name,
        }
    }

    /// A reaction of the named kind with none of its specific parameters set.
    pub fn bare(type_name: &str) -> Self {
        match type_name {
            "evaporation" => Reaction::Evaporation { method: None },
            "microwave" => Reaction::Microwave { power: None },
            "mechanochemical" => Reaction::Mechanochemical { method: None },
            "electrochemical" => Reaction::Electrochemical {
                cathode: None,
                anode: None,
                reference: None,
                voltage: None,
                current: None,
            },
            "sonochemical" => Reaction::Sonochemical {
                method: None,
                power: None,
                power_unit: None,
            },
            "photochemical" => Reaction::Photochemical {
                wavelength: None,
                power: None,
                source: None,
            },
            other => Reaction::Other(other.to_string()),
        }
    }
}

/// Flat JSON shape of the reaction fields inside `synthesisGeneral`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ReactionFields {
    reaction_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaporation_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    microwave_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mechanochemical_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    electrochemical_cathode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    electrochemical_anode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    electrochemical_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    electrochemical_voltage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    electrochemical_current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sonication_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sonication_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sonication_power_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photochemical_wavelength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photochemical_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photochemical_source: Option<String>,
}

impl From<ReactionFields> for Reaction {
    fn from(fields: ReactionFields) -> Self {
        match Reaction::bare(&fields.reaction_type) {
            Reaction::Evaporation { .. } => Reaction::Evaporation {
                method: fields.evaporation_method,
            },
            Reaction::Microwave { .. } => Reaction::Microwave {
                power: fields.microwave_power,
            },
            Reaction::Mechanochemical { .. } => Reaction::Mechanochemical {
                method: fields.mechanochemical_method,
            },
            Reaction::Electrochemical { .. } => Reaction::Electrochemical {
                cathode: fields.electrochemical_cathode,
                anode: fields.electrochemical_anode,
                reference: fields.electrochemical_reference,
                voltage: fields.electrochemical_voltage,
                current: fields.electrochemical_current,
            },
            Reaction::Sonochemical { .. } => Reaction::Sonochemical {
                method: fields.sonication_method,
                power: fields.sonication_power,
                power_unit: fields.sonication_power_unit,
            },
            Reaction::Photochemical { .. } => Reaction::Photochemical {
                wavelength: fields.photochemical_wavelength,
                power: fields.photochemical_power,
                source: fields.photochemical_source,
            },
            other => other,
        }
    }
}

impl From<Reaction> for ReactionFields {
    fn from(reaction: Reaction) -> Self {
        let mut fields = ReactionFields {
            reaction_type: reaction.type_name().to_string(),
            ..Default::default()
        };
        match reaction {
            Reaction::Evaporation { method } => fields.evaporation_method = method,
            Reaction::Microwave { power } => fields.microwave_power = power,
            Reaction::Mechanochemical { method } => fields.mechanochemical_method = method,
            Reaction::Electrochemical {
                cathode,
                anode,
                reference,
                voltage,
                current,
            } => {
                fields.electrochemical_cathode = cathode;
                fields.electrochemical_anode = anode;
                fields.electrochemical_reference = reference;
                fields.electrochemical_voltage = voltage;
                fields.electrochemical_current = current;
            }
            Reaction::Sonochemical {
                method,
                power,
                power_unit,
            } => {
                fields.sonication_method = method;
                fields.sonication_power = power;
                fields.sonication_power_unit = power_unit;
            }
            Reaction::Photochemical {
                wavelength,
                power,
                source,
            } => {
                fields.photochemical_wavelength = wavelength;
                fields.photochemical_power = power;
                fields.photochemical_source = source;
            }
            Reaction::Other(_) => {}
        }
        fields
    }
}

/// The five row collections of the synthesis procedure plus its full text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SynthesisDetails {
    pub substrates: Vec<Substance>,
    pub solvents: Vec<Substance>,
    pub vessels: Vec<Vessel>,
    pub hardware: Vec<Hardware>,
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_full: Option<String>,
}

/// A substrate (`R<n>`) or solvent (`S<n>`) row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Substance {
    pub id: String,
    pub name: Option<String>,
    pub molarity: Option<f64>,
    pub molarity_unit: Option<String>,
    pub amount: Option<f64>,
    pub amount_unit: Option<String>,
    pub supplier: Option<String>,
    pub purity: Option<f64>,
    pub cas_number: Option<String>,
    pub smiles: Option<String>,
}

/// A reaction vessel row (`V<n>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vessel {
    pub id: String,
    pub volume: Option<f64>,
    pub volume_unit: Option<String>,
    pub material: Option<String>,
    #[serde(rename = "type")]
    pub vessel_type: Option<String>,
    pub supplier: Option<String>,
    pub purpose: Option<String>,
    pub note: Option<String>,
}

/// A hardware row (`H<n>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hardware {
    pub id: String,
    pub purpose: Option<String>,
    pub general_name: Option<String>,
    pub product_name: Option<String>,
    pub supplier: Option<String>,
    pub note: Option<String>,
}

/// A procedure step row (`P<n>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step {
    pub id: String,
    #[serde(rename = "type")]
    pub step_type: Option<String>,
    pub atmosphere: Option<String>,
    pub detail: Option<String>,
}

/// Characterization datasets attached to the product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Characterization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pxrd: Option<Pxrd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tga: Option<Tga>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aif: Option<Embedded<AifBlock>>,
}

impl Characterization {
    pub fn is_empty(&self) -> bool {
        self.pxrd.is_none() && self.tga.is_none() && self.aif.is_none()
    }
}

/// Powder X-ray diffraction pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pxrd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wavelength: Option<f64>,
    pub data: Vec<PxrdPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PxrdPoint {
    pub two_theta: f64,
    pub intensity: f64,
}

/// Thermogravimetric analysis curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tga {
    pub data: Vec<TgaPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TgaPoint {
    pub temperature: f64,
    pub weight_percent: f64,
}
