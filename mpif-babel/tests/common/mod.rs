//! Shared helpers for the integration tests.

use indexmap::IndexMap;
use mpif_babel::model::*;
use mpif_babel::RecordBuilder;
use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn properties(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A record with every section, all five row collections and all embedded blocks populated.
pub fn full_record() -> MpifRecord {
    RecordBuilder::new()
        .metadata(Metadata {
            data_name: "HKUST-1_run3".to_string(),
            creation_date: "2024-06-01".to_string(),
            generator_version: "2.0".to_string(),
            publication_doi: "10.1000/xyz123".to_string(),
            procedure_status: "success".to_string(),
            name: "A. Chemist".to_string(),
            email: "chemist@example.org".to_string(),
            orcid: "0000-0001-2345-6789".to_string(),
            address: "Main St 5, Town".to_string(),
            phone: "+1 555 0100".to_string(),
        })
        .product_info(ProductInfo {
            product_type: "MOF".to_string(),
            cas_number: text("51937-85-0"),
            ccdc_number: text("112954"),
            common_name: "HKUST-1".to_string(),
            systematic_name: text("copper benzene-1,3,5-tricarboxylate"),
            formula: text("C18H6Cu3O12"),
            formula_weight: Some(604.87),
            state: "solid".to_string(),
            color: "blue".to_string(),
            handling_atmosphere: "air".to_string(),
            handling_note: text("Keep dry.\nActivate at 150 C before use."),
            cif: None,
        })
        .synthesis_general(SynthesisGeneral {
            performed_date: "2024-05-30".to_string(),
            lab_temperature: Some(21.5),
            lab_humidity: Some(40.0),
            reaction: Reaction::Electrochemical {
                cathode: text("Pt"),
                anode: text("Cu"),
                reference: None,
                voltage: Some(2.5),
                current: Some(0.05),
            },
            reaction_temperature: Some(25.0),
            temperature_controller: "none".to_string(),
            reaction_time: Some(30.0),
            reaction_time_unit: "min".to_string(),
            reaction_atmosphere: "air".to_string(),
            reaction_container: "beaker".to_string(),
            reaction_note: text("Stirred at 300 rpm."),
            product_amount: Some(0.8),
            product_amount_unit: "g".to_string(),
            product_yield: Some(65.0),
            scale: "gram".to_string(),
            safety_note: text("Ethanol is flammable."),
        })
        .substrates([
            Substance {
                name: text("trimesic acid"),
                amount: Some(1.0),
                amount_unit: text("g"),
                supplier: text("Sigma"),
                purity: Some(95.0),
                cas_number: text("554-95-0"),
                smiles: text("OC(=O)c1cc(cc(c1)C(O)=O)C(O)=O"),
                ..Default::default()
            },
            Substance {
                name: text("tributylmethylammonium methyl sulfate"),
                molarity: Some(0.1),
                molarity_unit: text("M"),
                ..Default::default()
            },
        ])
        .solvent(Substance {
            name: text("ethanol"),
            amount: Some(50.0),
            amount_unit: text("mL"),
            ..Default::default()
        })
        .vessel(Vessel {
            volume: Some(100.0),
            volume_unit: text("mL"),
            material: text("glass"),
            vessel_type: text("beaker"),
            purpose: text("electrolysis cell"),
            ..Default::default()
        })
        .hardware(Hardware {
            purpose: text("power"),
            general_name: text("potentiostat"),
            product_name: text("PGSTAT128N"),
            supplier: text("Metrohm"),
            note: None,
            ..Default::default()
        })
        .steps([
            Step {
                step_type: text("preparation"),
                atmosphere: text("air"),
                detail: text("dissolve R1 and R2 in S1"),
                ..Default::default()
            },
            Step {
                step_type: text("reaction"),
                atmosphere: text("air"),
                detail: text("apply 2.5 V for 30 min"),
                ..Default::default()
            },
        ])
        .procedure_full("Trimesic acid was dissolved in ethanol.\nElectrolysis followed.")
        .pxrd(Pxrd {
            source: text("Cu"),
            wavelength: Some(1.5406),
            data: vec![
                PxrdPoint {
                    two_theta: 6.7,
                    intensity: 5200.0,
                },
                PxrdPoint {
                    two_theta: 9.5,
                    intensity: 8000.0,
                },
            ],
        })
        .tga(Tga {
            data: vec![
                TgaPoint {
                    temperature: 30.0,
                    weight_percent: 100.0,
                },
                TgaPoint {
                    temperature: 350.0,
                    weight_percent: 62.5,
                },
            ],
        })
        .aif(AifBlock {
            data_name: "HKUST1_N2".to_string(),
            properties: properties(&[("exptl_temperature", "77"), ("units_loading", "mmol/g")]),
            adsorption_data: vec![
                IsothermPoint {
                    pressure: 0.05,
                    loading: 12.1,
                    p0: Some(101.325),
                },
                IsothermPoint {
                    pressure: 0.3,
                    loading: 14.0,
                    p0: None,
                },
            ],
            desorption_data: vec![IsothermPoint {
                pressure: 0.3,
                loading: 14.2,
                p0: None,
            }],
        })
        .cif(CifBlock {
            data_name: "HKUST1".to_string(),
            properties: properties(&[
                ("_cell_length_a", "26.343"),
                ("_symmetry_space_group_name_H-M", "Fm-3m"),
            ]),
            loops: vec![CifLoop {
                headers: vec!["_atom_site_label".to_string(), "_atom_site_occupancy".to_string()],
                data: vec![
                    vec!["Cu1".to_string(), "1".to_string()],
                    vec!["O1".to_string(), "1".to_string()],
                ],
            }],
        })
        .build()
}
