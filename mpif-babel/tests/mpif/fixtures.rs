//! Decoding a complete hand-written document

use crate::common::fixture;
use mpif_babel::model::{Embedded, Reaction};
use mpif_babel::{decode, decode_with_options, encode, DecodeOptions};

#[test]
fn test_zif8_decodes_without_warnings() {
    let decoded = decode(&fixture("zif8.mpif")).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);

    let record = decoded.record;
    assert_eq!(record.metadata.data_name, "ZIF-8_batch12");
    assert_eq!(record.metadata.publication_doi, "10.1021/jacs.0c00001");
    assert_eq!(record.metadata.procedure_status, "success");
    assert_eq!(record.metadata.name, "Jane Doe");
    assert_eq!(record.metadata.phone, "");

    assert_eq!(record.product_info.cas_number.as_deref(), Some("59061-53-9"));
    assert_eq!(record.product_info.ccdc_number.as_deref(), Some("602542"));
    assert_eq!(record.product_info.formula_weight, Some(227.58));
    assert_eq!(
        record.product_info.handling_note.as_deref(),
        Some("Store in a desiccator.\nStable in air for months.")
    );
}

#[test]
fn test_zif8_synthesis_sections() {
    let record = decode(&fixture("zif8.mpif")).unwrap().record;

    let general = &record.synthesis_general;
    assert_eq!(general.lab_temperature, Some(22.0));
    assert_eq!(general.reaction, Reaction::Microwave { power: Some(300.0) });
    assert_eq!(general.reaction_time, Some(4.0));
    assert_eq!(general.reaction_time_unit, "h");
    assert_eq!(general.product_yield, Some(78.0));
    assert_eq!(general.safety_note.as_deref(), Some("Methanol is flammable."));

    let details = &record.synthesis_details;
    assert_eq!(details.substrates.len(), 2);
    assert_eq!(details.substrates[0].id, "R1");
    assert_eq!(details.substrates[0].molarity, None);
    assert_eq!(details.substrates[0].amount, Some(0.297));
    assert_eq!(details.substrates[0].smiles, None);
    assert_eq!(details.substrates[1].smiles.as_deref(), Some("Cc1ncc[nH]1"));
    assert_eq!(details.solvents[0].purity, Some(99.8));
    assert_eq!(details.vessels[0].supplier, None);
    assert_eq!(details.vessels[0].vessel_type.as_deref(), Some("microwave vial"));
    assert_eq!(details.hardware[0].product_name.as_deref(), Some("Initiator+"));
    assert_eq!(details.hardware[0].note, None);
    let steps: Vec<_> = details.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(steps, ["P1", "P2", "P3"]);
    assert_eq!(details.steps[1].detail.as_deref(), Some("add R2 and heat in V1"));
    assert!(details
        .procedure_full
        .as_deref()
        .is_some_and(|text| text.starts_with("Zinc nitrate")));
}

#[test]
fn test_zif8_embedded_and_characterization() {
    let record = decode(&fixture("zif8.mpif")).unwrap().record;

    let Some(Embedded::Parsed(cif)) = &record.product_info.cif else {
        panic!("expected a parsed cif block");
    };
    assert_eq!(cif.data_name, "ZIF8");
    assert_eq!(cif.properties.len(), 2);
    assert_eq!(cif.properties["_cell_length_a"], "16.99");
    assert_eq!(cif.loops.len(), 1);
    assert_eq!(cif.loops[0].data.len(), 2);

    let pxrd = record.characterization.pxrd.as_ref().unwrap();
    assert_eq!(pxrd.source.as_deref(), Some("Cu"));
    assert_eq!(pxrd.wavelength, Some(1.54056));
    assert_eq!(pxrd.data.len(), 3);
    assert_eq!(pxrd.data[1].two_theta, 10.4);
    assert_eq!(pxrd.data[1].intensity, 2500.0);

    let tga = record.characterization.tga.as_ref().unwrap();
    assert_eq!(tga.data.len(), 3);
    assert_eq!(tga.data[2].weight_percent, 35.2);

    let Some(Embedded::Parsed(aif)) = &record.characterization.aif else {
        panic!("expected a parsed aif block");
    };
    assert_eq!(aif.data_name, "ZIF8_N2");
    assert_eq!(aif.properties["exptl_temperature"], "77");
    assert_eq!(aif.properties["exptl_adsorptive"], "N2");
    assert_eq!(aif.adsorption_data.len(), 2);
    assert_eq!(aif.desorption_data.len(), 1);
    assert_eq!(aif.desorption_data[0].loading, 14.9);
}

#[test]
fn test_zif8_raw_mode_keeps_block_text() {
    let options = DecodeOptions {
        parse_embedded: false,
    };
    let record = decode_with_options(&fixture("zif8.mpif"), &options)
        .unwrap()
        .record;

    match &record.product_info.cif {
        Some(Embedded::Raw(text)) => assert!(text.starts_with("data_ZIF8\n_cell_length_a")),
        other => panic!("expected raw cif text, got {other:?}"),
    }
    match &record.characterization.aif {
        Some(Embedded::Raw(text)) => assert!(text.contains("_adsorp_pressure")),
        other => panic!("expected raw aif text, got {other:?}"),
    }
    // pxrd and tga are always structured
    assert!(record.characterization.pxrd.is_some());
}

#[test]
fn test_zif8_survives_re_encoding() {
    let record = decode(&fixture("zif8.mpif")).unwrap().record;
    let again = decode(&encode(&record)).unwrap();
    assert!(again.warnings.is_empty(), "{:?}", again.warnings);
    assert_eq!(again.record, record);
}
