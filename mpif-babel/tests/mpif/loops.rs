//! Degraded synthesis loops

use mpif_babel::model::{Hardware, Step, Substance, Vessel};
use mpif_babel::{decode, encode, DecodeWarning, RecordBuilder};

const STEP_HEADERS: &str = "loop_\n_mpif_procedure_id\n_mpif_procedure_type\n\
                            _mpif_procedure_atmosphere\n_mpif_procedure_detail\n";

#[test]
fn test_truncated_rows_are_skipped_and_reported() {
    let text = format!(
        "data_x\n_mpif_procedure_number\t3\n{STEP_HEADERS}P1\tmix\tair\tstir\nP2\theat\nP3\tcool\tair\t?\n"
    );
    let decoded = decode(&text).unwrap();

    let steps = &decoded.record.synthesis_details.steps;
    let ids: Vec<_> = steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["P1", "P3"]);
    assert_eq!(steps[1].detail, None);

    assert_eq!(
        decoded.warnings,
        vec![
            DecodeWarning::TruncatedRow {
                kind: "procedure".to_string(),
                line: 9,
                expected: 4,
                found: 2,
            },
            DecodeWarning::ShortLoop {
                kind: "procedure".to_string(),
                declared: 3,
                found: 2,
            },
        ]
    );
}

#[test]
fn test_rows_beyond_the_declared_count_are_ignored() {
    let text = format!(
        "data_x\n_mpif_procedure_number\t1\n{STEP_HEADERS}P1\tmix\tair\tstir\nP2\tdry\tair\t?\n"
    );
    let decoded = decode(&text).unwrap();
    assert_eq!(decoded.record.synthesis_details.steps.len(), 1);
    assert!(decoded.warnings.is_empty());
}

#[test]
fn test_null_markers_read_as_absent() {
    let text = "data_x\n_mpif_substrate_number\t1\nloop_\n_mpif_substrate_id\n_mpif_substrate_name\n\
                _mpif_substrate_molarity\n_mpif_substrate_molarity_unit\n_mpif_substrate_amount\n\
                _mpif_substrate_amount_unit\n_mpif_substrate_supplier\n_mpif_substrate_purity_percent\n\
                _mpif_substrate_cas\n_mpif_substrate_smiles\n\
                R1\t-\t?\t\t1\tg\t-\t?\t?\t?\n";
    let decoded = decode(text).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);

    let substrate = &decoded.record.synthesis_details.substrates[0];
    assert_eq!(substrate.id, "R1");
    assert_eq!(substrate.name, None);
    assert_eq!(substrate.molarity, None);
    assert_eq!(substrate.molarity_unit, None);
    assert_eq!(substrate.amount, Some(1.0));
    assert_eq!(substrate.amount_unit.as_deref(), Some("g"));
    assert_eq!(substrate.supplier, None);
    assert_eq!(substrate.purity, None);
    assert_eq!(substrate.smiles, None);
}

#[test]
fn test_non_numeric_cell_is_dropped_with_warning() {
    let text = "data_x\n_mpif_vessel_number\t1\nloop_\n_mpif_vessel_id\n_mpif_vessel_volume\n\
                _mpif_vessel_volume_unit\n_mpif_vessel_material\n_mpif_vessel_type\n\
                _mpif_vessel_supplier\n_mpif_vessel_purpose\n_mpif_vessel_note\n\
                V1\tlarge\tmL\tglass\tvial\t-\treaction\t-\n";
    let decoded = decode(text).unwrap();

    let vessel = &decoded.record.synthesis_details.vessels[0];
    assert_eq!(vessel.volume, None);
    assert_eq!(vessel.material.as_deref(), Some("glass"));
    assert_eq!(
        decoded.warnings,
        vec![DecodeWarning::InvalidNumber {
            tag: "_mpif_vessel_volume".to_string(),
            value: "large".to_string(),
        }]
    );
}

#[test]
fn test_invalid_count_yields_empty_loop() {
    let text = "data_x\n_mpif_vessel_number\tmany\nloop_\n_mpif_vessel_id\n";
    let decoded = decode(text).unwrap();
    assert!(decoded.record.synthesis_details.vessels.is_empty());
    assert_eq!(
        decoded.warnings,
        vec![DecodeWarning::InvalidCount {
            tag: "_mpif_vessel_number".to_string(),
            value: "many".to_string(),
        }]
    );
}

#[test]
fn test_count_without_loop_header() {
    let decoded = decode("data_x\n_mpif_hardware_number\t1\n").unwrap();
    assert!(decoded.record.synthesis_details.hardware.is_empty());
    assert!(matches!(
        decoded.warnings.as_slice(),
        [DecodeWarning::MissingLoopHeader { header, .. }] if header == "_mpif_hardware_id"
    ));
}

#[test]
fn test_loops_stop_at_the_next_section() {
    let text = format!(
        "data_x\n_mpif_procedure_number\t2\n{STEP_HEADERS}P1\tmix\tair\tstir\n\n\
         _mpif_procedure_full\n;\nMix.\n;\n"
    );
    let decoded = decode(&text).unwrap();
    assert_eq!(decoded.record.synthesis_details.steps.len(), 1);
    assert_eq!(
        decoded.record.synthesis_details.procedure_full.as_deref(),
        Some("Mix.")
    );
    assert!(matches!(
        decoded.warnings.as_slice(),
        [DecodeWarning::ShortLoop { declared: 2, found: 1, .. }]
    ));
}

#[test]
fn test_blank_strings_in_last_cells_keep_rows() {
    let blank = || Some(String::new());
    let record = RecordBuilder::new()
        .substrate(Substance {
            name: Some("zinc nitrate".to_string()),
            smiles: blank(),
            ..Default::default()
        })
        .vessel(Vessel {
            material: Some("glass".to_string()),
            note: blank(),
            ..Default::default()
        })
        .hardware(Hardware {
            general_name: Some("oven".to_string()),
            note: blank(),
            ..Default::default()
        })
        .step(Step {
            step_type: Some("mix".to_string()),
            detail: blank(),
            ..Default::default()
        })
        .build();

    let decoded = decode(&encode(&record)).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    let details = &decoded.record.synthesis_details;
    assert_eq!(details.substrates[0].smiles, None);
    assert_eq!(details.vessels[0].note, None);
    assert_eq!(details.vessels[0].material.as_deref(), Some("glass"));
    assert_eq!(details.hardware[0].note, None);
    assert_eq!(details.steps[0].detail, None);
    assert_eq!(details.steps[0].id, "P1");
}

#[test]
fn test_rows_without_ids_are_kept() {
    let mut record = mpif_babel::MpifRecord::default();
    record.synthesis_details.steps.push(Step {
        step_type: Some("mix".to_string()),
        ..Default::default()
    });

    let decoded = decode(&encode(&record)).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    assert_eq!(decoded.record.synthesis_details.steps.len(), 1);
    assert_eq!(decoded.record.synthesis_details.steps[0].id, "");
}
