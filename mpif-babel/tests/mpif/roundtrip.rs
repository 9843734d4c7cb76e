//! Record → MPIF → record

use crate::common::full_record;
use mpif_babel::model::{Embedded, MpifRecord, Reaction};
use mpif_babel::{decode, decode_with_options, encode, DecodeOptions, RecordBuilder};

#[test]
fn test_full_record_round_trips() {
    let record = full_record();
    let decoded = decode(&encode(&record)).expect("encoded record should decode");

    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    assert_eq!(decoded.record, record);
}

#[test]
fn test_encoding_is_deterministic() {
    let record = full_record();
    assert_eq!(encode(&record), encode(&record));
}

#[test]
fn test_re_encoding_decoded_text_is_stable() {
    let first = encode(&full_record());
    let second = encode(&decode(&first).unwrap().record);
    assert_eq!(first, second);
}

#[test]
fn test_multi_line_free_text_survives() {
    let note = "Line one of the note.\nLine two, with detail.\nLine three.";
    let mut record = MpifRecord::default();
    record.product_info.handling_note = Some(note.to_string());
    record.synthesis_general.safety_note = Some("Wear gloves.\nUse a fume hood.".to_string());

    let decoded = decode(&encode(&record)).unwrap().record;
    assert_eq!(decoded.product_info.handling_note.as_deref(), Some(note));
    assert_eq!(
        decoded.synthesis_general.safety_note.as_deref(),
        Some("Wear gloves.\nUse a fume hood.")
    );
}

#[test]
fn test_raw_embedded_blocks_pass_through() {
    let cif = "data_raw\n_cell_length_b   7.5";
    let record = RecordBuilder::new()
        .cif_text(cif)
        .aif_text("data_iso\n_exptl_temperature 77")
        .build();

    let text = encode(&record);
    assert!(text.contains("_mpif_product_cif\n;\ndata_raw\n_cell_length_b   7.5\n;"));

    let options = DecodeOptions {
        parse_embedded: false,
    };
    let decoded = decode_with_options(&text, &options).unwrap().record;
    assert_eq!(decoded.product_info.cif, Some(Embedded::Raw(cif.to_string())));

    let parsed = decode(&text).unwrap().record;
    match parsed.characterization.aif {
        Some(Embedded::Parsed(block)) => {
            assert_eq!(block.data_name, "iso");
            assert_eq!(block.properties["exptl_temperature"], "77");
        }
        other => panic!("expected a parsed isotherm block, got {other:?}"),
    }
}

#[test]
fn test_default_metadata_values() {
    let decoded = decode(&encode(&MpifRecord::default())).unwrap();
    let metadata = &decoded.record.metadata;
    assert_eq!(metadata.data_name, "unknown");
    assert_eq!(metadata.procedure_status, "test");
    assert_eq!(metadata.phone, "");
    assert_eq!(decoded.record.product_info.cas_number, None);
    assert_eq!(decoded.record.product_info.formula_weight, None);
    assert_eq!(decoded.record.product_info.handling_note, None);
    assert_eq!(decoded.record.synthesis_general.reaction, Reaction::Other(String::new()));
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
}
