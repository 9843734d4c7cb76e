//! Building a record from parts and sending it through the text form

use mpif_babel::model::{Pxrd, Substance, Vessel};
use mpif_babel::{decode, encode, RecordBuilder};

fn named(name: &str) -> Substance {
    Substance {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_built_record_keeps_ids_and_data() {
    let pxrd = Pxrd::from_columns(&[5.0, 10.0], &[1000.0, 5000.0]).unwrap();
    let record = RecordBuilder::new()
        .data_name("scenario")
        .substrates([named("zinc acetate"), named("terephthalic acid")])
        .vessel(Vessel {
            volume: Some(20.0),
            volume_unit: Some("mL".to_string()),
            ..Default::default()
        })
        .pxrd(pxrd.clone())
        .build();

    let text = encode(&record);
    assert!(text.contains("_mpif_substrate_number\t2"));
    assert!(text.contains("_mpif_vessel_number\t1"));

    let decoded = decode(&text).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    let details = &decoded.record.synthesis_details;
    let ids: Vec<_> = details.substrates.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["R1", "R2"]);
    assert_eq!(details.substrates[1].name.as_deref(), Some("terephthalic acid"));
    assert_eq!(details.vessels[0].id, "V1");
    assert_eq!(details.vessels[0].volume, Some(20.0));

    let decoded_pxrd = decoded.record.characterization.pxrd.unwrap();
    assert_eq!(decoded_pxrd.data, pxrd.data);
    assert!(decoded.record.characterization.tga.is_none());
    assert!(decoded.record.characterization.aif.is_none());
}

#[test]
fn test_columnar_data_reaches_the_document() {
    let csv = "2theta,intensity\n5,1000\n10,5000\n";
    let columns =
        mpif_babel::tabular::read_columns(csv.as_bytes(), &["2theta", "intensity"]).unwrap();
    let pxrd = Pxrd::from_columns(&columns[0], &columns[1]).unwrap();

    let text = encode(&RecordBuilder::new().pxrd(pxrd).build());
    assert!(text.contains("_pxrd_intensity\n5\t1000\n10\t5000\n;"));
}
