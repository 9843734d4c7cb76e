//! Embedded block codecs: text → block → text

use indexmap::IndexMap;
use mpif_babel::embedded::{decode_aif, decode_cif, encode_aif, encode_cif};
use mpif_babel::model::{AifBlock, CifBlock, CifLoop, IsothermPoint};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;

fn cif_loop() -> impl Strategy<Value = CifLoop> {
    (1usize..4).prop_flat_map(|width| {
        (
            vec("_[a-z]{1,6}", width),
            vec(vec("[A-Za-z0-9.]{1,6}", width), 1..5),
        )
            .prop_map(|(headers, data)| CifLoop { headers, data })
    })
}

fn cif_block() -> impl Strategy<Value = CifBlock> {
    (
        "[A-Za-z0-9]{1,8}",
        btree_map("_[a-z_]{1,10}", "[A-Za-z0-9.+-]{1,8}", 0..5),
        vec(cif_loop(), 0..3),
    )
        .prop_map(|(data_name, properties, loops)| CifBlock {
            data_name,
            properties: properties.into_iter().collect::<IndexMap<_, _>>(),
            loops,
        })
}

fn isotherm_point() -> impl Strategy<Value = IsothermPoint> {
    (0.0f64..1000.0, 0.0f64..100.0, option::of(0.0f64..200.0)).prop_map(
        |(pressure, loading, p0)| IsothermPoint {
            pressure,
            loading,
            p0,
        },
    )
}

fn aif_block() -> impl Strategy<Value = AifBlock> {
    (
        "[A-Za-z0-9]{1,8}",
        btree_map("exptl_[a-z]{1,8}", "[A-Za-z0-9.]{1,8}", 0..4),
        vec(isotherm_point(), 0..6),
        vec(isotherm_point(), 0..6),
    )
        .prop_map(
            |(data_name, properties, adsorption_data, desorption_data)| AifBlock {
                data_name,
                properties: properties.into_iter().collect(),
                adsorption_data,
                desorption_data,
            },
        )
}

proptest! {
    #[test]
    fn test_cif_block_round_trips(block in cif_block()) {
        prop_assert_eq!(decode_cif(&encode_cif(&block)), block);
    }

    #[test]
    fn test_aif_block_round_trips(block in aif_block()) {
        prop_assert_eq!(decode_aif(&encode_aif(&block)), block);
    }
}

#[test]
fn test_aif_p0_column_only_when_needed() {
    let mut block = AifBlock {
        data_name: "iso".to_string(),
        adsorption_data: vec![IsothermPoint {
            pressure: 0.1,
            loading: 2.0,
            p0: None,
        }],
        ..Default::default()
    };
    assert!(!encode_aif(&block).contains("_adsorp_p0"));

    block.adsorption_data.push(IsothermPoint {
        pressure: 0.2,
        loading: 3.0,
        p0: Some(100.0),
    });
    let text = encode_aif(&block);
    assert!(text.contains("_adsorp_p0"));
    assert!(text.contains("0.1    2    ?"));
    assert_eq!(decode_aif(&text), block);
}

#[test]
fn test_aif_unreadable_rows_are_dropped() {
    let block = decode_aif("data_iso\nloop_\n_adsorp_pressure\n_adsorp_loading\n0.1 2\nn/a 3\n");
    assert_eq!(block.adsorption_data.len(), 1);
    assert_eq!(block.adsorption_data[0].loading, 2.0);
}
