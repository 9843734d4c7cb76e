//! Reaction-type gating of the reaction-specific fields

use mpif_babel::model::{MpifRecord, Reaction};
use mpif_babel::{decode, encode};

const MICROWAVE_POWER: &str = "_mpif_synthesis_react_microwave_power_W";

fn with_reaction(reaction: Reaction) -> MpifRecord {
    let mut record = MpifRecord::default();
    record.synthesis_general.reaction = reaction;
    record
}

#[test]
fn test_microwave_power_is_written_for_microwave_only() {
    let text = encode(&with_reaction(Reaction::Microwave { power: Some(150.0) }));
    assert!(text.contains(&format!("{MICROWAVE_POWER}\t150")));

    let text = encode(&with_reaction(Reaction::Other("mix".to_string())));
    assert!(!text.contains(MICROWAVE_POWER));
}

#[test]
fn test_power_in_text_is_ignored_for_other_reaction_types() {
    let text = format!("data_x\n_mpif_synthesis_type\t'mix'\n{MICROWAVE_POWER}\t150\n");
    let record = decode(&text).unwrap().record;
    assert_eq!(record.synthesis_general.reaction, Reaction::Other("mix".to_string()));

    let text = text.replace("'mix'", "'microwave'");
    let record = decode(&text).unwrap().record;
    assert_eq!(
        record.synthesis_general.reaction,
        Reaction::Microwave { power: Some(150.0) }
    );
}

#[test]
fn test_every_reaction_kind_round_trips() {
    let reactions = [
        Reaction::Evaporation {
            method: Some("slow".to_string()),
        },
        Reaction::Microwave { power: Some(300.0) },
        Reaction::Mechanochemical {
            method: Some("ball milling".to_string()),
        },
        Reaction::Electrochemical {
            cathode: Some("Pt".to_string()),
            anode: Some("Zn".to_string()),
            reference: Some("Ag/AgCl".to_string()),
            voltage: Some(1.2),
            current: Some(0.01),
        },
        Reaction::Sonochemical {
            method: Some("probe".to_string()),
            power: Some(40.0),
            power_unit: Some("W".to_string()),
        },
        Reaction::Photochemical {
            wavelength: Some(365.0),
            power: Some(10.0),
            source: Some("LED".to_string()),
        },
        Reaction::Other("solvothermal".to_string()),
    ];

    for reaction in reactions {
        let record = with_reaction(reaction.clone());
        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded.record.synthesis_general.reaction, reaction);
        assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    }
}

#[test]
fn test_unset_reaction_fields_are_omitted() {
    let text = encode(&with_reaction(Reaction::Electrochemical {
        cathode: Some("Pt".to_string()),
        anode: None,
        reference: Some(String::new()),
        voltage: None,
        current: Some(0.5),
    }));
    assert!(text.contains("_mpif_synthesis_react_electrochem_cathode\tPt"));
    assert!(!text.contains("electrochem_anode"));
    assert!(!text.contains("electrochem_reference"));
    assert!(!text.contains("electrochem_voltage"));
    assert!(text.contains("_mpif_synthesis_react_electrochem_current_A\t0.5"));
}
