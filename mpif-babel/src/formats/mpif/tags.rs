//! Tag names of the MPIF document, shared by the encoder and the decoder.

pub const DATA_PREFIX: &str = "data_";
pub const LOOP: &str = "loop_";
pub const TEXT_DELIMITER: &str = ";";

// Metadata
pub const CREATION_DATE: &str = "_mpif_audit_creation_date";
pub const GENERATOR_VERSION: &str = "_mpif_audit_generator_version";
pub const PUBLICATION_DOI: &str = "_mpif_audit_publication_doi";
pub const PROCEDURE_STATUS: &str = "_mpif_audit_procedure_status";

// Section 1
pub const AUTHOR_NAME: &str = "_mpif_audit_contact_author_name";
pub const AUTHOR_EMAIL: &str = "_mpif_audit_contact_author_email";
pub const AUTHOR_ORCID: &str = "_mpif_audit_contact_author_id_orcid";
pub const AUTHOR_ADDRESS: &str = "_mpif_audit_contact_author_address";
pub const AUTHOR_PHONE: &str = "_mpif_audit_contact_author_phone";

// Section 2
pub const PRODUCT_TYPE: &str = "_mpif_product_type";
pub const PRODUCT_CAS: &str = "_mpif_product_cas";
pub const PRODUCT_CCDC: &str = "_mpif_product_ccdc";
pub const PRODUCT_NAME_COMMON: &str = "_mpif_product_name_common";
pub const PRODUCT_NAME_SYSTEMATIC: &str = "_mpif_product_name_systematic";
pub const PRODUCT_FORMULA: &str = "_mpif_product_formula";
pub const PRODUCT_FORMULA_WEIGHT: &str = "_mpif_product_formula_weight";
pub const PRODUCT_STATE: &str = "_mpif_product_state";
pub const PRODUCT_COLOR: &str = "_mpif_product_color";
pub const PRODUCT_HANDLING_ATMOSPHERE: &str = "_mpif_product_handling_atmosphere";
pub const PRODUCT_HANDLING_NOTE: &str = "_mpif_product_handling_note";
pub const PRODUCT_CIF: &str = "_mpif_product_cif";

// Section 3
pub const PERFORMED_DATE: &str = "_mpif_synthesis_performed_date";
pub const LAB_TEMPERATURE: &str = "_mpif_synthesis_lab_temperature_C";
pub const LAB_HUMIDITY: &str = "_mpif_synthesis_lab_humidity_percent";
pub const REACTION_TYPE: &str = "_mpif_synthesis_type";
pub const EVAPORATION_METHOD: &str = "_mpif_synthesis_evap_method";
pub const MICROWAVE_POWER: &str = "_mpif_synthesis_react_microwave_power_W";
pub const MECHANOCHEMICAL_METHOD: &str = "_mpif_synthesis_react_mechanochem_method";
pub const ELECTROCHEMICAL_CATHODE: &str = "_mpif_synthesis_react_electrochem_cathode";
pub const ELECTROCHEMICAL_ANODE: &str = "_mpif_synthesis_react_electrochem_anode";
pub const ELECTROCHEMICAL_REFERENCE: &str = "_mpif_synthesis_react_electrochem_reference";
pub const ELECTROCHEMICAL_VOLTAGE: &str = "_mpif_synthesis_react_electrochem_voltage_V";
pub const ELECTROCHEMICAL_CURRENT: &str = "_mpif_synthesis_react_electrochem_current_A";
pub const SONICATION_METHOD: &str = "_mpif_synthesis_react_sonication_method";
pub const SONICATION_POWER: &str = "_mpif_synthesis_react_sonication_power";
pub const SONICATION_POWER_UNIT: &str = "_mpif_synthesis_react_sonication_power_unit";
pub const PHOTOCHEMICAL_WAVELENGTH: &str = "_mpif_synthesis_react_photochemical_wavelength_nm";
pub const PHOTOCHEMICAL_POWER: &str = "_mpif_synthesis_react_photochemical_power_W";
pub const PHOTOCHEMICAL_SOURCE: &str = "_mpif_synthesis_react_photochemical_source";
pub const REACTION_TEMPERATURE: &str = "_mpif_synthesis_react_temperature_C";
pub const TEMPERATURE_CONTROLLER: &str = "_mpif_synthesis_react_temperature_controller";
pub const REACTION_TIME: &str = "_mpif_synthesis_react_time";
pub const REACTION_TIME_UNIT: &str = "_mpif_synthesis_react_time_unit";
pub const REACTION_ATMOSPHERE: &str = "_mpif_synthesis_react_atmosphere";
pub const REACTION_CONTAINER: &str = "_mpif_synthesis_react_container";
pub const REACTION_NOTE: &str = "_mpif_synthesis_react_note";
pub const PRODUCT_AMOUNT: &str = "_mpif_synthesis_product_amount";
pub const PRODUCT_AMOUNT_UNIT: &str = "_mpif_synthesis_product_amount_unit";
pub const PRODUCT_YIELD: &str = "_mpif_synthesis_product_yield_percent";
pub const SCALE: &str = "_mpif_synthesis_scale";
pub const SAFETY_NOTE: &str = "_mpif_synthesis_safety_note";

// Section 4
pub const PROCEDURE_FULL: &str = "_mpif_procedure_full";

// Characterization
pub const PXRD_DATA: &str = "_mpif_pxrd_data";
pub const PXRD_SOURCE: &str = "_mpif_pxrd_source";
pub const PXRD_LAMBDA: &str = "_mpif_pxrd_lambda";
pub const PXRD_TWO_THETA: &str = "_pxrd_2theta";
pub const PXRD_INTENSITY: &str = "_pxrd_intensity";
pub const TGA_DATA: &str = "_mpif_tga_data";
pub const TGA_TEMPERATURE: &str = "_tga_temperature_celcius";
pub const TGA_WEIGHT: &str = "_tga_weight_percent";
pub const AIF: &str = "_mpif_aif";
