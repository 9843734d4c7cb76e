//! Conversion between MPIF synthesis records and their text forms
//!
//!     This crate provides the structured synthesis record ([`model::MpifRecord`]) and the
//!     bidirectional converter between it and MPIF, a line-oriented tagged-text format derived
//!     from crystallographic file conventions. A JSON form of the record is supported through
//!     serde.
//!
//!     This is a pure lib, that is, it powers the mpif cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it printing, env vars etc. Degraded parses are
//!     reported through [`DecodeWarning`]s and the `log` facade, never printed.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError and DecodeWarning
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── model.rs                # The synthesis record
//!     ├── values.rs               # Number and null-marker conventions
//!     ├── embedded                # Tagged-text blocks nested in MPIF
//!     │   ├── mod.rs              # Shared line scanner
//!     │   ├── cif.rs              # Crystallographic-properties block
//!     │   └── aif.rs              # Adsorption-isotherm block
//!     ├── formats
//!     │   ├── mpif
//!     │   │   ├── parser.rs       # Text → record
//!     │   │   ├── serializer.rs   # Record → text
//!     │   │   ├── index.rs        # Tag index over document lines
//!     │   │   ├── rows.rs         # Loop table schemas
//!     │   │   └── tags.rs
//!     │   └── json
//!     ├── builder.rs              # Record construction, row id assignment
//!     ├── tabular.rs              # Columnar data → characterization points
//!     ├── loader.rs               # Files / text / records → record
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common              # Shared fixtures loader and a fully populated record
//!     ├── embedded            # Block codec properties
//!     ├── json
//!     ├── mpif
//!     │   └── <testname>.rs
//!     └── fixtures
//!         └── <docname>.mpif
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Core Algorithms
//!
//!     The hard part is the MPIF grammar: loops with declared row counts, free-text blocks
//!     delimited by lone `;` lines, reaction fields gated by the reaction type, and two
//!     embedded block formats that must round-trip themselves. Decoding favours partial
//!     recovery over rejection; see [`formats::mpif::parser`].
//!
//!     All embedded blocks share one three-state line scanner ([`embedded::scan`]). The outer
//!     decoder indexes the document once by leading token ([`formats::mpif::TagIndex`]) and
//!     answers every prefix lookup from that index.

pub mod builder;
pub mod embedded;
pub mod error;
pub mod format;
pub mod formats;
pub mod loader;
pub mod model;
pub mod registry;
pub mod tabular;
pub mod values;

pub use builder::RecordBuilder;
pub use error::{DecodeWarning, FormatError};
pub use format::Format;
pub use formats::mpif::{decode, decode_with_options, encode, DecodeOptions, Decoded};
pub use formats::{JsonFormat, MpifFormat};
pub use loader::{load, load_record, Input};
pub use model::MpifRecord;
pub use registry::FormatRegistry;
