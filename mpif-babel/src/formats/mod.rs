//! Format implementations
//!
//! This module contains the format implementations that convert between
//! [`crate::model::MpifRecord`] and its text representations.

pub mod json;
pub mod mpif;

pub use json::JsonFormat;
pub use mpif::{DecodeOptions, Decoded, MpifFormat};
