#![deny(unsafe_code)]

//! Valid value configuration for the BCSS domain code registries.
//!
//! The builtin identifiers in `bcss-model` describe a reference environment.
//! This crate reads the identifiers a real environment uses, from TOML or CSV,
//! and applies them on top of the builtin catalog.

pub mod error;
pub mod hash;
pub mod loader;
pub mod overlay;
pub mod valid_values;

pub use crate::error::StandardsError;
pub use crate::loader::{
    VALID_VALUES_ENV_VAR, default_valid_values_path, load_catalog, load_valid_values,
};
pub use crate::overlay::{OverlaySummary, apply_valid_values};
pub use crate::valid_values::{ValidValues, ValidValuesMeta};
