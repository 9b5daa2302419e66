//! Domain code registries for the Bowel Cancer Screening System (BCSS).
//!
//! Translates human-facing criteria ("Informed Dissent", "Yes", "DNA") into the
//! valid value identifiers or canonical tokens the backing system stores. Three
//! shapes cover every table:
//!
//! - [`EnumeratedPair`]: closed typed variants with a symbol and an identifier.
//! - [`LabelIdMap`]: free-text labels mapped to identifiers.
//! - [`FlagSet`]: closed vocabularies of tokens such as `yes`/`no`.
//!
//! [`FlagOrIdMap`] combines a flag set with a label map. All tables are
//! immutable after construction and safe to share across threads.

#![deny(unsafe_code)]

pub mod codes;
pub mod combined;
pub mod error;
pub mod flags;
pub mod lookup;
pub mod pair;
pub mod registry;

pub use combined::{FlagOrIdMap, Resolved};
pub use error::{LookupError, RegistryError};
pub use flags::FlagSet;
pub use lookup::{LabelEntry, LabelIdMap, normalize_label};
pub use pair::{EnumeratedPair, PairEntry, PairTable};
pub use registry::{Registry, RegistryCatalog, RegistryKind, builtin_catalog, registry_key};
