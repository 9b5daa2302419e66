//! Name-addressable directory of registries.
//!
//! Each registry stays independent; the catalog only lets callers (the CLI,
//! valid value overlays) reach one by name without knowing its shape.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::codes;
use crate::combined::{FlagOrIdMap, Resolved};
use crate::error::{LookupError, RegistryError};
use crate::flags::FlagSet;
use crate::lookup::{LabelIdMap, normalize_label};
use crate::pair::{EnumeratedPair, PairTable};

/// The shape of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    EnumeratedPair,
    LabelMap,
    FlagSet,
    Combined,
}

impl RegistryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryKind::EnumeratedPair => "enumerated pair",
            RegistryKind::LabelMap => "label map",
            RegistryKind::FlagSet => "flag set",
            RegistryKind::Combined => "flag + label map",
        }
    }

    /// Whether entries carry valid value identifiers.
    pub fn has_ids(&self) -> bool {
        !matches!(self, RegistryKind::FlagSet)
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry of any shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Registry {
    Pair(PairTable),
    Labels(LabelIdMap),
    Flags(FlagSet),
    Combined(FlagOrIdMap),
}

impl Registry {
    pub fn name(&self) -> &str {
        match self {
            Registry::Pair(table) => table.name(),
            Registry::Labels(map) => map.name(),
            Registry::Flags(set) => set.name(),
            Registry::Combined(map) => map.name(),
        }
    }

    pub fn kind(&self) -> RegistryKind {
        match self {
            Registry::Pair(_) => RegistryKind::EnumeratedPair,
            Registry::Labels(_) => RegistryKind::LabelMap,
            Registry::Flags(_) => RegistryKind::FlagSet,
            Registry::Combined(_) => RegistryKind::Combined,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Registry::Pair(table) => table.len(),
            Registry::Labels(map) => map.len(),
            Registry::Flags(set) => set.len(),
            Registry::Combined(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve free text the way the registry's shape defines.
    ///
    /// Pair registries resolve a symbol to its identifier, label maps a label to
    /// its identifier, flag sets a value to its canonical token, and combined
    /// registries try the flag vocabulary before the labels.
    pub fn resolve(&self, text: &str) -> Result<Resolved, LookupError> {
        match self {
            Registry::Pair(table) => table
                .resolve_by_symbol(text)
                .map(|entry| Resolved::Id(entry.id))
                .ok_or_else(|| LookupError::UnknownSymbol {
                    registry: table.name().to_string(),
                    symbol: text.to_string(),
                }),
            Registry::Labels(map) => map.get_id(text).map(Resolved::Id),
            Registry::Flags(set) => set
                .normalize(text)
                .map(|token| Resolved::Token(token.to_string())),
            Registry::Combined(map) => map.from_description(text),
        }
    }

    /// Label or symbol registered for `id`. Flag sets carry no identifiers.
    pub fn reverse(&self, id: i64) -> Option<String> {
        match self {
            Registry::Pair(table) => table.resolve_by_id(id).map(|entry| entry.symbol.clone()),
            Registry::Labels(map) => map.label_for_id(id).map(str::to_string),
            Registry::Flags(_) => None,
            Registry::Combined(map) => map.labels().label_for_id(id).map(str::to_string),
        }
    }

    pub fn check_integrity(&self) -> Result<(), RegistryError> {
        match self {
            Registry::Pair(table) => table.check_integrity(),
            Registry::Labels(map) => map.check_integrity(),
            Registry::Flags(set) => set.check_integrity(),
            Registry::Combined(map) => map.check_integrity(),
        }
    }
}

impl From<PairTable> for Registry {
    fn from(table: PairTable) -> Self {
        Registry::Pair(table)
    }
}

impl From<LabelIdMap> for Registry {
    fn from(map: LabelIdMap) -> Self {
        Registry::Labels(map)
    }
}

impl From<FlagSet> for Registry {
    fn from(set: FlagSet) -> Self {
        Registry::Flags(set)
    }
}

impl From<FlagOrIdMap> for Registry {
    fn from(map: FlagOrIdMap) -> Self {
        Registry::Combined(map)
    }
}

/// Catalog key for a registry name: normalized, with `_` and `-` read as
/// spaces and runs of whitespace collapsed.
pub fn registry_key(name: &str) -> String {
    normalize_label(name)
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Registries keyed by [`registry_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryCatalog {
    registries: BTreeMap<String, Registry>,
}

impl RegistryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRegistry`] if the name is taken.
    pub fn insert(&mut self, registry: impl Into<Registry>) -> Result<(), RegistryError> {
        let registry = registry.into();
        let key = registry_key(registry.name());
        if self.registries.contains_key(&key) {
            return Err(RegistryError::DuplicateRegistry(registry.name().to_string()));
        }
        self.registries.insert(key, registry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Registry> {
        self.registries.get(&registry_key(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Registry> {
        self.registries.get_mut(&registry_key(name))
    }

    /// Like [`RegistryCatalog::get`] but fails with [`LookupError::UnknownRegistry`].
    pub fn require(&self, name: &str) -> Result<&Registry, LookupError> {
        self.get(name)
            .ok_or_else(|| LookupError::UnknownRegistry(name.to_string()))
    }

    pub fn resolve(&self, registry: &str, text: &str) -> Result<Resolved, LookupError> {
        self.require(registry)?.resolve(text)
    }

    /// Registries ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = &Registry> + '_ {
        self.registries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.registries.values().map(Registry::name)
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    /// Run every registry's integrity check and collect the violations.
    pub fn verify(&self) -> Vec<RegistryError> {
        self.registries
            .values()
            .filter_map(|registry| registry.check_integrity().err())
            .collect()
    }
}

static BUILTIN_CATALOG: OnceLock<RegistryCatalog> = OnceLock::new();

/// Catalog of every builtin registry, built on first access.
pub fn builtin_catalog() -> &'static RegistryCatalog {
    BUILTIN_CATALOG.get_or_init(build_builtin_catalog)
}

fn build_builtin_catalog() -> RegistryCatalog {
    let mut catalog = RegistryCatalog::new();
    for registry in builtin_registries() {
        // Names are distinct (checked in tests); keep the first on a clash.
        catalog
            .registries
            .entry(registry_key(registry.name()))
            .or_insert(registry);
    }
    catalog
}

fn builtin_registries() -> Vec<Registry> {
    vec![
        // Enumerated pairs
        codes::AddressContactType::table().into(),
        codes::AddressType::table().into(),
        codes::EpisodeType::table().into(),
        codes::ScreeningStatus::table().into(),
        // Label maps
        codes::APPOINTMENT_STATUS_TYPE.clone().into(),
        codes::APPOINTMENT_SLOT_TYPE.clone().into(),
        codes::SCREENING_REFERRAL_TYPE.clone().into(),
        codes::SURVEILLANCE_REVIEW_CASE_TYPE.clone().into(),
        codes::SURVEILLANCE_REVIEW_STATUS_TYPE.clone().into(),
        codes::NOTIFY_EVENT_STATUS.clone().into(),
        codes::CLINICAL_CEASE_REASON_TYPE.clone().into(),
        codes::SDD_REASON_FOR_CHANGE_TYPE.clone().into(),
        codes::SSDD_REASON_FOR_CHANGE_TYPE.clone().into(),
        codes::DIAGNOSTIC_TEST_TYPE.clone().into(),
        // Flag sets
        codes::YES_NO_TYPE.clone().into(),
        codes::HAS_DATE_OF_DEATH_REMOVAL.clone().into(),
        codes::SUBJECT_HAS_EPISODE.clone().into(),
        codes::HAS_UNPROCESSED_SSPI_UPDATES.clone().into(),
        codes::LATEST_EPISODE_HAS_DATASET.clone().into(),
        codes::MANUAL_CEASE_REQUESTED.clone().into(),
        codes::PREVALENT_INCIDENT_STATUS_TYPE.clone().into(),
        codes::WHICH_DIAGNOSTIC_TEST.clone().into(),
        // Flag + label maps
        codes::DIAGNOSTIC_TEST_HAS_RESULT.clone().into(),
        codes::DIAGNOSTIC_TEST_HAS_OUTCOME_OF_RESULT.clone().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_key_accepts_cli_spellings() {
        assert_eq!(
            registry_key("appointment_status_type"),
            "appointment status type"
        );
        assert_eq!(
            registry_key(" Appointment-Status  Type "),
            "appointment status type"
        );
    }

    #[test]
    fn catalog_rejects_duplicate_names() {
        let mut catalog = RegistryCatalog::new();
        catalog.insert(FlagSet::yes_no("Yes No Type")).unwrap();
        let err = catalog.insert(FlagSet::yes_no("yes_no_type")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateRegistry("yes_no_type".to_string()));
    }

    #[test]
    fn require_reports_unknown_registry() {
        let catalog = RegistryCatalog::new();
        assert_eq!(
            catalog.require("nope").unwrap_err(),
            LookupError::UnknownRegistry("nope".to_string())
        );
    }

    #[test]
    fn resolve_dispatches_on_shape() {
        let mut catalog = RegistryCatalog::new();
        catalog.insert(FlagSet::yes_no("Yes No Type")).unwrap();
        catalog
            .insert(LabelIdMap::from_static("Statuses", &[("booked", 1)]))
            .unwrap();
        assert_eq!(
            catalog.resolve("yes_no_type", "YES"),
            Ok(Resolved::Token("yes".to_string()))
        );
        assert_eq!(catalog.resolve("statuses", " Booked"), Ok(Resolved::Id(1)));
        assert!(matches!(
            catalog.resolve("statuses", "maybe"),
            Err(LookupError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn builtin_names_are_distinct() {
        assert_eq!(builtin_catalog().len(), builtin_registries().len());
    }
}
