//! Label normalization and the label-to-identifier map.
//!
//! Labels reach the registries from UI text and test criteria, so casing and
//! surrounding whitespace are never significant. Every table stores its labels
//! already normalized and normalizes the probe before comparing.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, RegistryError};

/// Trim surrounding whitespace and lower-case.
pub fn normalize_label(value: &str) -> String {
    value.trim().to_lowercase()
}

/// One row of a [`LabelIdMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Normalized label.
    pub label: String,
    /// Valid value identifier.
    pub id: i64,
}

/// Free-text labels mapped to valid value identifiers.
///
/// Entries keep their declaration order. Tables hold at most a few dozen rows,
/// so lookups scan linearly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelIdMap {
    name: String,
    entries: Vec<LabelEntry>,
}

impl LabelIdMap {
    /// Build a builtin table. Labels are normalized on the way in; integrity is
    /// checked separately with [`LabelIdMap::check_integrity`].
    pub fn from_static(name: &str, entries: &[(&str, i64)]) -> Self {
        Self {
            name: name.to_string(),
            entries: entries
                .iter()
                .map(|(label, id)| LabelEntry {
                    label: normalize_label(label),
                    id: *id,
                })
                .collect(),
        }
    }

    /// Build a table from arbitrary entries, rejecting duplicates and empty labels.
    pub fn try_new<I, S>(name: &str, entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let map = Self {
            name: name.to_string(),
            entries: entries
                .into_iter()
                .map(|(label, id)| LabelEntry {
                    label: normalize_label(label.as_ref()),
                    id,
                })
                .collect(),
        };
        map.check_integrity()?;
        Ok(map)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a label to its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownLabel`] carrying `label` unchanged when no
    /// entry matches.
    pub fn get_id(&self, label: &str) -> Result<i64, LookupError> {
        self.find(label)
            .ok_or_else(|| LookupError::unknown_label(&self.name, label))
    }

    /// Like [`LabelIdMap::get_id`] but reports absence as `None`.
    pub fn find(&self, label: &str) -> Option<i64> {
        let key = normalize_label(label);
        self.entries
            .iter()
            .find(|entry| entry.label == key)
            .map(|entry| entry.id)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some()
    }

    /// Reverse lookup: the label registered for `id`, if any.
    pub fn label_for_id(&self, id: i64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.label.as_str())
    }

    /// Rebind an existing label to `id`, or append it as a new entry.
    ///
    /// Other entries are untouched. Uniqueness is not checked here; callers
    /// applying a batch of changes run [`LabelIdMap::check_integrity`] after.
    pub fn set_id(&mut self, label: &str, id: i64) {
        let key = normalize_label(label);
        match self.entries.iter_mut().find(|entry| entry.label == key) {
            Some(entry) => entry.id = id,
            None => self.entries.push(LabelEntry { label: key, id }),
        }
    }

    /// Verify labels are non-empty, normalized and unique, and identifiers unique.
    pub fn check_integrity(&self) -> Result<(), RegistryError> {
        check_labels(&self.name, self.entries.iter().map(|e| e.label.as_str()))?;
        check_ids(
            &self.name,
            self.entries.iter().map(|e| (e.label.as_str(), e.id)),
        )
    }
}

/// Shared label checks for every table shape.
pub(crate) fn check_labels<'a, I>(registry: &str, labels: I) -> Result<(), RegistryError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for label in labels {
        if label.is_empty() {
            return Err(RegistryError::EmptyLabel {
                registry: registry.to_string(),
            });
        }
        if normalize_label(label) != label {
            return Err(RegistryError::UnnormalizedLabel {
                registry: registry.to_string(),
                label: label.to_string(),
            });
        }
        if !seen.insert(label) {
            return Err(RegistryError::DuplicateLabel {
                registry: registry.to_string(),
                label: label.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_ids<'a, I>(registry: &str, pairs: I) -> Result<(), RegistryError>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let mut seen: HashMap<i64, &str> = HashMap::new();
    for (label, id) in pairs {
        if let Some(first) = seen.insert(id, label) {
            return Err(RegistryError::DuplicateId {
                registry: registry.to_string(),
                id,
                first: first.to_string(),
                second: label.to_string(),
            });
        }
    }
    Ok(())
}
