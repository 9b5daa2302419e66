//! Registries that accept either a flag token or a labelled identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, RegistryError};
use crate::flags::FlagSet;
use crate::lookup::LabelIdMap;

/// Result of resolving free text through a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Resolved {
    /// A canonical flag token, e.g. `no`.
    Token(String),
    /// A valid value identifier.
    Id(i64),
}

impl Resolved {
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Resolved::Id(id) => Some(*id),
            Resolved::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&str> {
        match self {
            Resolved::Token(token) => Some(token),
            Resolved::Id(_) => None,
        }
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Token(token) => f.write_str(token),
            Resolved::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Flag vocabulary checked first, then a label map.
///
/// Used for criteria such as "diagnostic test has result", where `yes`/`no`
/// ask whether any result exists and a label asks for one specific result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagOrIdMap {
    name: String,
    flags: FlagSet,
    labels: LabelIdMap,
}

impl FlagOrIdMap {
    pub fn from_static(name: &str, flags: &[&str], labels: &[(&str, i64)]) -> Self {
        Self {
            name: name.to_string(),
            flags: FlagSet::from_static(name, flags),
            labels: LabelIdMap::from_static(name, labels),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    pub fn labels(&self) -> &LabelIdMap {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut LabelIdMap {
        &mut self.labels
    }

    pub fn len(&self) -> usize {
        self.flags.len() + self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve `text` to a flag token or, failing that, a labelled identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownLabel`] carrying `text` unchanged when
    /// neither half matches.
    pub fn from_description(&self, text: &str) -> Result<Resolved, LookupError> {
        if let Some(token) = self.flags.find(text) {
            return Ok(Resolved::Token(token.to_string()));
        }
        self.labels
            .find(text)
            .map(Resolved::Id)
            .ok_or_else(|| LookupError::unknown_label(&self.name, text))
    }

    pub fn check_integrity(&self) -> Result<(), RegistryError> {
        self.flags.check_integrity()?;
        self.labels.check_integrity()?;
        if let Some(token) = self
            .flags
            .tokens()
            .iter()
            .find(|token| self.labels.contains(token))
        {
            return Err(RegistryError::AmbiguousToken {
                registry: self.name.clone(),
                token: token.clone(),
            });
        }
        Ok(())
    }
}
