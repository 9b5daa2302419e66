//! Closed vocabularies of normalized string tokens.

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, RegistryError};
use crate::lookup::{check_labels, normalize_label};

/// A small closed set of tokens such as `yes`/`no`.
///
/// Membership is an exact match on the whole token after normalization;
/// `"yes"` never matches `"yes_incomplete"` and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    name: String,
    tokens: Vec<String>,
}

impl FlagSet {
    pub fn from_static(name: &str, tokens: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            tokens: tokens.iter().map(|token| normalize_label(token)).collect(),
        }
    }

    pub fn try_new<I, S>(name: &str, tokens: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Self {
            name: name.to_string(),
            tokens: tokens
                .into_iter()
                .map(|token| normalize_label(token.as_ref()))
                .collect(),
        };
        set.check_integrity()?;
        Ok(set)
    }

    /// The `{yes, no}` vocabulary under the given registry name.
    pub fn yes_no(name: &str) -> Self {
        Self::from_static(name, &["yes", "no"])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Return the canonical token for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidFlag`] carrying `value` unchanged when it
    /// is not a member of the set.
    pub fn normalize(&self, value: &str) -> Result<&str, LookupError> {
        self.find(value)
            .ok_or_else(|| LookupError::invalid_flag(&self.name, value))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    pub(crate) fn find(&self, value: &str) -> Option<&str> {
        let key = normalize_label(value);
        self.tokens
            .iter()
            .find(|token| **token == key)
            .map(String::as_str)
    }

    pub fn check_integrity(&self) -> Result<(), RegistryError> {
        check_labels(&self.name, self.tokens.iter().map(String::as_str))
    }
}
