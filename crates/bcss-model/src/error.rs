use thiserror::Error;

/// Failure to translate caller-supplied text through a registry.
///
/// Every variant keeps the text exactly as the caller passed it, before
/// trimming or lower-casing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown label '{label}' for {registry}")]
    UnknownLabel { registry: String, label: String },

    #[error("invalid flag '{value}' for {registry}")]
    InvalidFlag { registry: String, value: String },

    #[error("unknown symbol '{symbol}' for {registry}")]
    UnknownSymbol { registry: String, symbol: String },

    #[error("unknown registry '{0}'")]
    UnknownRegistry(String),
}

impl LookupError {
    pub(crate) fn unknown_label(registry: &str, label: &str) -> Self {
        Self::UnknownLabel {
            registry: registry.to_string(),
            label: label.to_string(),
        }
    }

    pub(crate) fn invalid_flag(registry: &str, value: &str) -> Self {
        Self::InvalidFlag {
            registry: registry.to_string(),
            value: value.to_string(),
        }
    }

    /// The offending input, as originally supplied.
    pub fn input(&self) -> &str {
        match self {
            LookupError::UnknownLabel { label, .. } => label,
            LookupError::InvalidFlag { value, .. } => value,
            LookupError::UnknownSymbol { symbol, .. } => symbol,
            LookupError::UnknownRegistry(name) => name,
        }
    }
}

/// Violation of a table invariant (uniqueness, normalization, closed sets).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{registry}: empty label")]
    EmptyLabel { registry: String },

    #[error("{registry}: label '{label}' is not normalized")]
    UnnormalizedLabel { registry: String, label: String },

    #[error("{registry}: duplicate label '{label}'")]
    DuplicateLabel { registry: String, label: String },

    #[error("{registry}: identifier {id} used by both '{first}' and '{second}'")]
    DuplicateId {
        registry: String,
        id: i64,
        first: String,
        second: String,
    },

    #[error("{registry}: '{token}' is both a flag and a label")]
    AmbiguousToken { registry: String, token: String },

    #[error("duplicate registry '{0}'")]
    DuplicateRegistry(String),

    #[error("{registry}: unknown symbol '{symbol}'")]
    UnknownSymbol { registry: String, symbol: String },

    #[error("{0} has no numeric identifiers")]
    NoIdentifiers(String),
}
