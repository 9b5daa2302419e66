#![deny(unsafe_code)]

use std::path::PathBuf;

use bcss_model::RegistryError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML valid values {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("unsupported valid values format for {path} (expected .toml or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("unsupported valid values schema_version {found} (supported: {supported})")]
    SchemaVersion { found: u32, supported: u32 },

    #[error("valid values reference unknown registry '{name}'")]
    UnknownRegistry { name: String },

    #[error("{registry}: '{first}' and '{second}' assign the same label")]
    DuplicateAssignment {
        registry: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("valid values failed {} integrity check(s): {}", .0.len(), join_errors(.0))]
    Integrity(Vec<RegistryError>),
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn join_errors(errors: &[RegistryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
