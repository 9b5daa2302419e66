#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use bcss_model::{RegistryCatalog, builtin_catalog};
use tracing::debug;

use crate::error::StandardsError;
use crate::overlay::{OverlaySummary, apply_valid_values};
use crate::valid_values::{ValidValues, parse_valid_values_csv, parse_valid_values_toml};

/// Environment variable naming a valid values file to apply by default.
pub const VALID_VALUES_ENV_VAR: &str = "BCSS_VALID_VALUES";

/// Read a valid values file, choosing the parser from its extension.
pub fn load_valid_values(path: &Path) -> Result<ValidValues, StandardsError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("toml") => parse_valid_values_toml(path),
        Some("csv") => parse_valid_values_csv(path),
        _ => Err(StandardsError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Valid values path from `BCSS_VALID_VALUES`, if set and non-empty.
pub fn default_valid_values_path() -> Option<PathBuf> {
    std::env::var_os(VALID_VALUES_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Catalog with valid values applied.
///
/// Uses `path` when given, else [`VALID_VALUES_ENV_VAR`], else returns the
/// builtin catalog unchanged (with no summary).
pub fn load_catalog(
    path: Option<&Path>,
) -> Result<(RegistryCatalog, Option<OverlaySummary>), StandardsError> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_valid_values_path(),
    };
    let Some(path) = path else {
        debug!("no valid values file configured; using builtin identifiers");
        return Ok((builtin_catalog().clone(), None));
    };
    debug!(path = %path.display(), "loading valid values");
    let values = load_valid_values(&path)?;
    let (catalog, summary) = apply_valid_values(builtin_catalog(), &values)?;
    Ok((catalog, Some(summary)))
}
