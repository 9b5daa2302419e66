#![deny(unsafe_code)]

//! Valid value files: the identifiers a target BCSS environment actually uses.
//!
//! Two formats are accepted. TOML, one table per registry:
//!
//! ```toml
//! [meta]
//! schema_version = 1
//! source = "BCSS valid values export"
//!
//! [registries."Appointment Status Type"]
//! booked = 2101
//! "no show" = 2105
//! ```
//!
//! CSV, one row per label, with headers `registry,label,valid_value_id`.
//! For enumerated pair registries the label column holds the variant symbol.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use bcss_model::{normalize_label, registry_key};
use serde::{Deserialize, Serialize};

use crate::error::StandardsError;
use crate::hash::sha256_hex;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidValuesMeta {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub source: Option<String>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Identifier assignments grouped by registry name, then label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidValues {
    #[serde(default)]
    pub meta: Option<ValidValuesMeta>,
    #[serde(default)]
    pub registries: BTreeMap<String, BTreeMap<String, i64>>,
    /// SHA-256 of the file the values were read from.
    #[serde(skip)]
    pub sha256: Option<String>,
}

impl ValidValues {
    /// Number of label assignments across all registries.
    pub fn entry_count(&self) -> usize {
        self.registries.values().map(BTreeMap::len).sum()
    }

    pub fn source(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|meta| meta.source.as_deref())
    }
}

/// File contents as UTF-8 text, with the SHA-256 of the raw bytes.
fn read_text(path: &Path) -> Result<(String, String), StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    let sha256 = sha256_hex(&bytes);
    let text = String::from_utf8(bytes).map_err(|e| {
        StandardsError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()),
        )
    })?;
    Ok((text, sha256))
}

pub fn parse_valid_values_toml(path: &Path) -> Result<ValidValues, StandardsError> {
    let (text, sha256) = read_text(path)?;
    let mut values: ValidValues =
        toml::from_str(&text).map_err(|source| StandardsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(meta) = &values.meta
        && meta.schema_version != SCHEMA_VERSION
    {
        return Err(StandardsError::SchemaVersion {
            found: meta.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    values.sha256 = Some(sha256);
    Ok(values)
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

fn get_string(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

pub fn parse_valid_values_csv(path: &Path) -> Result<ValidValues, StandardsError> {
    let (text, sha256) = read_text(path)?;
    let csv_error = |message: String| StandardsError::Csv {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| csv_error(format!("read headers: {e}")))?
        .clone();
    let column = |name: &str| {
        header_index(&headers, name).ok_or_else(|| csv_error(format!("missing column '{name}'")))
    };
    let registry_idx = column("registry")?;
    let label_idx = column("label")?;
    let id_idx = column("valid_value_id")?;

    let mut values = ValidValues::default();
    // (registry key, normalized label) -> (line, label as written)
    let mut seen: HashMap<(String, String), (usize, String)> = HashMap::new();
    for (line, record) in reader.records().enumerate() {
        // Header is line 1.
        let line = line + 2;
        let record = record.map_err(|e| csv_error(format!("line {line}: {e}")))?;
        let registry = get_string(&record, registry_idx);
        let label = get_string(&record, label_idx);
        let raw_id = get_string(&record, id_idx);
        if registry.is_none() && label.is_none() && raw_id.is_none() {
            continue;
        }
        let registry =
            registry.ok_or_else(|| csv_error(format!("line {line}: missing registry")))?;
        let label = label.ok_or_else(|| csv_error(format!("line {line}: missing label")))?;
        let raw_id =
            raw_id.ok_or_else(|| csv_error(format!("line {line}: missing valid_value_id")))?;
        let id = raw_id
            .parse::<i64>()
            .map_err(|e| csv_error(format!("line {line}: valid_value_id '{raw_id}': {e}")))?;

        let key = (registry_key(registry), normalize_label(label));
        if let Some((first_line, first_label)) = seen.get(&key) {
            return Err(csv_error(format!(
                "line {line}: '{label}' in {registry} already assigned as '{first_label}' on line {first_line}"
            )));
        }
        seen.insert(key, (line, label.to_string()));
        values
            .registries
            .entry(registry.to_string())
            .or_default()
            .insert(label.to_string(), id);
    }
    values.sha256 = Some(sha256);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_deserializes_registry_tables() {
        let values: ValidValues = toml::from_str(
            r#"
[meta]
source = "unit"

[registries."Appointment Status Type"]
booked = 2101
"no show" = 2105
"#,
        )
        .unwrap();
        assert_eq!(values.source(), Some("unit"));
        assert_eq!(values.meta.as_ref().unwrap().schema_version, 1);
        assert_eq!(values.entry_count(), 2);
        assert_eq!(
            values.registries["Appointment Status Type"].get("no show"),
            Some(&2105)
        );
    }

    #[test]
    fn meta_is_optional() {
        let values: ValidValues = toml::from_str("[registries.\"Yes No Type\"]\n").unwrap();
        assert!(values.meta.is_none());
        assert_eq!(values.entry_count(), 0);
    }
}
