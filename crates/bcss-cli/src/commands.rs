use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use bcss_model::{RegistryCatalog, Resolved};
use bcss_standards::load_catalog;

use crate::render::{catalog_table, registry_table, violations_table};

/// Rendered command result. `success` drives the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

/// Builtin catalog with the configured valid values applied.
pub fn open_catalog(valid_values: Option<&Path>) -> Result<RegistryCatalog> {
    let (catalog, summary) = load_catalog(valid_values).context("load valid values")?;
    match summary {
        Some(summary) => info!(
            registries = summary.registries,
            rebound = summary.rebound,
            appended = summary.appended,
            "catalog loaded with valid values"
        ),
        None => debug!(registries = catalog.len(), "catalog loaded"),
    }
    Ok(catalog)
}

pub fn run_registries(catalog: &RegistryCatalog) -> CommandOutput {
    CommandOutput::ok(catalog_table(catalog).to_string())
}

pub fn run_show(catalog: &RegistryCatalog, registry: &str, json: bool) -> Result<CommandOutput> {
    let registry = catalog.require(registry)?;
    if json {
        let text = serde_json::to_string_pretty(registry).context("serialize registry")?;
        return Ok(CommandOutput::ok(text));
    }
    Ok(CommandOutput::ok(format!(
        "{} ({})\n{}",
        registry.name(),
        registry.kind(),
        registry_table(registry)
    )))
}

#[derive(Serialize)]
struct LookupReport<'a> {
    registry: &'a str,
    input: &'a str,
    resolved: &'a Resolved,
}

/// Resolve `text`. An unknown label or invalid flag is a failed outcome; an
/// unknown registry is an error.
pub fn run_lookup(
    catalog: &RegistryCatalog,
    registry: &str,
    text: &str,
    json: bool,
) -> Result<CommandOutput> {
    let registry = catalog.require(registry)?;
    match registry.resolve(text) {
        Ok(resolved) => {
            debug!(registry = registry.name(), input = text, %resolved, "resolved");
            if json {
                let report = LookupReport {
                    registry: registry.name(),
                    input: text,
                    resolved: &resolved,
                };
                let text = serde_json::to_string(&report).context("serialize lookup")?;
                return Ok(CommandOutput::ok(text));
            }
            Ok(CommandOutput::ok(resolved.to_string()))
        }
        Err(error) => {
            warn!(registry = registry.name(), input = text, "lookup failed");
            Ok(CommandOutput::failed(error.to_string()))
        }
    }
}

pub fn run_reverse(catalog: &RegistryCatalog, registry: &str, id: i64) -> Result<CommandOutput> {
    let registry = catalog.require(registry)?;
    if !registry.kind().has_ids() {
        return Ok(CommandOutput::failed(format!(
            "{} has no numeric identifiers",
            registry.name()
        )));
    }
    Ok(match registry.reverse(id) {
        Some(label) => CommandOutput::ok(label),
        None => CommandOutput::failed(format!("{id} not found in {}", registry.name())),
    })
}

pub fn run_verify(catalog: &RegistryCatalog) -> CommandOutput {
    let violations = catalog.verify();
    if violations.is_empty() {
        info!(registries = catalog.len(), "all registries passed");
        return CommandOutput::ok(format!("{} registries verified", catalog.len()));
    }
    warn!(count = violations.len(), "integrity violations found");
    CommandOutput::failed(violations_table(&violations).to_string())
}
