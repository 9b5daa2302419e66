#![deny(unsafe_code)]

use std::collections::{BTreeMap, HashMap};

use bcss_model::{Registry, RegistryCatalog, RegistryError, normalize_label, registry_key};
use tracing::{debug, info};

use crate::error::StandardsError;
use crate::valid_values::ValidValues;

/// What an overlay changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct OverlaySummary {
    pub registries: usize,
    pub rebound: usize,
    pub appended: usize,
    pub sha256: Option<String>,
}

/// Apply valid values on top of `base`, returning a new catalog.
///
/// - Label maps and the label half of combined registries rebind existing
///   labels and append new ones.
/// - Enumerated pairs are closed: only existing symbols can be rebound.
/// - Flag sets carry no identifiers and reject any assignment.
///
/// Registry names and labels are compared after normalization, so two
/// spellings of one registry merge, and two spellings of one label are
/// rejected as [`StandardsError::DuplicateAssignment`].
///
/// The resulting catalog must pass every integrity check.
pub fn apply_valid_values(
    base: &RegistryCatalog,
    values: &ValidValues,
) -> Result<(RegistryCatalog, OverlaySummary), StandardsError> {
    let mut catalog = base.clone();
    let mut summary = OverlaySummary {
        sha256: values.sha256.clone(),
        ..OverlaySummary::default()
    };

    for (key, assignments) in group_assignments(&catalog, values)? {
        let registry = catalog
            .get_mut(&key)
            .ok_or_else(|| StandardsError::UnknownRegistry { name: key.clone() })?;
        summary.registries += 1;
        for (label, id) in assignments {
            let appended = assign(registry, label, id)?;
            if appended {
                summary.appended += 1;
            } else {
                summary.rebound += 1;
            }
            debug!(
                registry = registry.name(),
                label,
                id,
                appended,
                "valid value applied"
            );
        }
    }

    let violations = catalog.verify();
    if !violations.is_empty() {
        return Err(StandardsError::Integrity(violations));
    }

    info!(
        registries = summary.registries,
        rebound = summary.rebound,
        appended = summary.appended,
        source = values.source().unwrap_or("-"),
        sha256 = summary.sha256.as_deref().unwrap_or("-"),
        "valid values applied"
    );
    Ok((catalog, summary))
}

/// Assignments keyed by registry key, with each normalized label taken once.
fn group_assignments<'a>(
    catalog: &RegistryCatalog,
    values: &'a ValidValues,
) -> Result<BTreeMap<String, Vec<(&'a str, i64)>>, StandardsError> {
    let mut grouped: BTreeMap<String, Vec<(&'a str, i64)>> = BTreeMap::new();
    let mut seen: HashMap<(String, String), &'a str> = HashMap::new();
    for (name, assignments) in &values.registries {
        if catalog.get(name).is_none() {
            return Err(StandardsError::UnknownRegistry { name: name.clone() });
        }
        let key = registry_key(name);
        for (label, id) in assignments {
            let label_key = (key.clone(), normalize_label(label));
            if let Some(first) = seen.insert(label_key, label.as_str()) {
                return Err(StandardsError::DuplicateAssignment {
                    registry: name.clone(),
                    first: first.to_string(),
                    second: label.clone(),
                });
            }
            grouped.entry(key.clone()).or_default().push((label.as_str(), *id));
        }
    }
    Ok(grouped)
}

/// Returns true when `label` was appended rather than rebound.
fn assign(registry: &mut Registry, label: &str, id: i64) -> Result<bool, RegistryError> {
    match registry {
        Registry::Labels(map) => {
            let appended = !map.contains(label);
            map.set_id(label, id);
            Ok(appended)
        }
        Registry::Combined(map) => {
            if map.flags().contains(label) {
                return Err(RegistryError::AmbiguousToken {
                    registry: map.name().to_string(),
                    token: label.to_string(),
                });
            }
            let labels = map.labels_mut();
            let appended = !labels.contains(label);
            labels.set_id(label, id);
            Ok(appended)
        }
        Registry::Pair(table) => {
            table.rebind(label, id)?;
            Ok(false)
        }
        Registry::Flags(set) => Err(RegistryError::NoIdentifiers(set.name().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcss_model::{FlagSet, LabelIdMap, Resolved};
    use std::collections::BTreeMap;

    fn base() -> RegistryCatalog {
        let mut catalog = RegistryCatalog::new();
        catalog
            .insert(LabelIdMap::from_static(
                "Appointment Status Type",
                &[("booked", 2001), ("attended", 2002)],
            ))
            .unwrap();
        catalog.insert(FlagSet::yes_no("Yes No Type")).unwrap();
        catalog
    }

    fn values(registry: &str, entries: &[(&str, i64)]) -> ValidValues {
        let mut values = ValidValues::default();
        values.registries.insert(
            registry.to_string(),
            entries
                .iter()
                .map(|(label, id)| (label.to_string(), *id))
                .collect::<BTreeMap<_, _>>(),
        );
        values
    }

    #[test]
    fn rebinds_and_appends_labels() {
        let (catalog, summary) = apply_valid_values(
            &base(),
            &values("appointment_status_type", &[("Booked", 3001), ("dna", 3004)]),
        )
        .unwrap();
        assert_eq!(summary.rebound, 1);
        assert_eq!(summary.appended, 1);
        assert_eq!(
            catalog.resolve("Appointment Status Type", "booked"),
            Ok(Resolved::Id(3001))
        );
        assert_eq!(
            catalog.resolve("Appointment Status Type", "attended"),
            Ok(Resolved::Id(2002))
        );
        assert_eq!(
            catalog.resolve("Appointment Status Type", "DNA"),
            Ok(Resolved::Id(3004))
        );
    }

    #[test]
    fn base_catalog_is_untouched() {
        let original = base();
        apply_valid_values(&original, &values("Appointment Status Type", &[("booked", 1)]))
            .unwrap();
        assert_eq!(original, base());
    }

    #[test]
    fn flag_sets_reject_identifiers() {
        let err = apply_valid_values(&base(), &values("Yes No Type", &[("yes", 1)])).unwrap_err();
        assert!(matches!(
            err,
            StandardsError::Registry(RegistryError::NoIdentifiers(_))
        ));
    }

    #[test]
    fn duplicate_identifier_fails_integrity() {
        let err = apply_valid_values(
            &base(),
            &values("Appointment Status Type", &[("booked", 2002)]),
        )
        .unwrap_err();
        match err {
            StandardsError::Integrity(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(matches!(
                    violations[0],
                    RegistryError::DuplicateId { id: 2002, .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn padded_and_cased_labels_collide() {
        let err = apply_valid_values(
            &base(),
            &values("Appointment Status Type", &[("booked", 3001), (" BOOKED ", 3002)]),
        )
        .unwrap_err();
        assert!(
            matches!(err, StandardsError::DuplicateAssignment { ref registry, .. } if registry == "Appointment Status Type"),
            "{err}"
        );
    }

    #[test]
    fn unknown_registry_is_reported() {
        let err = apply_valid_values(&base(), &values("Nope", &[("a", 1)])).unwrap_err();
        assert!(matches!(err, StandardsError::UnknownRegistry { .. }));
    }
}
