#![allow(missing_docs)]

use std::thread;

use proptest::prelude::*;

use bcss_model::codes::{
    APPOINTMENT_STATUS_TYPE, AddressContactType, CLINICAL_CEASE_REASON_TYPE,
    DIAGNOSTIC_TEST_HAS_RESULT, LATEST_EPISODE_HAS_DATASET, ScreeningStatus, YES_NO_TYPE,
};
use bcss_model::{
    EnumeratedPair, LookupError, Registry, RegistryKind, Resolved, builtin_catalog,
    normalize_label,
};

#[test]
fn builtin_catalog_passes_integrity_checks() {
    let violations = builtin_catalog().verify();
    assert!(violations.is_empty(), "violations: {violations:?}");
}

#[test]
fn builtin_catalog_covers_every_shape() {
    let catalog = builtin_catalog();
    for kind in [
        RegistryKind::EnumeratedPair,
        RegistryKind::LabelMap,
        RegistryKind::FlagSet,
        RegistryKind::Combined,
    ] {
        assert!(
            catalog.iter().any(|registry| registry.kind() == kind),
            "no {kind} registry"
        );
    }
}

#[test]
fn address_contact_type_scenario() {
    let work = AddressContactType::resolve_by_id(13056).expect("WORK");
    assert_eq!(work.symbol(), "WORK");
    assert_eq!(work.id(), 13056);
    assert_eq!(AddressContactType::resolve_by_id(99999), None);
}

#[test]
fn appointment_status_scenario() {
    assert_eq!(APPOINTMENT_STATUS_TYPE.get_id("  DNA  "), Ok(2004));
    assert_eq!(
        APPOINTMENT_STATUS_TYPE.get_id("no-show"),
        Err(LookupError::UnknownLabel {
            registry: "Appointment Status Type".to_string(),
            label: "no-show".to_string(),
        })
    );
}

#[test]
fn yes_no_scenario() {
    assert_eq!(YES_NO_TYPE.normalize("Yes"), Ok("yes"));
    let err = YES_NO_TYPE.normalize("maybe").unwrap_err();
    assert!(matches!(err, LookupError::InvalidFlag { .. }));
    assert_eq!(err.input(), "maybe");
    assert!(YES_NO_TYPE.normalize("yesss").is_err());
}

#[test]
fn diagnostic_test_has_result_scenario() {
    assert_eq!(
        DIAGNOSTIC_TEST_HAS_RESULT.from_description("no"),
        Ok(Resolved::Token("no".to_string()))
    );
    assert_eq!(
        DIAGNOSTIC_TEST_HAS_RESULT.from_description("positive"),
        Ok(Resolved::Id(9001))
    );
    let err = DIAGNOSTIC_TEST_HAS_RESULT
        .from_description("unsure")
        .unwrap_err();
    assert_eq!(err.input(), "unsure");
}

#[test]
fn unknown_label_carries_literal_input() {
    let err = CLINICAL_CEASE_REASON_TYPE
        .get_id("not-a-real-label")
        .unwrap_err();
    assert_eq!(err.input(), "not-a-real-label");
    assert_eq!(
        err.to_string(),
        "unknown label 'not-a-real-label' for Clinical Cease Reason Type"
    );
}

#[test]
fn informed_dissent_resolves_from_ui_text() {
    assert_eq!(CLINICAL_CEASE_REASON_TYPE.get_id("Informed Dissent"), Ok(43));
    assert_eq!(
        CLINICAL_CEASE_REASON_TYPE.label_for_id(43),
        Some("informed dissent")
    );
}

#[test]
fn catalog_reaches_registries_by_name() {
    let catalog = builtin_catalog();
    assert_eq!(
        catalog.resolve("appointment_status_type", "Booked"),
        Ok(Resolved::Id(2001))
    );
    assert_eq!(
        catalog.resolve("Address Contact Type", "home"),
        Ok(Resolved::Id(13057))
    );
    assert_eq!(
        catalog.resolve("latest-episode-has-dataset", "PAST"),
        Ok(Resolved::Token("past".to_string()))
    );
    let registry = catalog.require("screening status").unwrap();
    assert_eq!(registry.reverse(4004).as_deref(), Some("RECALL"));
    assert!(matches!(
        catalog.require("yes_no_type").unwrap(),
        Registry::Flags(_)
    ));
    assert_eq!(catalog.require("yes_no_type").unwrap().reverse(1), None);
}

#[test]
fn pair_tables_in_catalog_match_typed_enums() {
    let registry = builtin_catalog()
        .require(ScreeningStatus::REGISTRY)
        .unwrap();
    for status in ScreeningStatus::all() {
        assert_eq!(registry.reverse(status.id()).as_deref(), Some(status.symbol()));
    }
}

#[test]
fn registries_are_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|n| {
            thread::spawn(move || {
                let label = if n % 2 == 0 { "Attended" } else { " attended " };
                APPOINTMENT_STATUS_TYPE.get_id(label)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(2002));
    }
}

fn registered_labels() -> Vec<String> {
    builtin_catalog()
        .iter()
        .filter_map(|registry| match registry {
            Registry::Labels(map) => Some(map),
            Registry::Combined(map) => Some(map.labels()),
            _ => None,
        })
        .flat_map(|map| map.entries().iter().map(|entry| entry.label.clone()))
        .collect()
}

fn case_variant(label: &str, mask: u64) -> String {
    label
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if (mask >> (i % 64)) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn normalization_is_idempotent(text in "[ \\tA-Za-z0-9(),-]{0,32}") {
        let once = normalize_label(&text);
        prop_assert_eq!(normalize_label(&once), once.clone());
        prop_assert_eq!(
            CLINICAL_CEASE_REASON_TYPE.find(&once),
            CLINICAL_CEASE_REASON_TYPE.find(&text)
        );
    }

    #[test]
    fn lookups_ignore_case_and_padding(
        index in 0usize..256,
        mask in any::<u64>(),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let labels = registered_labels();
        let label = &labels[index % labels.len()];
        let probe = format!("{left}{}{right}", case_variant(label, mask));
        for registry in builtin_catalog().iter() {
            prop_assert_eq!(registry.resolve(&probe).ok(), registry.resolve(label).ok());
        }
    }

    #[test]
    fn reverse_lookup_is_total(
        id in prop_oneof![
            any::<i64>(),
            2000i64..2010,
            4000i64..4010,
            9000i64..9010,
            13040i64..13060,
        ]
    ) {
        if let Some(contact) = AddressContactType::resolve_by_id(id) {
            prop_assert_eq!(contact.id(), id);
        }
        if let Some(status) = ScreeningStatus::resolve_by_id(id) {
            prop_assert_eq!(status.id(), id);
        }
        for registry in builtin_catalog().iter() {
            if let Some(label) = registry.reverse(id) {
                prop_assert_eq!(registry.resolve(&label).ok(), Some(Resolved::Id(id)));
            }
        }
    }

    #[test]
    fn flag_sets_never_fuzzy_match(suffix in "[a-z_]{1,4}") {
        for token in LATEST_EPISODE_HAS_DATASET.tokens() {
            let probe = format!("{token}{suffix}");
            if !LATEST_EPISODE_HAS_DATASET.tokens().contains(&probe) {
                prop_assert!(LATEST_EPISODE_HAS_DATASET.normalize(&probe).is_err());
            }
        }
    }
}
