use proptest::prelude::*;

use bcss_cli::commands::{run_lookup, run_registries, run_reverse, run_show, run_verify};
use bcss_model::{LabelIdMap, RegistryCatalog, builtin_catalog};

#[test]
fn registries_lists_every_registry() {
    let catalog = builtin_catalog();
    let output = run_registries(catalog);
    assert!(output.success);
    for name in catalog.names() {
        assert!(output.text.contains(name), "missing {name}");
    }
}

#[test]
fn lookup_prints_identifier() {
    let output = run_lookup(builtin_catalog(), "appointment_status_type", "  DNA ", false).unwrap();
    assert!(output.success);
    assert_eq!(output.text, "2004");
}

#[test]
fn lookup_prints_canonical_token() {
    let output = run_lookup(builtin_catalog(), "Yes No Type", "YES", false).unwrap();
    assert!(output.success);
    assert_eq!(output.text, "yes");
}

#[test]
fn lookup_json_reports_kind_and_value() {
    let output = run_lookup(
        builtin_catalog(),
        "Diagnostic Test Has Result",
        "Positive",
        true,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(json["registry"], "Diagnostic Test Has Result");
    assert_eq!(json["input"], "Positive");
    assert_eq!(json["resolved"]["kind"], "id");
    assert_eq!(json["resolved"]["value"], 9001);
}

#[test]
fn unknown_label_is_a_failed_lookup() {
    let output = run_lookup(builtin_catalog(), "Appointment Status Type", "no-show", false).unwrap();
    assert!(!output.success);
    assert!(output.text.contains("'no-show'"), "{}", output.text);
}

#[test]
fn unknown_registry_is_an_error() {
    let err = run_lookup(builtin_catalog(), "Nothing Here", "x", false).unwrap_err();
    assert!(err.to_string().contains("Nothing Here"));
}

#[test]
fn reverse_finds_pair_symbol() {
    let output = run_reverse(builtin_catalog(), "Address Contact Type", 13056).unwrap();
    assert!(output.success);
    assert_eq!(output.text, "WORK");
}

#[test]
fn reverse_absent_identifier_fails() {
    let output = run_reverse(builtin_catalog(), "Address Contact Type", 99999).unwrap();
    assert!(!output.success);
}

#[test]
fn reverse_on_flag_set_fails() {
    let output = run_reverse(builtin_catalog(), "Yes No Type", 1).unwrap();
    assert!(!output.success);
    assert!(output.text.contains("no numeric identifiers"));
}

#[test]
fn show_json_is_tagged_by_shape() {
    let output = run_show(builtin_catalog(), "Address Contact Type", true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(json["shape"], "pair");
    assert_eq!(json["entries"][0]["symbol"], "WORK");
}

#[test]
fn show_table_lists_labels() {
    let output = run_show(builtin_catalog(), "appointment_status_type", false).unwrap();
    assert!(output.success);
    assert!(output.text.starts_with("Appointment Status Type"));
    assert!(output.text.contains("cancelled"));
}

#[test]
fn verify_passes_builtin_catalog() {
    let output = run_verify(builtin_catalog());
    assert!(output.success, "{}", output.text);
}

#[test]
fn verify_reports_duplicate_identifiers() {
    let mut catalog = RegistryCatalog::new();
    catalog
        .insert(LabelIdMap::from_static(
            "Broken",
            &[("first", 1), ("second", 1)],
        ))
        .unwrap();
    let output = run_verify(&catalog);
    assert!(!output.success);
    assert!(output.text.contains("identifier 1"), "{}", output.text);
}

proptest! {
    #[test]
    fn reverse_never_errors_for_label_registries(id in any::<i64>()) {
        let output = run_reverse(builtin_catalog(), "Screening Referral Type", id);
        prop_assert!(output.is_ok());
    }
}
