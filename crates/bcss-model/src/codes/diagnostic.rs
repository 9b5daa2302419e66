//! Diagnostic test criteria.

use std::sync::LazyLock;

use crate::combined::FlagOrIdMap;
use crate::flags::FlagSet;
use crate::lookup::LabelIdMap;

pub static DIAGNOSTIC_TEST_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Diagnostic Test Type",
        &[
            ("colonoscopy", 15001),
            ("limited colonoscopy", 15002),
            ("flexible sigmoidoscopy", 15003),
            ("ct colonography", 15004),
            ("endoscopic ultrasound", 15005),
        ],
    )
});

/// Which of a subject's diagnostic tests a criterion applies to.
pub static WHICH_DIAGNOSTIC_TEST: LazyLock<FlagSet> = LazyLock::new(|| {
    FlagSet::from_static(
        "Which Diagnostic Test",
        &[
            "any_test_in_any_episode",
            "any_test_in_latest_episode",
            "only_test_in_latest_episode",
            "only_not_void_test_in_latest_episode",
            "latest_test_in_latest_episode",
            "latest_not_void_test_in_latest_episode",
            "earliest_not_void_test_in_latest_episode",
        ],
    )
});

/// `yes`/`no` for whether any result is recorded, or a specific result label.
pub static DIAGNOSTIC_TEST_HAS_RESULT: LazyLock<FlagOrIdMap> = LazyLock::new(|| {
    FlagOrIdMap::from_static(
        "Diagnostic Test Has Result",
        &["yes", "no"],
        &[
            ("positive", 9001),
            ("negative", 9002),
            ("technical fail", 9003),
            ("abnormal", 9004),
        ],
    )
});

/// `yes`/`no` for whether an outcome is recorded, or a specific outcome label.
pub static DIAGNOSTIC_TEST_HAS_OUTCOME_OF_RESULT: LazyLock<FlagOrIdMap> = LazyLock::new(|| {
    FlagOrIdMap::from_static(
        "Diagnostic Test Has Outcome Of Result",
        &["yes", "no"],
        &[
            ("refer another diagnostic test", 20363),
            ("refer surveillance", 20364),
            ("refer symptomatic", 20365),
            ("investigations complete", 20366),
            ("refer mdt", 20367),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combined::Resolved;

    #[test]
    fn has_result_flags_and_labels() {
        assert_eq!(
            DIAGNOSTIC_TEST_HAS_RESULT.from_description("no"),
            Ok(Resolved::Token("no".to_string()))
        );
        assert_eq!(
            DIAGNOSTIC_TEST_HAS_RESULT.from_description("positive"),
            Ok(Resolved::Id(9001))
        );
        assert!(DIAGNOSTIC_TEST_HAS_RESULT.from_description("unsure").is_err());
    }
}
