use std::sync::LazyLock;

use crate::lookup::LabelIdMap;

pub static SURVEILLANCE_REVIEW_CASE_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Surveillance Review Case Type",
        &[
            ("low risk", 9201),
            ("lnpcp", 9202),
            ("high risk findings", 9203),
        ],
    )
});

pub static SURVEILLANCE_REVIEW_STATUS_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Surveillance Review Status Type",
        &[
            ("awaiting review", 9301),
            ("in review", 9302),
            ("completed", 9303),
            ("discarded", 9304),
        ],
    )
});

/// Reason for a change to a subject's surveillance due date.
pub static SSDD_REASON_FOR_CHANGE_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "SSDD Reason For Change Type",
        &[
            ("reopened episode", 20110),
            ("result referred to surveillance", 20111),
            ("clinician request", 20112),
            ("discharge from surveillance - age", 20113),
            ("discharge from surveillance - national guidelines", 20114),
        ],
    )
});
