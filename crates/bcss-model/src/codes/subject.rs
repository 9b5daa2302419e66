use std::sync::LazyLock;

use crate::flags::FlagSet;
use crate::lookup::LabelIdMap;

pub static YES_NO_TYPE: LazyLock<FlagSet> = LazyLock::new(|| FlagSet::yes_no("Yes No Type"));

pub static HAS_DATE_OF_DEATH_REMOVAL: LazyLock<FlagSet> =
    LazyLock::new(|| FlagSet::yes_no("Has Date Of Death Removal"));

pub static HAS_UNPROCESSED_SSPI_UPDATES: LazyLock<FlagSet> =
    LazyLock::new(|| FlagSet::yes_no("Has Unprocessed SSPI Updates"));

/// Whether a manual cease has been requested and where the disclaimer letter
/// is in its lifecycle.
pub static MANUAL_CEASE_REQUESTED: LazyLock<FlagSet> = LazyLock::new(|| {
    FlagSet::from_static(
        "Manual Cease Requested",
        &["no", "yes_awaiting_disclaimer", "yes_disclaimer_received"],
    )
});

/// Reason recorded when a subject is ceased from the programme.
pub static CLINICAL_CEASE_REASON_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Clinical Cease Reason Type",
        &[
            ("informed dissent", 43),
            ("informed dissent (verbal only)", 44),
            ("no colon, subject request", 45),
            ("no colon, programme assessed", 46),
            ("informal death", 47),
            ("outside screening population", 48),
            ("currently under treatment", 49),
            ("clinical assessment indicates ceased", 50),
            ("mental capacity act", 307135),
            ("reached upper age limit", 307136),
        ],
    )
});

pub static SCREENING_REFERRAL_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Screening Referral Type",
        &[
            ("gp", 9101),
            ("self-referral", 9102),
            ("hospital", 9103),
            ("screening centre", 9104),
            ("patient choice", 9105),
        ],
    )
});

/// Reason for a change to a subject's screening due date.
pub static SDD_REASON_FOR_CHANGE_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "SDD Reason For Change Type",
        &[
            ("ceased", 11314),
            ("disclaimer letter received", 11315),
            ("late response", 11316),
            ("multiple test kits", 11317),
            ("reopened episode", 11318),
            ("seeking further data", 11319),
            ("opt-in", 11320),
            ("self-referral", 11321),
            ("age extension", 307055),
        ],
    )
});
