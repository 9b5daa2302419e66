use std::sync::LazyLock;

use crate::flags::FlagSet;
use crate::pair::enumerated_pair;

enumerated_pair! {
    /// Screening programme an episode belongs to.
    pub enum EpisodeType as "Episode Type" {
        Fobt = ("FOBT", 11350),
        BowelScope = ("BOWEL_SCOPE", 200640),
        Surveillance = ("SURVEILLANCE", 11352),
        LynchSurveillance = ("LYNCH_SURVEILLANCE", 305634),
    }
}

enumerated_pair! {
    /// A subject's current screening status.
    pub enum ScreeningStatus as "Screening Status" {
        Call = ("CALL", 4001),
        Inactive = ("INACTIVE", 4002),
        OptIn = ("OPT_IN", 4003),
        Recall = ("RECALL", 4004),
        SelfReferral = ("SELF_REFERRAL", 4005),
        Surveillance = ("SURVEILLANCE", 4006),
        SeekingFurtherData = ("SEEKING_FURTHER_DATA", 4007),
        Ceased = ("CEASED", 4008),
        BowelScope = ("BOWEL_SCOPE", 4009),
        LynchSurveillance = ("LYNCH_SURVEILLANCE", 306442),
        LynchSelfReferral = ("LYNCH_SELF_REFERRAL", 307129),
    }
}

pub static SUBJECT_HAS_EPISODE: LazyLock<FlagSet> =
    LazyLock::new(|| FlagSet::yes_no("Subject Has Episode"));

/// State of the dataset recorded against the latest episode.
///
/// `past` means a dataset exists on an earlier episode only.
pub static LATEST_EPISODE_HAS_DATASET: LazyLock<FlagSet> = LazyLock::new(|| {
    FlagSet::from_static(
        "Latest Episode Has Dataset",
        &["no", "yes_incomplete", "yes_complete", "past"],
    )
});

pub static PREVALENT_INCIDENT_STATUS_TYPE: LazyLock<FlagSet> = LazyLock::new(|| {
    FlagSet::from_static("Prevalent Incident Status Type", &["prevalent", "incident"])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::EnumeratedPair;

    #[test]
    fn screening_status_reverse_lookup() {
        assert_eq!(
            ScreeningStatus::resolve_by_id(4008),
            Some(ScreeningStatus::Ceased)
        );
        assert_eq!(ScreeningStatus::resolve_by_id(4010), None);
    }

    #[test]
    fn dataset_flags_match_whole_tokens() {
        assert_eq!(
            LATEST_EPISODE_HAS_DATASET.normalize(" Yes_Incomplete"),
            Ok("yes_incomplete")
        );
        assert!(LATEST_EPISODE_HAS_DATASET.normalize("yes").is_err());
    }
}
