//! Builtin registries.
//!
//! Identifiers here are defaults for a reference BCSS environment. A target
//! system's own valid values are applied on top through a valid value overlay
//! (see the `bcss-standards` crate); the typed pair enums keep the defaults.

mod address;
mod appointment;
mod diagnostic;
mod episode;
mod subject;
mod surveillance;

pub use address::{AddressContactType, AddressType};
pub use appointment::{APPOINTMENT_SLOT_TYPE, APPOINTMENT_STATUS_TYPE, NOTIFY_EVENT_STATUS};
pub use diagnostic::{
    DIAGNOSTIC_TEST_HAS_OUTCOME_OF_RESULT, DIAGNOSTIC_TEST_HAS_RESULT, DIAGNOSTIC_TEST_TYPE,
    WHICH_DIAGNOSTIC_TEST,
};
pub use episode::{
    EpisodeType, LATEST_EPISODE_HAS_DATASET, PREVALENT_INCIDENT_STATUS_TYPE, SUBJECT_HAS_EPISODE,
    ScreeningStatus,
};
pub use subject::{
    CLINICAL_CEASE_REASON_TYPE, HAS_DATE_OF_DEATH_REMOVAL, HAS_UNPROCESSED_SSPI_UPDATES,
    MANUAL_CEASE_REQUESTED, SCREENING_REFERRAL_TYPE, SDD_REASON_FOR_CHANGE_TYPE, YES_NO_TYPE,
};
pub use surveillance::{
    SSDD_REASON_FOR_CHANGE_TYPE, SURVEILLANCE_REVIEW_CASE_TYPE, SURVEILLANCE_REVIEW_STATUS_TYPE,
};
