use std::sync::LazyLock;

use crate::lookup::LabelIdMap;

/// Status of a screening practitioner or specialist appointment.
pub static APPOINTMENT_STATUS_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Appointment Status Type",
        &[
            ("booked", 2001),
            ("attended", 2002),
            ("cancelled", 2003),
            ("dna", 2004),
        ],
    )
});

pub static APPOINTMENT_SLOT_TYPE: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Appointment Slot Type",
        &[
            ("colonoscopy assessment", 209028),
            ("flexi-sigmoidoscopy assessment", 209029),
            ("post-investigation", 209030),
            ("surveillance assessment", 209031),
            ("telephone assessment", 209032),
        ],
    )
});

/// Delivery status of a letter or message routed through NHS Notify.
pub static NOTIFY_EVENT_STATUS: LazyLock<LabelIdMap> = LazyLock::new(|| {
    LabelIdMap::from_static(
        "Notify Event Status",
        &[
            ("pending", 307110),
            ("requested", 307111),
            ("sending", 307112),
            ("delivered", 307113),
            ("failed", 307114),
            ("cancelled", 307115),
        ],
    )
});
