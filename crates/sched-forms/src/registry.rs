//! Fixed form registries.
//!
//! The form ids are owned by the signup forms themselves and only change
//! when a form is recreated, so they live here rather than in configuration.

/// JC signup forms, one per subject.
pub const JC_FORM_IDS: [(&str, &str); 6] = [
    ("Economics", "13LY71ZQAhLeJE0zkTjuGjYIeRyVst2E9f3Wg4o3VZ54"),
    ("Chemistry", "1Tlrqn0J7YGJVGU4bqmkr3--ui2SH9q2IsTwgQP9EcHw"),
    ("Mathematics", "1MEVouE4DVpUIrhtC31prKS6lBWKJ0nQRYkyJe7n6GlU"),
    ("Biology", "1W9lY0N0fy_u7YgBB7vP7yKa3xAxHlkEyfmR6yFcWaSI"),
    ("Physics", "1kEnJDNuF4D0lvfeTP7nR8IyE4YnSZpAEaJkYZBhQm2I"),
    ("General Paper", "1ziNR30SHVj6fJkRT8xGtY6WOVID2UKZemxbwb5OZbD8"),
];

/// Secondary signup forms, one per stream year.
pub const SECONDARY_FORM_IDS: [(&str, &str); 4] = [
    ("Sec 1", "1r6PSvsf_9QYTBb5UL_hzCxPCL3Z8k28EYc4x-Xd-aoE"),
    ("Sec 2", "1PWW8Np5kkq5v0WwQvVNX0ObtN_EsNhOb4yggKzPXDwU"),
    ("Sec 3", "1aHpuJA2e2dP8eyh_U2WNUOXiQfi9x3LNy7R6iCRNdys"),
    ("Sec 4", "1GUPubKN1b8Xn6VJttz3PNTgJ7MDMOvNUxqMqeenWtX8"),
];

/// Subject titles recognised in the secondary forms.
pub(crate) const SECONDARY_SUBJECTS: [&str; 22] = [
    "English",
    "IP English",
    "E Math",
    "A Math",
    "IP Math",
    "IP Mathematics",
    "Math",
    "Mathematics",
    "IP Science",
    "Science",
    "IP Biology",
    "Biology",
    "Pure Biology",
    "Combined Biology",
    "IP Chemistry",
    "Chemistry",
    "Pure Chemistry",
    "Combined Chemistry",
    "IP Physics",
    "Physics",
    "Pure Physics",
    "Combined Physics",
];

/// The preferred-slot items extracted from the JC forms.
pub(crate) const JC_SLOT_ITEMS: [&str; 2] = [
    "(J1) Select your Preferred Slot",
    "(J2) Select your Preferred Slot",
];
