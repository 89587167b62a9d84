use super::DescribedCategory;

pub(super) const CATEGORIES: &[DescribedCategory] = &[
    (
        "data-integrity",
        "Data Integrity Rules",
        &[
            ("uniqueness", "Values that must not repeat across records"),
            ("referential-integrity", "References must point at existing records"),
            ("required-fields", "Fields that can never be left empty"),
            ("format-validation", "Expected formats for emails, phone numbers and IDs"),
            ("retention", "How long records are kept before archival or deletion"),
        ],
    ),
    (
        "access-control",
        "Access Control Rules",
        &[
            ("role-permissions", "Which roles may read, create, update or delete"),
            ("ownership", "Records editable only by their owner"),
            ("approval-required", "Changes that need sign-off before taking effect"),
            ("session-limits", "Idle timeouts and concurrent session limits"),
        ],
    ),
    (
        "workflow",
        "Workflow & State Rules",
        &[
            ("state-transitions", "Allowed moves between lifecycle states"),
            ("preconditions", "Conditions that must hold before an action runs"),
            ("escalation", "When and to whom stalled items are escalated"),
            ("deadlines", "Due dates and what happens when they pass"),
        ],
    ),
    (
        "calculations",
        "Calculation Rules",
        &[
            ("pricing", "How prices, discounts and totals are derived"),
            ("taxes", "Tax rates and where they apply"),
            ("rounding", "Rounding mode and precision for monetary values"),
            ("aggregations", "Counts, sums and averages shown to users"),
        ],
    ),
    (
        "notifications",
        "Notification Rules",
        &[
            ("triggers", "Events that send a notification"),
            ("channels", "Email, SMS, push or in-app delivery"),
            ("frequency", "Batching and rate limits for repeated alerts"),
        ],
    ),
    (
        "compliance",
        "Compliance & Regulatory Rules",
        &[
            ("data-privacy", "Personal data handling and consent"),
            ("audit-trail", "Actions that must be logged for audit"),
            ("data-residency", "Where data may be stored and processed"),
            ("accessibility", "Accessibility standards the product must meet"),
        ],
    ),
];
