//! Sheet layouts, column positions and naming rules shared by the writer and
//! the reader.
//!
//! The reader has no self-describing markers to rely on: header offsets and
//! column positions defined here must match what the writer produces.

use crate::models::Domain;

/// Rows above the first data row on every data sheet (title + column headers).
pub const HEADER_ROWS: u32 = 2;

/// Name of the optional sheet holding scope settings.
pub const CONFIG_SHEET: &str = "Configuration";

/// Hard ceiling on sheet name length imposed by the file format.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters kept from an over-long sheet name before the ellipsis.
pub const TRUNCATED_SHEET_NAME_LEN: usize = 28;

/// Selection flags accepted as "selected" (trimmed, case-insensitive).
pub const TRUTHY_TOKENS: [&str; 3] = ["yes", "x", "true"];

/// Column positions on a data sheet.
pub mod columns {
    /// Category ID (first row of a block only)
    pub const CATEGORY_ID: u16 = 0;
    /// Category display name (first row of a block only)
    pub const CATEGORY_NAME: u16 = 1;
    /// Item display name
    pub const ITEM: u16 = 2;
    /// Selected flag
    pub const SELECTED: u16 = 3;
    /// User annotation
    pub const NOTES: u16 = 4;
    /// Catalog description
    pub const DESCRIPTION: u16 = 5;
    /// Yes for user-defined items
    pub const IS_CUSTOM: u16 = 6;
    /// Number of columns written
    pub const COUNT: u16 = 7;
}

/// Setting labels on the Configuration sheet (matched exactly).
pub mod settings {
    /// Yes/No scope flag
    pub const APPLY_TO_ALL: &str = "Apply to All Projects";
    /// Comma-joined target IDs
    pub const SPECIFIC_TARGETS: &str = "Specific Modules";
    /// Label context passed to the exporter
    pub const PROJECT: &str = "Project";
    /// Domain display name
    pub const DOMAIN: &str = "Domain";
    /// Export timestamp (RFC 3339)
    pub const EXPORTED_AT: &str = "Exported At";
}

/// How categories are distributed over sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLayout {
    /// All categories in one sheet with this exact name
    Combined(&'static str),
    /// One sheet per category, named after the category
    PerCategory,
}

/// Workbook layout of one feature domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkbookFormat {
    /// Feature domain
    pub domain: Domain,
    /// Sheet distribution
    pub layout: SheetLayout,
    /// Header of the item column
    pub item_header: &'static str,
    /// Header of the notes column
    pub notes_header: &'static str,
}

impl WorkbookFormat {
    /// Returns the layout used for a domain.
    pub const fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::BusinessRules => Self {
                domain,
                layout: SheetLayout::PerCategory,
                item_header: "Rule",
                notes_header: "User Rule",
            },
            Domain::ActionsInteractions => Self {
                domain,
                layout: SheetLayout::Combined("Actions & Interactions"),
                item_header: "Action",
                notes_header: "Notes",
            },
            Domain::AnimationEffects => Self {
                domain,
                layout: SheetLayout::Combined("Animation Effects"),
                item_header: "Effect",
                notes_header: "Notes",
            },
            Domain::DesignGuidelines => Self {
                domain,
                layout: SheetLayout::Combined("Design Guidelines"),
                item_header: "Guideline",
                notes_header: "Notes",
            },
        }
    }

    /// Column headers in column order.
    pub const fn headers(&self) -> [&'static str; columns::COUNT as usize] {
        [
            "Category ID",
            "Category Name",
            self.item_header,
            "Selected",
            self.notes_header,
            "Description",
            "Is Custom",
        ]
    }

    /// Returns true if categories live on their own sheets.
    pub const fn is_per_category(&self) -> bool {
        matches!(self.layout, SheetLayout::PerCategory)
    }
}

/// Converts a category name into the sheet name used for it.
///
/// Characters the format forbids are replaced with `-`, leading/trailing
/// apostrophes are dropped, and names over 31 characters keep their first 28
/// characters followed by `...`. The reader applies the same rule when looking
/// a category's sheet up by name.
pub fn sheet_name_for(name: &str) -> String {
    let sanitized = name.replace(['[', ']', ':', '*', '?', '/', '\\'], "-");
    let sanitized = sanitized.trim().trim_matches('\'');

    if sanitized.chars().count() > MAX_SHEET_NAME_LEN {
        let mut truncated: String = sanitized.chars().take(TRUNCATED_SHEET_NAME_LEN).collect();
        truncated.push_str("...");
        truncated
    } else {
        sanitized.to_string()
    }
}

/// Returns true if a selection flag means "selected".
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    TRUTHY_TOKENS
        .iter()
        .any(|token| value.eq_ignore_ascii_case(token))
}

/// Formats a boolean the way the writer records flags.
pub const fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
