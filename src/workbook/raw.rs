//! Result of decoding a workbook before reconciliation.

use crate::models::{ScopeConfig, SelectionState};

/// One data row read from a workbook.
///
/// `category_id`/`category_name` come from the last block header seen above
/// the row, so they may be absent for rows written before any header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Sheet the row was read from
    pub sheet: String,
    /// Category ID carried forward from the block header
    pub category_id: Option<String>,
    /// Category name carried forward from the block header
    pub category_name: Option<String>,
    /// Item display name (never empty)
    pub item_name: String,
    /// Selected flag parsed with the truthy token set
    pub selected: bool,
    /// User annotation
    pub notes: Option<String>,
    /// Description column
    pub description: Option<String>,
    /// Is Custom column parsed with the truthy token set
    pub is_custom: bool,
}

/// Partial model decoded from a workbook.
///
/// Nothing is filtered against a catalog yet: rows for unknown categories or
/// items are kept so the reconciler can decide their fate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDecodedModel {
    /// Data rows in sheet/row order
    pub rows: Vec<RawRow>,
    /// Scope from the Configuration sheet, if that sheet had any settings
    pub scope: Option<ScopeConfig>,
    /// Project label recorded at export time
    pub project: Option<String>,
    /// All sheet names found in the workbook
    pub sheet_names: Vec<String>,
}

impl RawDecodedModel {
    /// Selection as recorded in the workbook, keyed by category ID.
    ///
    /// Rows without a category ID are not included.
    pub fn selection(&self) -> SelectionState {
        let mut selection = SelectionState::new();
        for row in self.rows.iter().filter(|r| r.selected) {
            if let Some(id) = &row.category_id {
                selection.select(id, &row.item_name);
            }
        }
        selection
    }

    /// Rows whose block header carries the given category ID.
    pub fn rows_for<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a RawRow> {
        self.rows
            .iter()
            .filter(move |r| r.category_id.as_deref() == Some(category_id))
    }
}
