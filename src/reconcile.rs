//! Reconciliation of decoded workbooks against the canonical catalog.
//!
//! Imported files may come from an older catalog or be edited by hand. The
//! merge keeps the canonical categories and items, drops anything that no
//! longer resolves, and keeps user-defined items.

use tracing::debug;

use crate::models::{ConfigModel, Item};
use crate::workbook::{sheet_name_for, RawDecodedModel, RawRow, WorkbookFormat};

/// Merges a decoded workbook into a copy of the canonical model.
///
/// - Categories and catalog items are always the canonical ones, in canonical
///   order. Notes on a matched catalog row become that item's user value.
/// - Selections are kept only for names that exist in the category.
/// - Rows flagged as custom that do not match a catalog item become custom
///   items of their category.
/// - Scope comes from the workbook, or from `canonical` when absent.
///
/// Never fails; rows that cannot be placed are dropped.
pub fn merge(raw: &RawDecodedModel, canonical: &ConfigModel) -> ConfigModel {
    let mut merged = ConfigModel::new(canonical.domain, canonical.categories.clone());
    merged.scope = raw
        .scope
        .clone()
        .unwrap_or_else(|| canonical.scope.clone());

    let per_category = WorkbookFormat::for_domain(canonical.domain).is_per_category();
    let mut dropped = 0usize;

    for row in &raw.rows {
        let Some(category_id) = resolve_category(canonical, row, per_category) else {
            debug!(
                item = %row.item_name,
                category = ?row.category_id,
                "dropping row of unknown category"
            );
            dropped += 1;
            continue;
        };

        if let Some(item) = merged
            .category_mut(&category_id)
            .and_then(|c| c.item_mut(&row.item_name))
        {
            item.set_user_value(row.notes.clone());
        } else if row.is_custom {
            let customs = merged
                .custom_category_items
                .entry(category_id.clone())
                .or_default();
            if customs.iter().any(|i| i.name() == row.item_name) {
                debug!(item = %row.item_name, "ignoring repeated custom item");
                continue;
            }
            customs.push(Item::custom(
                row.item_name.clone(),
                row.description.clone(),
                row.notes.clone(),
            ));
        } else {
            debug!(
                item = %row.item_name,
                category = %category_id,
                "dropping item no longer in the catalog"
            );
            dropped += 1;
            continue;
        }

        if row.selected {
            merged.selection.select(&category_id, &row.item_name);
        }
    }

    if dropped > 0 {
        debug!(dropped, "reconciliation dropped rows");
    }

    merged
}

/// Finds the canonical category a row belongs to.
///
/// Tries the category ID, then the category name, then (for per-category
/// workbooks) the sheet the row was read from.
fn resolve_category(canonical: &ConfigModel, row: &RawRow, per_category: bool) -> Option<String> {
    let categories = &canonical.categories;

    row.category_id
        .as_deref()
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .or_else(|| {
            row.category_name
                .as_deref()
                .and_then(|name| categories.iter().find(|c| c.name == name))
        })
        .or_else(|| {
            per_category
                .then(|| categories.iter().find(|c| sheet_name_for(&c.name) == row.sheet))
                .flatten()
        })
        .map(|c| c.id.clone())
}
