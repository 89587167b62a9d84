//! Workbook reader.

use std::collections::HashSet;
use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx, XlsxError};
use tracing::{debug, warn};

use super::error::ImportError;
use super::format::{
    columns, is_truthy, settings, sheet_name_for, SheetLayout, WorkbookFormat, CONFIG_SHEET,
    HEADER_ROWS,
};
use super::raw::{RawDecodedModel, RawRow};
use crate::catalog::create_default;
use crate::models::ScopeConfig;

/// Category context carried from a block's first row to the rows below it.
#[derive(Debug, Default, Clone)]
struct BlockContext {
    id: Option<String>,
    name: Option<String>,
}

pub(super) fn decode(format: &WorkbookFormat, bytes: &[u8]) -> Result<RawDecodedModel, ImportError> {
    let mut workbook: Xlsx<Cursor<&[u8]>> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: XlsxError| ImportError::Unreadable(e.to_string()))?;
    let sheet_names = workbook.sheet_names();

    let mut data_sheets: Vec<(String, Range<Data>)> = Vec::new();
    match format.layout {
        SheetLayout::Combined(primary) => {
            if !sheet_names.iter().any(|s| s == primary) {
                return Err(ImportError::MissingSheet(primary.to_string()));
            }
            let range = workbook
                .worksheet_range(primary)
                .map_err(|e| ImportError::Unreadable(format!("sheet '{primary}': {e}")))?;
            data_sheets.push((primary.to_string(), range));
        }
        SheetLayout::PerCategory => {
            let catalog_sheets: HashSet<String> = create_default(format.domain)
                .categories
                .iter()
                .map(|c| sheet_name_for(&c.name))
                .collect();

            for sheet in sheet_names.iter().filter(|s| s.as_str() != CONFIG_SHEET) {
                let known = catalog_sheets.contains(sheet);
                let range = match workbook.worksheet_range(sheet) {
                    Ok(range) => range,
                    Err(e) if known => {
                        return Err(ImportError::Unreadable(format!("sheet '{sheet}': {e}")));
                    }
                    Err(e) => {
                        warn!("Skipping unreadable sheet '{sheet}': {e}");
                        continue;
                    }
                };
                if known || has_domain_headers(format, &range) {
                    data_sheets.push((sheet.clone(), range));
                } else {
                    debug!(sheet = %sheet, "skipping sheet that is not a category sheet");
                }
            }

            if data_sheets.is_empty() {
                return Err(ImportError::NoCategorySheets);
            }
        }
    }

    let mut raw = RawDecodedModel::default();

    for (sheet, range) in &data_sheets {
        read_data_rows(range, sheet, &mut raw.rows);
    }

    if sheet_names.iter().any(|s| s == CONFIG_SHEET) {
        match workbook.worksheet_range(CONFIG_SHEET) {
            Ok(range) => read_configuration(&range, &mut raw),
            Err(e) => warn!("Ignoring unreadable {CONFIG_SHEET} sheet: {e}"),
        }
    } else {
        debug!("No {CONFIG_SHEET} sheet, scope falls back to defaults");
    }

    debug!(
        domain = %format.domain,
        sheets = data_sheets.len(),
        rows = raw.rows.len(),
        "decoded workbook"
    );
    raw.sheet_names = sheet_names;
    Ok(raw)
}

/// Reads the trimmed text of a cell at an absolute position.
fn cell_text(range: &Range<Data>, row: u32, col: u16) -> Option<String> {
    let text = range.get_value((row, u32::from(col)))?.to_string();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Returns true if the header row names this domain's item and notes columns.
///
/// Lets a category sheet renamed by hand, or one holding a category the
/// built-in catalog does not know, still count as a data sheet.
fn has_domain_headers(format: &WorkbookFormat, range: &Range<Data>) -> bool {
    let header_row = HEADER_ROWS - 1;
    cell_text(range, header_row, columns::ITEM).as_deref() == Some(format.item_header)
        && cell_text(range, header_row, columns::NOTES).as_deref() == Some(format.notes_header)
}

/// Reads data rows below the header rows of one sheet.
///
/// Columns beyond the known ones are ignored. A non-blank category ID opens a
/// new block; a blank ID with a non-blank category name opens a block keyed by
/// name only. Rows without an item name are skipped.
fn read_data_rows(range: &Range<Data>, sheet: &str, rows: &mut Vec<RawRow>) {
    let Some((last_row, _)) = range.end() else {
        return;
    };

    let mut block = BlockContext::default();

    for row in HEADER_ROWS..=last_row {
        let id = cell_text(range, row, columns::CATEGORY_ID);
        let name = cell_text(range, row, columns::CATEGORY_NAME);
        if id.is_some() || name.is_some() {
            block = BlockContext { id, name };
        }

        let Some(item_name) = cell_text(range, row, columns::ITEM) else {
            continue;
        };

        rows.push(RawRow {
            sheet: sheet.to_string(),
            category_id: block.id.clone(),
            category_name: block.name.clone(),
            item_name,
            selected: cell_text(range, row, columns::SELECTED).is_some_and(|v| is_truthy(&v)),
            notes: cell_text(range, row, columns::NOTES),
            description: cell_text(range, row, columns::DESCRIPTION),
            is_custom: cell_text(range, row, columns::IS_CUSTOM).is_some_and(|v| is_truthy(&v)),
        });
    }
}

/// Scans the Configuration sheet for recognized setting labels.
fn read_configuration(range: &Range<Data>, raw: &mut RawDecodedModel) {
    let (Some((first_row, _)), Some((last_row, _))) = (range.start(), range.end()) else {
        return;
    };

    let mut scope = ScopeConfig::default();
    let mut recognized = false;

    for row in first_row..=last_row {
        let Some(setting) = cell_text(range, row, 0) else {
            continue;
        };
        let value = cell_text(range, row, 1);

        match setting.as_str() {
            settings::APPLY_TO_ALL => {
                recognized = true;
                if let Some(value) = value {
                    scope.apply_to_all = is_truthy(&value);
                }
            }
            settings::SPECIFIC_TARGETS => {
                recognized = true;
                scope.specific_targets = value.as_deref().map(parse_targets).unwrap_or_default();
            }
            settings::PROJECT => raw.project = value,
            _ => {}
        }
    }

    if recognized {
        raw.scope = Some(scope);
    }
}

/// Splits comma-separated target IDs, dropping blanks.
fn parse_targets(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
