//! Workbook writer.

use std::collections::HashSet;

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use tracing::debug;

use super::error::ExportError;
use super::format::{
    columns, settings, sheet_name_for, yes_no, SheetLayout, WorkbookFormat, CONFIG_SHEET,
    HEADER_ROWS,
};
use crate::models::{Category, ConfigModel};

/// What the selection and notes columns carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Yes/No flags and user notes from the model
    Selections,
    /// Blank flags and notes, for filling in by hand
    Template,
}

/// Cell formats shared by all sheets.
struct Styles {
    title: Format,
    header: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Format::new().set_bold().set_font_size(14),
            header: Format::new().set_bold().set_background_color(Color::RGB(0x00D9_E1F2)),
        }
    }
}

pub(super) fn encode(
    format: &WorkbookFormat,
    model: &ConfigModel,
    label: &str,
    mode: ExportMode,
) -> Result<Vec<u8>, ExportError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();

    match format.layout {
        SheetLayout::Combined(sheet_name) => {
            let mut sheet = data_sheet(format, sheet_name, label, &styles)?;
            let mut row = HEADER_ROWS;
            for category in &model.categories {
                row = write_block(&mut sheet, row, model, category, mode)?;
            }
            workbook.push_worksheet(sheet);
        }
        SheetLayout::PerCategory => {
            let mut used = HashSet::from([CONFIG_SHEET.to_lowercase()]);
            for category in &model.categories {
                let sheet_name = sheet_name_for(&category.name);
                if !used.insert(sheet_name.to_lowercase()) {
                    return Err(ExportError::DuplicateSheet {
                        category: category.name.clone(),
                        sheet: sheet_name,
                    });
                }
                let mut sheet = data_sheet(format, &sheet_name, label, &styles)?;
                write_block(&mut sheet, HEADER_ROWS, model, category, mode)?;
                workbook.push_worksheet(sheet);
            }
        }
    }

    workbook.push_worksheet(configuration_sheet(format, model, label, &styles)?);

    let bytes = workbook.save_to_buffer()?;
    debug!(
        domain = %format.domain,
        categories = model.categories.len(),
        bytes = bytes.len(),
        "encoded workbook"
    );
    Ok(bytes)
}

/// Creates a data sheet with its title and header rows.
fn data_sheet(
    format: &WorkbookFormat,
    name: &str,
    label: &str,
    styles: &Styles,
) -> Result<Worksheet, ExportError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;

    let title = if label.trim().is_empty() {
        format.domain.label().to_string()
    } else {
        format!("{} - {}", format.domain.label(), label.trim())
    };
    sheet.write_string_with_format(0, 0, title, &styles.title)?;

    for (col, header) in (0..).zip(format.headers()) {
        sheet.write_string_with_format(HEADER_ROWS - 1, col, header, &styles.header)?;
    }

    sheet.set_column_width(columns::CATEGORY_ID, 20)?;
    sheet.set_column_width(columns::CATEGORY_NAME, 28)?;
    sheet.set_column_width(columns::ITEM, 32)?;
    sheet.set_column_width(columns::SELECTED, 10)?;
    sheet.set_column_width(columns::NOTES, 48)?;
    sheet.set_column_width(columns::DESCRIPTION, 48)?;
    sheet.set_column_width(columns::IS_CUSTOM, 10)?;
    sheet.set_freeze_panes(HEADER_ROWS, 0)?;

    Ok(sheet)
}

/// Writes one category block starting at `row` and returns the next free row.
///
/// Only the block's first row carries the category ID and name.
fn write_block(
    sheet: &mut Worksheet,
    mut row: u32,
    model: &ConfigModel,
    category: &Category,
    mode: ExportMode,
) -> Result<u32, ExportError> {
    for (index, item) in model.items_for(category).enumerate() {
        if index == 0 {
            sheet.write_string(row, columns::CATEGORY_ID, &category.id)?;
            sheet.write_string(row, columns::CATEGORY_NAME, &category.name)?;
        }
        sheet.write_string(row, columns::ITEM, item.name())?;

        if mode == ExportMode::Selections {
            let selected = model.selection.is_selected(&category.id, item.name());
            sheet.write_string(row, columns::SELECTED, yes_no(selected))?;
            write_optional(sheet, row, columns::NOTES, item.user_value())?;
        }

        write_optional(sheet, row, columns::DESCRIPTION, item.description())?;
        sheet.write_string(row, columns::IS_CUSTOM, yes_no(item.is_custom()))?;
        row += 1;
    }
    Ok(row)
}

fn write_optional(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&str>,
) -> Result<(), ExportError> {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        sheet.write_string(row, col, value)?;
    }
    Ok(())
}

fn configuration_sheet(
    format: &WorkbookFormat,
    model: &ConfigModel,
    label: &str,
    styles: &Styles,
) -> Result<Worksheet, ExportError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(CONFIG_SHEET)?;
    sheet.write_string_with_format(0, 0, "Setting", &styles.header)?;
    sheet.write_string_with_format(0, 1, "Value", &styles.header)?;

    let targets = model.scope.specific_targets.join(", ");
    let exported_at = chrono::Local::now().to_rfc3339();
    let rows = [
        (settings::APPLY_TO_ALL, yes_no(model.scope.apply_to_all)),
        (settings::SPECIFIC_TARGETS, targets.as_str()),
        (settings::PROJECT, label.trim()),
        (settings::DOMAIN, format.domain.label()),
        (settings::EXPORTED_AT, exported_at.as_str()),
    ];

    for (row, (setting, value)) in (1..).zip(rows) {
        sheet.write_string(row, 0, setting)?;
        write_optional(&mut sheet, row, 1, Some(value))?;
    }

    sheet.set_column_width(0, 26)?;
    sheet.set_column_width(1, 48)?;

    Ok(sheet)
}
