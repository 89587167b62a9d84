//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use reqbook::catalog::create_default;
use reqbook::models::{Category, ConfigModel, Domain, Item, ScopeConfig};
use reqbook::services::ModelFileService;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One sheet of a hand-built workbook: name and cell rows (blank cells are skipped).
pub type SheetSpec<'a> = (&'a str, Vec<Vec<&'a str>>);

/// Actions model with a few selections, a note and one selected custom item.
pub fn actions_model_with_selection() -> ConfigModel {
    let mut model = create_default(Domain::ActionsInteractions);
    model.select("hover", "Tooltip on hover").unwrap();
    model.select("keyboard", "Escape to close").unwrap();
    model.select("media", "Carousel").unwrap();
    model
        .set_user_value("hover", "Tooltip on hover", Some("Delay 300ms".to_string()))
        .unwrap();
    model
        .add_custom_item("hover", "Hover card", Some("Shows profile summary".to_string()))
        .unwrap();
    model.select("hover", "Hover card").unwrap();
    model.scope = ScopeConfig::targets(["auth", "billing"]);
    model
}

/// Business Rules model with the uniqueness rule annotated and selected.
pub fn business_rules_model_with_rule() -> ConfigModel {
    let mut model = create_default(Domain::BusinessRules);
    model
        .set_user_value(
            "data-integrity",
            "uniqueness",
            Some("Emails must be globally unique".to_string()),
        )
        .unwrap();
    model.select("data-integrity", "uniqueness").unwrap();
    model.scope = ScopeConfig::default();
    model
}

/// Single-category Business Rules catalog whose name exceeds the sheet name limit.
pub fn long_category_canonical() -> ConfigModel {
    let category = Category::new(
        "compliance",
        "Compliance & Regulatory Rules Extended Name Example",
        vec![
            Item::described("gdpr", "Personal data handling"),
            Item::described("audit-trail", "Changes are logged"),
        ],
    )
    .unwrap();
    ConfigModel::new(Domain::BusinessRules, vec![category])
}

/// Builds an `.xlsx` workbook from plain string cells.
pub fn build_workbook(sheets: &[SheetSpec<'_>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in (0u32..).zip(rows) {
            for (c, value) in (0u16..).zip(row) {
                if !value.is_empty() {
                    sheet.write_string(r, c, *value).unwrap();
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Standard title and header rows of an Actions data sheet.
pub fn actions_header_rows<'a>() -> Vec<Vec<&'a str>> {
    vec![
        vec!["Actions & Interactions - Test"],
        vec![
            "Category ID",
            "Category Name",
            "Action",
            "Selected",
            "Notes",
            "Description",
            "Is Custom",
        ],
    ]
}

/// Creates a temporary directory, panicking on failure.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes a model JSON file into `dir`.
pub fn write_model_file(dir: &Path, name: &str, model: &ConfigModel) -> PathBuf {
    let path = dir.join(name);
    ModelFileService::save_model(model, &path).expect("Failed to write model file");
    path
}
