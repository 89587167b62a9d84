//! Workbook round-trip and reconciliation properties.

use reqbook::catalog::create_default;
use reqbook::models::{Category, ConfigModel, Domain, Item, ScopeConfig};
use reqbook::reconcile::merge;
use reqbook::services::{ImportService, LogNotifier};
use reqbook::workbook::{sheet_name_for, ExportError, ImportError, SpreadsheetCodec};

mod fixtures;
use fixtures::*;

fn round_trip(model: &ConfigModel, canonical: &ConfigModel) -> ConfigModel {
    let codec = SpreadsheetCodec::new(model.domain);
    let bytes = codec.encode(model, "Test Project").expect("encode");
    let raw = codec.decode(&bytes).expect("decode");
    merge(&raw, canonical)
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_round_trip_identity_every_domain() {
    for domain in Domain::ALL {
        let canonical = create_default(domain);
        let mut model = create_default(domain);
        for category in &canonical.categories {
            let first = category.items[0].name();
            model.select(&category.id, first).unwrap();
        }

        assert_eq!(round_trip(&model, &canonical), model, "domain {domain}");
    }
}

#[test]
fn test_round_trip_keeps_notes_custom_items_and_scope() {
    let canonical = create_default(Domain::ActionsInteractions);
    let model = actions_model_with_selection();

    let merged = round_trip(&model, &canonical);

    assert_eq!(merged, model);
    assert_eq!(merged.scope, ScopeConfig::targets(["auth", "billing"]));
    let hover = merged.category("hover").unwrap();
    let tooltip = hover.items.iter().find(|i| i.name() == "Tooltip on hover").unwrap();
    assert_eq!(tooltip.user_value(), Some("Delay 300ms"));
}

#[test]
fn test_round_trip_identity_with_padded_and_blank_values() {
    let canonical = create_default(Domain::ActionsInteractions);
    let mut model = create_default(Domain::ActionsInteractions);
    model.add_custom_item("hover", "Glow ", Some("  ".into())).unwrap();
    model.select("hover", "Glow").unwrap();
    model
        .set_user_value("hover", "Tooltip on hover", Some(" Delay 300ms ".into()))
        .unwrap();
    model
        .set_user_value("keyboard", "Escape to close", Some(String::new()))
        .unwrap();

    let merged = round_trip(&model, &canonical);

    assert_eq!(merged, model);
    assert_eq!(merged.custom_items("hover")[0].name(), "Glow");
    assert!(merged.selection.is_selected("hover", "Glow"));
}

#[test]
fn test_round_trip_unselected_default_is_canonical() {
    let canonical = create_default(Domain::DesignGuidelines);
    assert_eq!(round_trip(&canonical, &canonical), canonical);
}

// ============================================================================
// Idempotent Merge
// ============================================================================

#[test]
fn test_merge_is_idempotent_on_stale_workbook() {
    let mut rows = actions_header_rows();
    rows.extend([
        vec!["hover", "Hover", "Tooltip on hover", "yes", "keep me", "", "No"],
        vec!["", "", "Retired hover thing", "yes", "", "", "No"],
        vec!["", "", "My hover", "x", "custom note", "custom desc", "Yes"],
        vec!["", "", "My hover", "no", "duplicate", "", "Yes"],
        vec!["legacy", "Legacy Category", "Old action", "yes", "", "", "No"],
        vec!["", "Keyboard Shortcuts", "Escape to close", "TRUE", "", "", ""],
    ]);
    let bytes = build_workbook(&[("Actions & Interactions", rows)]);

    let canonical = create_default(Domain::ActionsInteractions);
    let codec = SpreadsheetCodec::new(Domain::ActionsInteractions);
    let once = merge(&codec.decode(&bytes).unwrap(), &canonical);
    let twice = round_trip(&once, &canonical);

    assert_eq!(once, twice);
    assert!(once.selection.is_selected("hover", "Tooltip on hover"));
    assert!(once.selection.is_selected("hover", "My hover"));
    assert!(once.selection.is_selected("keyboard", "Escape to close"));
    assert!(!once.selection.is_selected("hover", "Retired hover thing"));
    assert!(once.category("legacy").is_none());
    assert_eq!(once.custom_items("hover").len(), 1);
    assert_eq!(once.custom_items("hover")[0].user_value(), Some("custom note"));
}

// ============================================================================
// Tolerant Decode
// ============================================================================

#[test]
fn test_decode_tolerates_extra_column_blank_row_and_unknown_flag() {
    let mut rows = actions_header_rows();
    rows[1].push("Reviewer");
    rows.extend([
        vec!["hover", "Hover", "Tooltip on hover", " Yes ", "", "", "No", "alice"],
        vec![],
        vec!["", "", "Hover preview", "maybe", "", "", "No", "bob"],
        vec!["", "", "", "yes"],
        vec!["", "", "Hover reveal actions", "X"],
    ]);
    let bytes = build_workbook(&[("Actions & Interactions", rows)]);

    let raw = SpreadsheetCodec::new(Domain::ActionsInteractions)
        .decode(&bytes)
        .expect("tolerant decode");

    assert_eq!(raw.rows.len(), 3);
    assert!(raw.rows.iter().all(|r| r.category_id.as_deref() == Some("hover")));
    assert!(raw.rows[0].selected);
    assert!(!raw.rows[1].selected);
    assert!(raw.rows[2].selected);
    assert!(raw.scope.is_none());

    let merged = merge(&raw, &create_default(Domain::ActionsInteractions));
    let selected: Vec<_> = merged.selection.selected("hover").collect();
    assert_eq!(selected, vec!["Hover reveal actions", "Tooltip on hover"]);
}

// ============================================================================
// Custom Item Survival
// ============================================================================

#[test]
fn test_custom_item_survives_round_trip_in_every_domain() {
    for domain in Domain::ALL {
        let canonical = create_default(domain);
        let category_id = canonical.categories[0].id.clone();
        let mut model = create_default(domain);
        model
            .add_custom_item(&category_id, "Team specific item", None)
            .unwrap();
        model.select(&category_id, "Team specific item").unwrap();

        let merged = round_trip(&model, &canonical);

        let custom = merged.custom_items(&category_id);
        assert_eq!(custom.len(), 1, "domain {domain}");
        assert!(custom[0].is_custom());
        assert!(merged.selection.is_selected(&category_id, "Team specific item"));
    }
}

// ============================================================================
// Malformed Workbooks
// ============================================================================

#[test]
fn test_decode_missing_primary_sheet_fails() {
    let bytes = build_workbook(&[
        ("Other", vec![vec!["nothing here"]]),
        ("Configuration", vec![vec!["Setting", "Value"]]),
    ]);

    let err = SpreadsheetCodec::new(Domain::AnimationEffects)
        .decode(&bytes)
        .unwrap_err();

    assert!(matches!(err, ImportError::MissingSheet(ref s) if s == "Animation Effects"));
    assert!(err.reason().contains("Animation Effects"));
}

#[test]
fn test_decode_without_configuration_sheet_uses_default_scope() {
    let mut rows = actions_header_rows();
    rows.push(vec!["hover", "Hover", "Tooltip on hover", "yes"]);
    let bytes = build_workbook(&[("Actions & Interactions", rows)]);

    let mut canonical = create_default(Domain::ActionsInteractions);
    canonical.scope = ScopeConfig::default();
    let raw = SpreadsheetCodec::new(Domain::ActionsInteractions)
        .decode(&bytes)
        .unwrap();
    let merged = merge(&raw, &canonical);

    assert!(raw.scope.is_none());
    assert_eq!(merged.scope, ScopeConfig::default());
    assert!(merged.selection.is_selected("hover", "Tooltip on hover"));
}

#[test]
fn test_decode_business_rules_without_category_sheets_fails() {
    let bytes = build_workbook(&[("Configuration", vec![vec!["Setting", "Value"]])]);

    let err = SpreadsheetCodec::new(Domain::BusinessRules)
        .decode(&bytes)
        .unwrap_err();

    assert!(matches!(err, ImportError::NoCategorySheets));
}

#[test]
fn test_decode_other_domain_workbook_as_business_rules_fails() {
    let bytes = SpreadsheetCodec::new(Domain::ActionsInteractions)
        .encode(&actions_model_with_selection(), "Wrong file")
        .unwrap();

    let err = SpreadsheetCodec::new(Domain::BusinessRules)
        .decode(&bytes)
        .unwrap_err();

    assert!(matches!(err, ImportError::NoCategorySheets));
}

#[test]
fn test_import_of_other_domain_workbook_keeps_live_model() {
    let bytes = SpreadsheetCodec::new(Domain::ActionsInteractions)
        .encode(&actions_model_with_selection(), "Wrong file")
        .unwrap();
    let mut live = business_rules_model_with_rule();
    let before = live.clone();

    let result = ImportService::new(&LogNotifier).import_into(&mut live, &bytes);

    assert!(result.is_err());
    assert_eq!(live, before);
    assert!(live.selection.is_selected("data-integrity", "uniqueness"));
}

#[test]
fn test_decode_business_rules_skips_foreign_sheets() {
    let codec = SpreadsheetCodec::new(Domain::BusinessRules);
    let mut sheets = vec![(
        "Scratch",
        vec![vec!["Notes to self"], vec!["Idea", "Owner"], vec!["", "", "uniqueness", "yes"]],
    )];
    let rule_rows = vec![
        vec!["Business Rules - Mixed"],
        vec!["Category ID", "Category Name", "Rule", "Selected", "User Rule"],
        vec!["data-integrity", "Data Integrity Rules", "uniqueness", "yes", "Unique emails"],
    ];
    sheets.push(("Data Integrity Rules", rule_rows));
    let bytes = build_workbook(&sheets);

    let raw = codec.decode(&bytes).unwrap();
    let merged = merge(&raw, &create_default(Domain::BusinessRules));

    assert!(raw.rows.iter().all(|r| r.sheet == "Data Integrity Rules"));
    assert_eq!(merged.selection.len(), 1);
    assert!(merged.selection.is_selected("data-integrity", "uniqueness"));
}

#[test]
fn test_decode_garbage_bytes_fails() {
    let err = SpreadsheetCodec::new(Domain::DesignGuidelines)
        .decode(b"definitely not a zip archive")
        .unwrap_err();

    assert!(matches!(err, ImportError::Unreadable(_)));
}

// ============================================================================
// Business Rules Scenarios
// ============================================================================

#[test]
fn test_user_rule_and_scope_survive_reimport() {
    let canonical = create_default(Domain::BusinessRules);
    let model = business_rules_model_with_rule();

    let merged = round_trip(&model, &canonical);

    let category = merged.category("data-integrity").expect("data-integrity");
    let uniqueness = category
        .items
        .iter()
        .find(|i| i.name() == "uniqueness")
        .expect("uniqueness");
    assert_eq!(uniqueness.user_value(), Some("Emails must be globally unique"));
    assert!(merged.scope.apply_to_all);
    assert!(merged.selection.is_selected("data-integrity", "uniqueness"));
}

#[test]
fn test_business_rules_writes_one_sheet_per_category() {
    let model = create_default(Domain::BusinessRules);
    let codec = SpreadsheetCodec::new(Domain::BusinessRules);
    let raw = codec.decode(&codec.encode(&model, "Sheets").unwrap()).unwrap();

    let mut expected: Vec<String> = model
        .categories
        .iter()
        .map(|c| sheet_name_for(&c.name))
        .collect();
    expected.push("Configuration".to_string());
    assert_eq!(raw.sheet_names, expected);
    assert_eq!(raw.project.as_deref(), Some("Sheets"));
}

#[test]
fn test_long_category_name_uses_truncated_sheet() {
    let canonical = long_category_canonical();
    let mut model = canonical.clone();
    model.select("compliance", "audit-trail").unwrap();

    let codec = SpreadsheetCodec::new(Domain::BusinessRules);
    let raw = codec.decode(&codec.encode(&model, "Long").unwrap()).unwrap();

    assert!(raw
        .sheet_names
        .contains(&"Compliance & Regulatory Rule...".to_string()));
    assert_eq!(merge(&raw, &canonical), model);
}

#[test]
fn test_rows_without_category_columns_resolve_by_truncated_sheet_name() {
    let rows = vec![
        vec!["Business Rules - Manual"],
        vec!["Category ID", "Category Name", "Rule", "Selected", "User Rule"],
        vec!["", "", "gdpr", "yes", "EU residents only"],
    ];
    let bytes = build_workbook(&[("Compliance & Regulatory Rule...", rows)]);

    let canonical = long_category_canonical();
    let raw = SpreadsheetCodec::new(Domain::BusinessRules)
        .decode(&bytes)
        .unwrap();
    let merged = merge(&raw, &canonical);

    assert!(merged.selection.is_selected("compliance", "gdpr"));
    let gdpr = &merged.category("compliance").unwrap().items[0];
    assert_eq!(gdpr.user_value(), Some("EU residents only"));
}

// ============================================================================
// Export Modes and Failures
// ============================================================================

#[test]
fn test_template_has_no_selections_or_notes() {
    let model = actions_model_with_selection();
    let codec = SpreadsheetCodec::new(Domain::ActionsInteractions);
    let raw = codec
        .decode(&codec.encode_template(&model, "Blank").unwrap())
        .unwrap();

    assert!(!raw.rows.is_empty());
    assert!(raw.rows.iter().all(|r| !r.selected && r.notes.is_none()));
    assert!(raw.selection().is_empty());
}

#[test]
fn test_colliding_sheet_names_fail_export() {
    let items = vec![Item::described("rule", "A rule")];
    let model = ConfigModel::new(
        Domain::BusinessRules,
        vec![
            Category::new("access-slash", "Access/Control", items.clone()).unwrap(),
            Category::new("access-dash", "Access-Control", items).unwrap(),
        ],
    );

    let err = SpreadsheetCodec::new(Domain::BusinessRules)
        .encode(&model, "Dup")
        .unwrap_err();

    assert!(matches!(
        err,
        ExportError::DuplicateSheet { ref category, ref sheet }
            if category == "Access-Control" && sheet == "Access-Control"
    ));
}

#[test]
fn test_category_named_configuration_fails_export() {
    let model = ConfigModel::new(
        Domain::BusinessRules,
        vec![Category::new("config", "configuration", vec![Item::simple("x")]).unwrap()],
    );

    let result = SpreadsheetCodec::new(Domain::BusinessRules).encode(&model, "Dup");

    assert!(matches!(result, Err(ExportError::DuplicateSheet { .. })));
}
