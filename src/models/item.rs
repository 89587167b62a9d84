//! Selectable items inside a category.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A selectable unit inside a category.
///
/// Two shapes are accepted by the JSON representation: a bare label, or an
/// annotated object carrying a description, a user-supplied value and scope
/// hints. Both resolve to a single display name through [`Item::name`], which is
/// the join key between the catalog and a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// Bare label (e.g., "Double click")
    Simple(String),
    /// Label with annotations
    Annotated(AnnotatedItem),
}

/// Annotated form of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedItem {
    /// Display name, unique within its category
    pub name: String,
    /// Catalog description shown next to the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text annotation entered by the user (e.g., a concrete rule)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_value: Option<String>,
    /// True for items the user added on top of the catalog
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_custom: bool,
    /// Target IDs this item is restricted to (empty = everywhere)
    ///
    /// Catalog-only: workbooks do not record it, so custom items never carry
    /// one (see [`crate::models::ConfigModel::validate`]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applicable_scope: Vec<String>,
}

impl Item {
    /// Creates a bare-label item.
    pub fn simple(name: impl Into<String>) -> Self {
        Self::Simple(name.into())
    }

    /// Creates an annotated catalog item with a description.
    pub fn described(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Annotated(AnnotatedItem {
            name: name.into(),
            description: Some(description.into()),
            ..AnnotatedItem::default()
        })
    }

    /// Creates a user-defined item.
    pub fn custom(
        name: impl Into<String>,
        description: Option<String>,
        user_value: Option<String>,
    ) -> Self {
        Self::Annotated(AnnotatedItem {
            name: name.into(),
            description,
            user_value,
            is_custom: true,
            applicable_scope: Vec::new(),
        })
    }

    /// Returns the display name used as the join key.
    pub fn name(&self) -> &str {
        match self {
            Self::Simple(name) => name,
            Self::Annotated(item) => &item.name,
        }
    }

    /// Returns the catalog description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::Annotated(item) => item.description.as_deref(),
        }
    }

    /// Returns the catalog scope restriction of an annotated item.
    pub fn applicable_scope(&self) -> &[String] {
        match self {
            Self::Simple(_) => &[],
            Self::Annotated(item) => &item.applicable_scope,
        }
    }

    /// Returns the user annotation, if any.
    pub fn user_value(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::Annotated(item) => item.user_value.as_deref(),
        }
    }

    /// Returns true if the user added this item.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Annotated(item) if item.is_custom)
    }

    /// Sets or clears the user annotation.
    ///
    /// The value is trimmed and a blank value clears the annotation. A simple
    /// item is upgraded to the annotated form when a value is set. Clearing the
    /// value of a simple item is a no-op.
    pub fn set_user_value(&mut self, value: Option<String>) {
        let value = normalize_text(value);
        match self {
            Self::Annotated(item) => item.user_value = value,
            Self::Simple(name) => {
                if value.is_some() {
                    *self = Self::Annotated(AnnotatedItem {
                        name: std::mem::take(name),
                        user_value: value,
                        ..AnnotatedItem::default()
                    });
                }
            }
        }
    }

    /// Validates that the item resolves to a non-empty name.
    pub fn validate(&self) -> Result<()> {
        if self.name().trim().is_empty() {
            anyhow::bail!("Item name cannot be empty");
        }
        Ok(())
    }
}

/// Trims free text and maps blank text to `None`.
///
/// Workbook cells are read back trimmed and empty cells as absent, so values
/// stored in a model take the same shape.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Self::Simple(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_resolves_for_both_shapes() {
        assert_eq!(Item::simple("Long press").name(), "Long press");
        assert_eq!(Item::described("uniqueness", "No duplicates").name(), "uniqueness");
    }

    #[test]
    fn test_set_user_value_upgrades_simple_item() {
        let mut item = Item::simple("Swipe to delete");
        item.set_user_value(Some("Only on mobile".to_string()));

        assert_eq!(item.name(), "Swipe to delete");
        assert_eq!(item.user_value(), Some("Only on mobile"));
        assert!(!item.is_custom());
    }

    #[test]
    fn test_clear_user_value_keeps_simple_item() {
        let mut item = Item::simple("Hover preview");
        item.set_user_value(None);
        assert_eq!(item, Item::simple("Hover preview"));
    }

    #[test]
    fn test_set_user_value_trims_and_clears_blank() {
        let mut item = Item::described("uniqueness", "No duplicates");
        item.set_user_value(Some("  Emails must be unique \n".to_string()));
        assert_eq!(item.user_value(), Some("Emails must be unique"));

        item.set_user_value(Some("   ".to_string()));
        assert_eq!(item.user_value(), None);

        let mut simple = Item::simple("Tooltip");
        simple.set_user_value(Some(String::new()));
        assert_eq!(simple, Item::simple("Tooltip"));
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(Item::simple("").validate().is_err());
        assert!(Item::simple("   ").validate().is_err());
        assert!(Item::custom("", None, None).validate().is_err());
        assert!(Item::simple("Tooltip").validate().is_ok());
    }

    #[test]
    fn test_json_shapes() {
        let items: Vec<Item> = serde_json::from_str(
            r#"["Double click", {"name": "uniqueness", "userValue": "Emails", "isCustom": true}]"#,
        )
        .unwrap();

        assert_eq!(items[0], Item::simple("Double click"));
        assert_eq!(items[1].name(), "uniqueness");
        assert_eq!(items[1].user_value(), Some("Emails"));
        assert!(items[1].is_custom());

        let json = serde_json::to_string(&Item::described("a", "b")).unwrap();
        assert_eq!(json, r#"{"name":"a","description":"b"}"#);
    }
}
