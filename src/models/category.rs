//! Categories grouping selectable items.

use crate::models::Item;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum display name length for a category.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Named grouping of selectable items.
///
/// Categories are the sections of a feature domain (e.g., "Data Integrity
/// Rules", "Click & Tap"). The order of `items` is replayed verbatim on export.
///
/// # Validation
///
/// - ID must be unique within a ConfigModel
/// - ID format: kebab-case (lowercase, hyphens only, no spaces)
/// - Name must be non-empty, max 100 characters
/// - Item names must be non-empty and unique within the category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier in kebab-case (e.g., "data-integrity")
    pub id: String,
    /// Display name (e.g., "Data Integrity Rules")
    pub name: String,
    /// Catalog items in display order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    /// Creates a new Category with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqbook::models::{Category, Item};
    ///
    /// let category = Category::new(
    ///     "hover",
    ///     "Hover",
    ///     vec![Item::simple("Tooltip on hover")],
    /// ).unwrap();
    /// assert_eq!(category.item_names().count(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty or not in kebab-case format
    /// - Name is empty or exceeds 100 characters
    /// - An item name is empty or repeated
    pub fn new(id: impl Into<String>, name: impl Into<String>, items: Vec<Item>) -> Result<Self> {
        let category = Self {
            id: id.into(),
            name: name.into(),
            items,
        };
        category.validate()?;
        Ok(category)
    }

    /// Validates the whole category.
    pub fn validate(&self) -> Result<()> {
        Self::validate_id(&self.id)?;
        Self::validate_name(&self.name)?;

        let mut seen = HashSet::new();
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.name()) {
                anyhow::bail!(
                    "Item '{}' appears more than once in category '{}'",
                    item.name(),
                    self.id
                );
            }
        }

        Ok(())
    }

    /// Validates category ID format (kebab-case).
    fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("Category ID cannot be empty");
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Category ID '{id}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if id.starts_with('-') || id.ends_with('-') {
            anyhow::bail!("Category ID '{id}' cannot start or end with a hyphen");
        }

        Ok(())
    }

    /// Validates category name.
    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Category name cannot be empty");
        }

        let len = name.chars().count();
        if len > MAX_CATEGORY_NAME_LEN {
            anyhow::bail!(
                "Category name '{}' exceeds maximum length of {} characters (got {})",
                name,
                MAX_CATEGORY_NAME_LEN,
                len
            );
        }

        Ok(())
    }

    /// Iterates over the resolved display names of the catalog items.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::name)
    }

    /// Returns true if an item with this display name exists.
    pub fn contains_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// Looks up an item by display name for mutation.
    pub fn item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name() == name)
    }
}
