//! Root configuration aggregate.

use crate::models::item::normalize_text;
use crate::models::{Category, Domain, Item, ScopeConfig, SelectionState};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Categorized, selectable configuration for one feature domain.
///
/// A fresh model comes from [`crate::catalog::create_default`]. The owner
/// mutates it in place; the workbook codec and the reconciler only read it and
/// hand back new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigModel {
    /// Feature domain this model belongs to
    pub domain: Domain,
    /// Catalog categories in display order
    pub categories: Vec<Category>,
    /// Selected item names per category ID
    #[serde(default)]
    pub selection: SelectionState,
    /// Where the configuration applies
    #[serde(default)]
    pub scope: ScopeConfig,
    /// User-defined items per category ID, appended after catalog items
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_category_items: BTreeMap<String, Vec<Item>>,
}

impl ConfigModel {
    /// Creates a model with no selection and default scope.
    pub fn new(domain: Domain, categories: Vec<Category>) -> Self {
        Self {
            domain,
            categories,
            selection: SelectionState::new(),
            scope: ScopeConfig::default(),
            custom_category_items: BTreeMap::new(),
        }
    }

    /// Looks up a category by ID.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks up a category by ID for mutation.
    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Custom items recorded for a category.
    pub fn custom_items(&self, category_id: &str) -> &[Item] {
        self.custom_category_items
            .get(category_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Catalog items followed by custom items of a category.
    pub fn items_for<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Item> {
        category.items.iter().chain(self.custom_items(&category.id))
    }

    /// Returns true if `name` is a catalog or custom item of the category.
    pub fn has_item(&self, category_id: &str, name: &str) -> bool {
        self.category(category_id).is_some_and(|c| c.contains_item(name))
            || self.custom_items(category_id).iter().any(|i| i.name() == name)
    }

    /// Adds a user-defined item to a category.
    ///
    /// The name and value are trimmed and a blank value is stored as `None`,
    /// matching what a workbook round trip reads back.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist, the name is empty, or an
    /// item with the same name already exists.
    pub fn add_custom_item(
        &mut self,
        category_id: &str,
        name: impl Into<String>,
        user_value: Option<String>,
    ) -> Result<()> {
        let name = name.into().trim().to_string();
        if self.category(category_id).is_none() {
            anyhow::bail!("Category '{category_id}' not found");
        }
        if self.has_item(category_id, &name) {
            anyhow::bail!("Item '{name}' already exists in category '{category_id}'");
        }

        let item = Item::custom(name, None, normalize_text(user_value));
        item.validate()?;
        self.custom_category_items
            .entry(category_id.to_string())
            .or_default()
            .push(item);
        Ok(())
    }

    /// Selects an item that exists in the category.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown.
    pub fn select(&mut self, category_id: &str, name: &str) -> Result<()> {
        if !self.has_item(category_id, name) {
            anyhow::bail!("Item '{name}' not found in category '{category_id}'");
        }
        self.selection.select(category_id, name);
        Ok(())
    }

    /// Sets or clears the user annotation of a catalog or custom item.
    ///
    /// Blank values clear the annotation (see [`Item::set_user_value`]).
    pub fn set_user_value(
        &mut self,
        category_id: &str,
        name: &str,
        value: Option<String>,
    ) -> Result<()> {
        if let Some(item) = self
            .category_mut(category_id)
            .and_then(|c| c.item_mut(name))
        {
            item.set_user_value(value);
            return Ok(());
        }

        let custom = self
            .custom_category_items
            .get_mut(category_id)
            .and_then(|items| items.iter_mut().find(|i| i.name() == name));
        match custom {
            Some(item) => {
                item.set_user_value(value);
                Ok(())
            }
            None => anyhow::bail!("Item '{name}' not found in category '{category_id}'"),
        }
    }

    /// Validates category uniqueness, category contents and selection references.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for category in &self.categories {
            category.validate()?;
            if !ids.insert(category.id.as_str()) {
                anyhow::bail!("Duplicate category ID '{}'", category.id);
            }
        }

        for (category_id, names) in self.selection.iter() {
            for name in names {
                if !self.has_item(category_id, name) {
                    anyhow::bail!(
                        "Selection references unknown item '{name}' in category '{category_id}'"
                    );
                }
            }
        }

        for (category_id, items) in &self.custom_category_items {
            let Some(category) = self.category(category_id) else {
                anyhow::bail!("Custom items reference unknown category '{category_id}'");
            };
            let mut seen = HashSet::new();
            for item in items {
                item.validate()?;
                if !item.applicable_scope().is_empty() {
                    anyhow::bail!(
                        "Custom item '{}' in category '{}' cannot carry an applicable scope",
                        item.name(),
                        category_id
                    );
                }
                if category.contains_item(item.name()) || !seen.insert(item.name()) {
                    anyhow::bail!(
                        "Custom item '{}' duplicates an existing item in category '{}'",
                        item.name(),
                        category_id
                    );
                }
            }
        }

        Ok(())
    }
}
