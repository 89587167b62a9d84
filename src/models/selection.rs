//! Selection state and scope configuration.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Selected item names per category ID.
///
/// Empty sets are never stored by the mutating methods, and two selections
/// compare equal when they select the same names regardless of empty entries
/// that arrived through deserialization.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState(BTreeMap<String, BTreeSet<String>>);

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an item as selected. Returns false if it already was.
    pub fn select(&mut self, category_id: &str, item_name: &str) -> bool {
        self.0
            .entry(category_id.to_string())
            .or_default()
            .insert(item_name.to_string())
    }

    /// Clears an item's selection. Returns false if it was not selected.
    pub fn deselect(&mut self, category_id: &str, item_name: &str) -> bool {
        let Some(names) = self.0.get_mut(category_id) else {
            return false;
        };
        let removed = names.remove(item_name);
        if names.is_empty() {
            self.0.remove(category_id);
        }
        removed
    }

    /// Flips an item's selection, returning the new state.
    pub fn toggle(&mut self, category_id: &str, item_name: &str) -> bool {
        if self.deselect(category_id, item_name) {
            false
        } else {
            self.select(category_id, item_name)
        }
    }

    /// Returns true if the item is selected.
    pub fn is_selected(&self, category_id: &str, item_name: &str) -> bool {
        self.0
            .get(category_id)
            .is_some_and(|names| names.contains(item_name))
    }

    /// Iterates the selected names of one category in sorted order.
    pub fn selected(&self, category_id: &str) -> impl Iterator<Item = &str> {
        self.0
            .get(category_id)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Iterates over all non-empty (category ID, names) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(id, names)| (id.as_str(), names))
    }

    /// Total number of selected items across all categories.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Whether a configuration applies everywhere or to named targets.
///
/// `specific_targets` is kept when `apply_to_all` is toggled on, so switching
/// back restores the previous target list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeConfig {
    /// Apply to every project/module
    pub apply_to_all: bool,
    /// Target IDs (modules); ignored while `apply_to_all` is set
    #[serde(default)]
    pub specific_targets: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            apply_to_all: true,
            specific_targets: Vec::new(),
        }
    }
}

impl ScopeConfig {
    /// Creates a scope restricted to the given targets.
    pub fn targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            apply_to_all: false,
            specific_targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the configuration covers this target.
    pub fn applies_to(&self, target: &str) -> bool {
        self.apply_to_all || self.specific_targets.iter().any(|t| t == target)
    }
}
