//! Canonical default catalogs for every feature domain.
//!
//! The catalogs are static tables turned into fresh [`ConfigModel`] values on
//! every call, so callers can mutate the result freely.

mod actions;
mod animations;
mod business_rules;
mod design_guidelines;

use crate::models::{Category, ConfigModel, Domain, Item};

/// Category of bare-label items: (id, name, items).
type SimpleCategory = (&'static str, &'static str, &'static [&'static str]);

/// Category of described items: (id, name, [(item name, description)]).
type DescribedCategory = (
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str)],
);

/// Builds the canonical default model for a domain.
///
/// Pure and deterministic: repeated calls return equal, independently owned
/// models with no selection and `apply_to_all` scope.
pub fn create_default(domain: Domain) -> ConfigModel {
    let categories = match domain {
        Domain::BusinessRules => described(business_rules::CATEGORIES),
        Domain::ActionsInteractions => simple(actions::CATEGORIES),
        Domain::AnimationEffects => simple(animations::CATEGORIES),
        Domain::DesignGuidelines => described(design_guidelines::CATEGORIES),
    };
    ConfigModel::new(domain, categories)
}

fn simple(table: &[SimpleCategory]) -> Vec<Category> {
    table
        .iter()
        .map(|(id, name, items)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            items: items.iter().map(|item| Item::simple(*item)).collect(),
        })
        .collect()
}

fn described(table: &[DescribedCategory]) -> Vec<Category> {
    table
        .iter()
        .map(|(id, name, items)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            items: items
                .iter()
                .map(|(item, description)| Item::described(*item, *description))
                .collect(),
        })
        .collect()
}
