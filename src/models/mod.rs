//! Data models for categorized configuration.
//!
//! This module contains the core data structures shared by the catalog, the
//! workbook codec and the reconciler. Models are independent of I/O.

pub mod category;
pub mod config_model;
pub mod domain;
pub mod item;
pub mod selection;

// Re-export all model types
pub use category::Category;
pub use config_model::ConfigModel;
pub use domain::Domain;
pub use item::{AnnotatedItem, Item};
pub use selection::{ScopeConfig, SelectionState};
