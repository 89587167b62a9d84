//! CLI command handlers for Reqbook.
//!
//! This module provides headless, scriptable access to the catalog and the
//! workbook round trip for automation, testing, and CI/CD integration.

pub mod catalog;
pub mod common;
pub mod config;
pub mod export;
pub mod import;
pub mod template;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use import::ImportArgs;
pub use template::TemplateArgs;
