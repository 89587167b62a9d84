//! Service layer coordinating file I/O and user notification.
//!
//! Services sit between the pure codec/reconciler and the outer surfaces
//! (CLI, web API).

pub mod import;
pub mod model_files;

// Re-export commonly used types
pub use import::{ImportService, LogNotifier, Notifier};
pub use model_files::ModelFileService;
