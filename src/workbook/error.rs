//! Error types for workbook import and export.

use thiserror::Error;

/// A workbook could not be imported.
///
/// Every variant is terminal for the one import attempt; the caller's live
/// model is never touched when decoding fails.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The bytes are not a readable workbook.
    #[error("Workbook could not be read: {0}")]
    Unreadable(String),

    /// The primary data sheet is absent.
    #[error("Workbook is missing the required sheet '{0}'")]
    MissingSheet(String),

    /// A per-category workbook has no sheet belonging to this domain.
    #[error("Workbook contains no category sheets")]
    NoCategorySheets,
}

impl ImportError {
    /// Human-readable reason suitable for a user-facing notification.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// A model could not be written as a workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The spreadsheet writer rejected the content.
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Two categories map to the same sheet name after truncation.
    #[error("Category '{category}' maps to sheet name '{sheet}', which is already in use")]
    DuplicateSheet {
        /// Category display name
        category: String,
        /// Resulting sheet name
        sheet: String,
    },
}
