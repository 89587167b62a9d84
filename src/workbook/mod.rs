//! Multi-sheet workbook import and export.
//!
//! A [`ConfigModel`] is written as one or more data sheets plus a
//! "Configuration" sheet, and read back into a [`RawDecodedModel`] that still
//! has to be reconciled against the canonical catalog (see
//! [`crate::reconcile`]).
//!
//! # Data sheet layout
//!
//! | Row | Content                                                   |
//! |-----|-----------------------------------------------------------|
//! | 0   | Title: `<domain> - <project>`                             |
//! | 1   | Column headers                                            |
//! | 2.. | `Category ID`, `Category Name`, item, `Selected`, notes, `Description`, `Is Custom` |
//!
//! Category ID and name are written on the first row of each category's block
//! only; the reader carries them forward to the rows below.

mod decode;
mod encode;
pub mod error;
pub mod format;
pub mod raw;

pub use encode::ExportMode;
pub use error::{ExportError, ImportError};
pub use format::{is_truthy, sheet_name_for, SheetLayout, WorkbookFormat};
pub use raw::{RawDecodedModel, RawRow};

use crate::models::{ConfigModel, Domain};

/// Encoder/decoder for one feature domain's workbook format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadsheetCodec {
    format: WorkbookFormat,
}

impl SpreadsheetCodec {
    /// Creates the codec for a domain.
    pub const fn new(domain: Domain) -> Self {
        Self {
            format: WorkbookFormat::for_domain(domain),
        }
    }

    /// Layout this codec reads and writes.
    pub const fn format(&self) -> &WorkbookFormat {
        &self.format
    }

    /// Encodes a model with its selection flags and notes.
    ///
    /// `label` is the project name recorded in titles and on the
    /// Configuration sheet.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqbook::catalog::create_default;
    /// use reqbook::models::Domain;
    /// use reqbook::workbook::SpreadsheetCodec;
    ///
    /// let codec = SpreadsheetCodec::new(Domain::AnimationEffects);
    /// let bytes = codec.encode(&create_default(Domain::AnimationEffects), "Demo").unwrap();
    /// let raw = codec.decode(&bytes).unwrap();
    /// assert_eq!(raw.project.as_deref(), Some("Demo"));
    /// ```
    pub fn encode(&self, model: &ConfigModel, label: &str) -> Result<Vec<u8>, ExportError> {
        encode::encode(&self.format, model, label, ExportMode::Selections)
    }

    /// Encodes a blank template: catalog rows with empty flags and notes.
    pub fn encode_template(&self, model: &ConfigModel, label: &str) -> Result<Vec<u8>, ExportError> {
        encode::encode(&self.format, model, label, ExportMode::Template)
    }

    /// Encodes with an explicit mode.
    pub fn encode_with_mode(
        &self,
        model: &ConfigModel,
        label: &str,
        mode: ExportMode,
    ) -> Result<Vec<u8>, ExportError> {
        encode::encode(&self.format, model, label, mode)
    }

    /// Decodes workbook bytes into a raw, unreconciled model.
    ///
    /// # Errors
    ///
    /// Fails if the bytes are not a workbook or they carry no data sheet of
    /// this domain. A missing Configuration sheet is not an error.
    pub fn decode(&self, bytes: &[u8]) -> Result<RawDecodedModel, ImportError> {
        decode::decode(&self.format, bytes)
    }
}
