//! Import/export coordination with user notification.
//!
//! The codec and reconciler are pure; this service wires them to a live model
//! owned by the caller and reports outcomes through an injected [`Notifier`].

use tracing::{info, warn};

use crate::catalog::create_default;
use crate::models::ConfigModel;
use crate::reconcile;
use crate::workbook::{ExportError, ImportError, SpreadsheetCodec};

/// Receives user-facing outcome messages (toast, status line, log).
pub trait Notifier {
    /// Reports a successful operation.
    fn notify_success(&self, message: &str);
    /// Reports a failed operation.
    fn notify_error(&self, message: &str);
}

/// Notifier that forwards messages to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&self, message: &str) {
        info!("{message}");
    }

    fn notify_error(&self, message: &str) {
        warn!("{message}");
    }
}

/// Runs workbook import/export against a caller-owned model.
pub struct ImportService<'a, N: Notifier> {
    notifier: &'a N,
}

impl<'a, N: Notifier> ImportService<'a, N> {
    /// Creates a service reporting through `notifier`.
    pub const fn new(notifier: &'a N) -> Self {
        Self { notifier }
    }

    /// Decodes `bytes` and reconciles them against the domain's canonical
    /// catalog, returning the merged model.
    pub fn import(&self, live: &ConfigModel, bytes: &[u8]) -> Result<ConfigModel, ImportError> {
        let codec = SpreadsheetCodec::new(live.domain);
        let canonical = create_default(live.domain);

        match codec.decode(bytes) {
            Ok(raw) => {
                let merged = reconcile::merge(&raw, &canonical);
                self.notifier.notify_success(&format!(
                    "Imported {} with {} selected items",
                    live.domain.label(),
                    merged.selection.len()
                ));
                Ok(merged)
            }
            Err(e) => {
                self.notifier
                    .notify_error(&format!("Import failed: {}", e.reason()));
                Err(e)
            }
        }
    }

    /// Imports into `live`, replacing it wholesale only on success.
    pub fn import_into(&self, live: &mut ConfigModel, bytes: &[u8]) -> Result<(), ImportError> {
        let merged = self.import(live, bytes)?;
        *live = merged;
        Ok(())
    }

    /// Encodes the live model, reporting the outcome.
    pub fn export(&self, live: &ConfigModel, label: &str) -> Result<Vec<u8>, ExportError> {
        let codec = SpreadsheetCodec::new(live.domain);
        match codec.encode(live, label) {
            Ok(bytes) => {
                self.notifier
                    .notify_success(&format!("Exported {}", live.domain.label()));
                Ok(bytes)
            }
            Err(e) => {
                self.notifier.notify_error(&format!("Export failed: {e}"));
                Err(e)
            }
        }
    }
}
