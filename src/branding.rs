//! Branding and application identity configuration.
//!
//! This module centralizes the names and paths that identify the application.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Reqbook";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in command examples and help output.
pub const APP_BINARY_NAME: &str = "reqbook";

/// The directory name for application data (config, models, exports).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Reqbook";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "REQBOOK_CONFIG_DIR";

/// File extension of exported workbooks.
pub const WORKBOOK_EXTENSION: &str = "xlsx";
