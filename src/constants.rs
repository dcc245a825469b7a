//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout Folio, including
//! identity strings, outbound links, timing defaults, paths, and UI labels.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Identity ===

/// Name shown in the hero section.
pub const OWNER_NAME: &str = "Gaurav Patil";
/// Role line under the name.
pub const OWNER_ROLE: &str = "Full Stack Developer";
/// Brand shown at the left of the navigation bar.
pub const BRAND: &str = "Portfolio";

// === Outbound Links ===

/// Social profile.
pub const GITHUB_URL: &str = "https://github.com/gauravpatil9903";
/// Professional-network profile.
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/gauravpatil9903";
/// Email contact link.
pub const EMAIL_URL: &str = "mailto:gaurav.patil9903@gmail.com";

// === Scroll Tracking ===

/// Distance below the scroll offset at which the active section is probed, in pixels.
pub const PROBE_OFFSET_PX: u32 = 100;
/// Cell height assumed when the terminal does not report its pixel size.
pub const DEFAULT_CELL_HEIGHT_PX: u32 = 18;
/// Largest accepted cell height; keeps row-to-pixel conversion inside `u32`.
pub const MAX_CELL_HEIGHT_PX: u32 = 256;
/// Terminals narrower than this get the collapsed (menu button) navigation.
pub const NARROW_WIDTH: u16 = 80;
/// Widest the page content is allowed to grow.
pub const MAX_CONTENT_WIDTH: u16 = 96;

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// Rows scrolled per arrow key or wheel notch.
pub const DEFAULT_SCROLL_STEP: u16 = 1;
/// Rows scrolled per page key.
pub const DEFAULT_PAGE_STEP: u16 = 10;
/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

// === Path Configuration ===

/// Name of the per-user config/data subdirectory.
pub const APP_DIR_NAME: &str = "folio";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the log file.
pub const LOG_FILE_NAME: &str = "folio.log";
/// Environment variable that overrides the config path.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

// === UI Labels & Titles ===

pub const TITLE_PROJECTS: &str = "Featured Projects";
pub const TITLE_CONTACT: &str = "Get in Touch";
pub const LABEL_VIEW_PROJECT: &str = "View Project ↗";
pub const LABEL_SEND_MESSAGE: &str = "Send Message";
pub const LABEL_MENU_BUTTON: &str = "≡";

// === Messages: Toast ===

pub const MSG_OPENING: &str = "Opening ";
pub const MSG_OPEN_FAILED: &str = "Could not open link: ";

// === Messages: CLI Output ===

pub const CLI_MSG_CONFIG_PATH: &str = "Config file: ";
pub const CLI_MSG_CONFIG_MISSING: &str = " (not found, using defaults)";
