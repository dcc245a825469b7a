//! User configuration loaded from `config.toml`.
//!
//! Every key is optional; a missing file yields [`Config::default`].

use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Runtime settings for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Milliseconds between UI ticks.
    pub tick_rate_ms: u64,
    /// Rows scrolled per arrow key or wheel notch.
    pub scroll_step: u16,
    /// Rows scrolled per PgUp/PgDn.
    pub page_step: u16,
    /// Cell height used when the terminal does not report pixel sizes.
    pub cell_height_px: u32,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Subscribe to mouse wheel scrolling.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: constants::DEFAULT_TICK_RATE,
            scroll_step: constants::DEFAULT_SCROLL_STEP,
            page_step: constants::DEFAULT_PAGE_STEP,
            cell_height_px: constants::DEFAULT_CELL_HEIGHT_PX,
            log_level: "info".to_string(),
            mouse: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(eyre!("tick_rate_ms must be greater than zero"));
        }
        if self.scroll_step == 0 || self.page_step == 0 {
            return Err(eyre!("scroll_step and page_step must be greater than zero"));
        }
        if self.cell_height_px == 0 || self.cell_height_px > constants::MAX_CELL_HEIGHT_PX {
            return Err(eyre!(
                "cell_height_px must be between 1 and {}",
                constants::MAX_CELL_HEIGHT_PX
            ));
        }
        Ok(())
    }
}

/// Default location of the config file: `<config_dir>/folio/config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::APP_DIR_NAME)
        .join(constants::CONFIG_FILE_NAME)
}

/// Directory for the log file: `<data_local_dir>/folio`.
#[must_use]
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join(constants::APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("scroll_step = 3\nmouse = false\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scroll_step, 3);
        assert!(!config.mouse);
        assert_eq!(config.page_step, constants::DEFAULT_PAGE_STEP);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config("scrol_step = 3\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config file"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let file = write_config("tick_rate_ms = 0\n");
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_huge_cell_height_rejected() {
        let file = write_config("cell_height_px = 100000000\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("cell_height_px"));

        let file = write_config("cell_height_px = 256\n");
        assert_eq!(Config::load(file.path()).unwrap().cell_height_px, 256);
    }

    #[test]
    fn test_default_path_shape() {
        let path = default_config_path();
        assert!(path.ends_with("folio/config.toml"));
    }
}
