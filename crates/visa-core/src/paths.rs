//! Platform paths for advisor files.
//!
//! ```text
//! ~/.config/visa-advisor/
//! ├── config.toml
//! └── logs/
//!     └── visa-advisor.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

use crate::error::{AdvisorError, Result};

const APP_DIR: &str = "visa-advisor";

pub struct AdvisorPaths;

impl AdvisorPaths {
    /// The advisor's configuration directory (e.g. `~/.config/visa-advisor/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| AdvisorError::config("Cannot find config directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
