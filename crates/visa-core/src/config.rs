//! Advisor configuration loaded from `config.toml`.
//!
//! ```toml
//! log_level = "info"
//!
//! [reply_delay]
//! base_ms = 800
//! jitter_ms = 400
//!
//! [display]
//! color = true
//! ```
//!
//! Every key is optional; a missing or empty file yields the defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::ReplyDelay;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReplyDelaySettings {
    pub base_ms: u64,
    pub jitter_ms: u64,
}

impl Default for ReplyDelaySettings {
    fn default() -> Self {
        let delay = ReplyDelay::default();
        Self {
            base_ms: delay.base.as_millis() as u64,
            jitter_ms: delay.jitter.as_millis() as u64,
        }
    }
}

impl From<&ReplyDelaySettings> for ReplyDelay {
    fn from(settings: &ReplyDelaySettings) -> Self {
        ReplyDelay {
            base: Duration::from_millis(settings.base_ms),
            jitter: Duration::from_millis(settings.jitter_ms),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Colored terminal output.
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Default log filter, overridden by the `VISA_ADVISOR_LOG` environment variable.
    pub log_level: String,
    pub reply_delay: ReplyDelaySettings,
    pub display: DisplaySettings,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            reply_delay: ReplyDelaySettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl AdvisorConfig {
    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist or is blank.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn reply_delay(&self) -> ReplyDelay {
        ReplyDelay::from(&self.reply_delay)
    }
}
