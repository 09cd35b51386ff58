// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::LocalStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_true() -> bool {
    true
}

/// User preferences for the surrounding UI.
///
/// `show_side_menu` is the persisted sidebar toggle; the day list
/// itself lives in the data store, not here.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_true")]
    pub show_side_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            show_side_menu: true,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        // Explicitly detect missing file so callers can fall back to
        // defaults without string-matching IO errors.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist yet. Read and parse failures still propagate.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(ctx)
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_yields_defaults() {
        let ctx = TestContext::new();
        let config = Config::load_or_default(&ctx).unwrap();
        assert!(config.show_side_menu);
        // Plain load distinguishes the missing file.
        assert!(Config::load(&ctx).is_err());
    }

    #[test]
    fn round_trip() {
        let ctx = TestContext::new();
        let config = Config {
            show_side_menu: false,
        };
        config.save(&ctx).unwrap();
        assert_eq!(Config::load(&ctx).unwrap(), config);
        assert_eq!(Config::load_or_default(&ctx).unwrap(), config);
    }

    #[test]
    fn parse_failure_propagates() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        std::fs::write(&path, "show_side_menu = \"maybe\"").unwrap();
        assert!(Config::load_or_default(&ctx).is_err());
    }
}
