//! Layered configuration
//!
//! Precedence, lowest to highest:
//! 1. Built-in defaults
//! 2. Registry-local: `<root>/.assetfix/config.toml`
//! 3. Environment variables: `ASSETFIX_LOGO_MAX_EDGE`, `ASSETFIX_LOGO_MAX_BYTES`
//! 4. Command-line flags (applied by the caller)

use assetfix_core::{AssetfixError, Result};
use assetfix_fixer::LogoLimits;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_EDGE_VAR: &str = "ASSETFIX_LOGO_MAX_EDGE";
const MAX_BYTES_VAR: &str = "ASSETFIX_LOGO_MAX_BYTES";

/// Resolved fixer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FixerConfig {
    #[serde(default)]
    pub logo: LogoLimits,
}

impl FixerConfig {
    /// Load config for a registry root: defaults < file < env vars
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        let mut config = if path.exists() {
            Self::load_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(".assetfix").join("config.toml")
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AssetfixError::io("read", path, e))?;
        toml::from_str(&content).map_err(|e| {
            AssetfixError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = var(MAX_EDGE_VAR) {
            self.logo.max_edge = parse_var(MAX_EDGE_VAR, &value)?;
        }
        if let Some(value) = var(MAX_BYTES_VAR) {
            self.logo.max_bytes = parse_var(MAX_BYTES_VAR, &value)?;
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AssetfixError::Config(format!("Invalid {}={:?}: {}", name, value, e)))
}
