use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{env::VarError, path::Path};

use crate::overflow::OverflowPolicy;

/// Policy used by [`crate::Demo::try_add`] when nothing else is configured.
pub const DEFAULT_OVERFLOW_POLICY: OverflowPolicy = OverflowPolicy::Wrap;

/// Environment variable holding an overflow policy name.
pub const CONFIG_ENV_VAR: &str = "DNETWORKMANAGER_DEMO_OVERFLOW";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub overflow: OverflowPolicy,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            overflow: DEFAULT_OVERFLOW_POLICY,
        }
    }
}

impl DemoConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid demo config")?;
        debug!("Parsed demo config: overflow={}", config.overflow);
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading demo config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Reads the policy from [`CONFIG_ENV_VAR`], falling back to the default when unset.
    pub fn from_env() -> Result<Self> {
        let value = match std::env::var(CONFIG_ENV_VAR) {
            Ok(value) => value,
            Err(VarError::NotPresent) => {
                debug!("{} not set, using default config", CONFIG_ENV_VAR);
                return Ok(Self::default());
            }
            Err(e @ VarError::NotUnicode(_)) => {
                return Err(e).with_context(|| format!("Invalid value for {}", CONFIG_ENV_VAR));
            }
        };

        let overflow = value
            .parse::<OverflowPolicy>()
            .with_context(|| format!("Invalid value for {}", CONFIG_ENV_VAR))?;
        debug!("Overflow policy from environment: {}", overflow);
        Ok(Self { overflow })
    }
}
