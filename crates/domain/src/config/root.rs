use super::{ConfigError, LoggingConfig, ResolverConfig, ResolverTier};
use crate::{AccessEntry, AccessList, AccessRule};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub access: Vec<AccessEntry>,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub tier: Option<ResolverTier>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `path` (defaults when `None`) and applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        if let Some(tier) = overrides.tier {
            config.resolver.tier = tier;
        }
        if let Some(level) = overrides.log_level {
            config.logging.level = level;
        }

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }

        self.access_list()?;
        Ok(())
    }

    /// Builds the access list; an entry that is neither an address, a subnet
    /// nor a hostname rejects the whole configuration.
    pub fn access_list(&self) -> Result<AccessList, ConfigError> {
        let mut list = AccessList::default();

        for entry in &self.access {
            let rule = entry
                .parse_rule()
                .map_err(|source| ConfigError::InvalidAccessEntry {
                    entry: entry.entry.to_string(),
                    source,
                })?;
            if let AccessRule::Host(ref name) = rule {
                debug!(entry = %entry.entry, host = %name, "Access entry treated as hostname");
            }
            list.insert(rule, entry.group_id);
        }

        Ok(list)
    }
}
