use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which resolver generation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverTier {
    /// Pick from the platform capability probe
    #[default]
    Auto,
    /// Dual-stack resolver (getaddrinfo / getnameinfo)
    Modern,
    /// IPv4-only host database
    Legacy,
}

impl FromStr for ResolverTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "modern" => Ok(Self::Modern),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown resolver tier: {other}")),
        }
    }
}

impl fmt::Display for ResolverTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Modern => write!(f, "modern"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// Name resolution configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub tier: ResolverTier,

    /// Port given to records when the caller supplies none (default: 0)
    #[serde(default)]
    pub default_port: u16,
}
