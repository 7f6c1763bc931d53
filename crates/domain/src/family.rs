use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Concrete address family of a record or subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Inet,
    Inet6,
}

impl AddressFamily {
    /// Width of the raw address in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            Self::Inet => 4,
            Self::Inet6 => 16,
        }
    }

    /// Buffer capacity for the textual form, terminator included
    /// (`INET_ADDRSTRLEN` / `INET6_ADDRSTRLEN`).
    pub const fn text_capacity(self) -> usize {
        match self {
            Self::Inet => 16,
            Self::Inet6 => 46,
        }
    }

    /// Number of 32-bit words needed to hold the address.
    pub const fn word_count(self) -> usize {
        match self {
            Self::Inet => 1,
            Self::Inet6 => 4,
        }
    }

    pub const fn max_prefix_len(self) -> u32 {
        match self {
            Self::Inet => 32,
            Self::Inet6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inet => write!(f, "IPv4"),
            Self::Inet6 => write!(f, "IPv6"),
        }
    }
}

/// Family requested from the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyHint {
    #[default]
    Unspecified,
    Inet,
    Inet6,
}

impl FamilyHint {
    /// The concrete family, falling back to IPv4 when unspecified.
    pub fn or_inet(self) -> AddressFamily {
        match self {
            Self::Unspecified | Self::Inet => AddressFamily::Inet,
            Self::Inet6 => AddressFamily::Inet6,
        }
    }
}

impl From<AddressFamily> for FamilyHint {
    fn from(family: AddressFamily) -> Self {
        match family {
            AddressFamily::Inet => Self::Inet,
            AddressFamily::Inet6 => Self::Inet6,
        }
    }
}

impl FromStr for FamilyHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unspec" | "unspecified" | "any" => Ok(Self::Unspecified),
            "inet" | "ipv4" | "4" => Ok(Self::Inet),
            "inet6" | "ipv6" | "6" => Ok(Self::Inet6),
            other => Err(format!("unknown address family: {other}")),
        }
    }
}
