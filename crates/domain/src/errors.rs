use std::io;
use thiserror::Error;

/// Start of the status range reserved for wrapped name-service codes.
///
/// Platform resolver codes (`EAI_*`, `h_errno`) are shifted by this offset so
/// they never collide with the local error kinds or with `errno` values.
pub const OS_START_SYSERR: i32 = 720_000;

#[derive(Error, Debug)]
pub enum NetAddrError {
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Bad IP address: {0}")]
    BadAddress(String),

    #[error("Bad netmask: {0}")]
    BadMask(String),

    #[error("Not an IP address: {0}")]
    NotAnAddress(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Name service error (status {0})")]
    NameService(i32),

    #[error("OS error: {0}")]
    Os(#[from] io::Error),

    #[error("Out of memory")]
    OutOfMemory,
}

impl NetAddrError {
    /// Wraps a platform name-service code into the disjoint status space.
    pub fn name_service(code: i32) -> Self {
        Self::NameService(code + OS_START_SYSERR)
    }

    /// The platform code carried by a `NameService` error.
    pub fn raw_code(&self) -> Option<i32> {
        match self {
            Self::NameService(status) => Some(status - OS_START_SYSERR),
            _ => None,
        }
    }

    /// True when the token was not address-shaped and may be something else,
    /// e.g. a hostname.
    pub fn is_not_an_address(&self) -> bool {
        matches!(self, Self::NotAnAddress(_))
    }
}
