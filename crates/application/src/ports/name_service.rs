use netaddr_domain::FamilyHint;
use std::io;
use std::net::SocketAddr;

/// Query hints for a dual-stack lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddrInfoHints {
    pub family: FamilyHint,
    /// Only accept numeric literals; never query the name service
    pub numeric_host: bool,
}

/// Failure of a dual-stack forward lookup.
#[derive(Debug)]
pub enum AddrInfoError {
    /// Generic OS failure (`EAI_SYSTEM`); the error comes from `errno`
    System(io::Error),
    /// Resolver-specific code (`EAI_*`)
    Resolver(i32),
}

/// Failure of a dual-stack reverse lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameInfoError {
    /// The address has no name
    NoName,
    /// Name service failed with this `EAI_*` code, numbered like
    /// [`AddrInfoError::Resolver`]
    Transient(i32),
}

/// Dual-stack resolver: one query returns addresses of every family, in the
/// resolver's preferred order.
pub trait AddrInfoService: Send + Sync {
    fn addr_info(&self, host: &str, hints: &AddrInfoHints)
        -> Result<Vec<SocketAddr>, AddrInfoError>;

    /// With `name_required` unset the service may answer with the numeric
    /// form of the address.
    fn name_info(&self, addr: &SocketAddr, name_required: bool) -> Result<String, NameInfoError>;
}
