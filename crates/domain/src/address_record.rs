use crate::{AddressFamily, NetAddrError};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::str::FromStr;
use std::sync::Arc;

/// Textual form of the IPv4 any-address accepted by [`AddressRecord::set_ip`].
pub const ANY_ADDR: &str = "0.0.0.0";

/// Raw address bytes, tagged by family. Only IPv6 carries a scope id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawAddress {
    V4([u8; 4]),
    V6 { bytes: [u8; 16], scope_id: u32 },
}

impl RawAddress {
    pub fn unspecified(family: AddressFamily) -> Self {
        match family {
            AddressFamily::Inet => Self::V4([0; 4]),
            AddressFamily::Inet6 => Self::V6 {
                bytes: [0; 16],
                scope_id: 0,
            },
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Self::V4(_) => AddressFamily::Inet,
            Self::V6 { .. } => AddressFamily::Inet6,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::V4(bytes) => bytes,
            Self::V6 { bytes, .. } => bytes,
        }
    }

    pub fn ip(&self) -> IpAddr {
        match *self {
            Self::V4(bytes) => IpAddr::V4(Ipv4Addr::from(bytes)),
            Self::V6 { bytes, .. } => IpAddr::V6(Ipv6Addr::from(bytes)),
        }
    }

    /// The embedded IPv4 address of an `::ffff:a.b.c.d` address.
    pub fn mapped_ipv4(&self) -> Option<Ipv4Addr> {
        match *self {
            Self::V4(_) => None,
            Self::V6 { bytes, .. } => Ipv6Addr::from(bytes).to_ipv4_mapped(),
        }
    }

    /// The address as big-endian 32-bit words; unused trailing words are zero.
    pub fn words(&self) -> [u32; 4] {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(self.as_bytes().chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }
}

impl From<IpAddr> for RawAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self::V4(v4.octets()),
            IpAddr::V6(v6) => Self::V6 {
                bytes: v6.octets(),
                scope_id: 0,
            },
        }
    }
}

/// Family-derived layout facts of a record, always computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressMeta {
    pub family: AddressFamily,
    pub ipaddr_len: usize,
    pub addr_str_len: usize,
}

impl AddressMeta {
    fn derive(addr: &RawAddress) -> Self {
        let family = addr.family();
        Self {
            family,
            ipaddr_len: family.byte_len(),
            addr_str_len: family.text_capacity(),
        }
    }
}

/// One resolved network endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    addr: RawAddress,
    port: u16,
    meta: AddressMeta,
    hostname: Option<Arc<str>>,
    servname: Option<Arc<str>>,
}

impl AddressRecord {
    pub fn new(addr: RawAddress, port: u16) -> Self {
        Self {
            addr,
            port,
            meta: AddressMeta::derive(&addr),
            hostname: None,
            servname: None,
        }
    }

    /// The any-address of `family` with `port`.
    pub fn wildcard(family: AddressFamily, port: u16) -> Self {
        Self::new(RawAddress::unspecified(family), port)
    }

    pub fn from_ip(ip: IpAddr, port: u16) -> Self {
        Self::new(RawAddress::from(ip), port)
    }

    pub fn from_socket_addr(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => Self::new(RawAddress::V4(v4.ip().octets()), v4.port()),
            SocketAddr::V6(v6) => Self::new(
                RawAddress::V6 {
                    bytes: v6.ip().octets(),
                    scope_id: v6.scope_id(),
                },
                v6.port(),
            ),
        }
    }

    /// Builds a record from a numeric IPv4 or IPv6 literal.
    pub fn parse_literal(text: &str, port: u16) -> Result<Self, NetAddrError> {
        IpAddr::from_str(text)
            .map(|ip| Self::from_ip(ip, port))
            .map_err(|_| NetAddrError::BadAddress(text.to_string()))
    }

    pub fn with_hostname(mut self, hostname: Option<Arc<str>>) -> Self {
        self.hostname = hostname;
        self
    }

    pub fn with_scope_id(mut self, scope: u32) -> Self {
        if let RawAddress::V6 { scope_id, .. } = &mut self.addr {
            *scope_id = scope;
        }
        self
    }

    /// Recomputes family, byte width and text capacity from the address.
    /// Applying it to a consistent record changes nothing.
    pub fn derive_metadata(&mut self) {
        self.meta = AddressMeta::derive(&self.addr);
    }

    /// Changes the record's family after a default guess.
    ///
    /// IPv4 becomes its IPv4-mapped IPv6 form (the any-address becomes `::`);
    /// IPv6 only converts back when it is mapped or unspecified.
    pub fn correct_family(&mut self, family: AddressFamily) -> Result<(), NetAddrError> {
        if self.family() == family {
            self.derive_metadata();
            return Ok(());
        }

        self.addr = match (self.addr, family) {
            (RawAddress::V4(bytes), AddressFamily::Inet6) => {
                if bytes == [0; 4] {
                    RawAddress::unspecified(AddressFamily::Inet6)
                } else {
                    RawAddress::V6 {
                        bytes: Ipv4Addr::from(bytes).to_ipv6_mapped().octets(),
                        scope_id: 0,
                    }
                }
            }
            (addr @ RawAddress::V6 { bytes, .. }, AddressFamily::Inet) => {
                if bytes == [0; 16] {
                    RawAddress::unspecified(AddressFamily::Inet)
                } else if let Some(v4) = addr.mapped_ipv4() {
                    RawAddress::V4(v4.octets())
                } else {
                    return Err(NetAddrError::BadAddress(format!(
                        "{} has no IPv4 form",
                        self.canonical_text()
                    )));
                }
            }
            (addr, _) => addr,
        };
        self.derive_metadata();
        Ok(())
    }

    pub fn family(&self) -> AddressFamily {
        self.meta.family
    }

    pub fn meta(&self) -> AddressMeta {
        self.meta
    }

    pub fn raw(&self) -> &RawAddress {
        &self.addr
    }

    pub fn ip_bytes(&self) -> &[u8] {
        &self.addr.as_bytes()[..self.meta.ipaddr_len]
    }

    pub fn ip(&self) -> IpAddr {
        self.addr.ip()
    }

    pub fn scope_id(&self) -> Option<u32> {
        match self.addr {
            RawAddress::V6 { scope_id, .. } if scope_id != 0 => Some(scope_id),
            _ => None,
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Replaces the address with an IPv4 literal or the any-address.
    pub fn set_ip(&mut self, text: &str) -> Result<(), NetAddrError> {
        let v4 = if text == ANY_ADDR {
            Ipv4Addr::UNSPECIFIED
        } else {
            Ipv4Addr::from_str(text).map_err(|_| NetAddrError::BadAddress(text.to_string()))?
        };
        self.addr = RawAddress::V4(v4.octets());
        self.derive_metadata();
        Ok(())
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Stores a hostname learned from reverse resolution, replacing any
    /// previous one.
    pub fn cache_hostname(&mut self, hostname: Arc<str>) {
        self.hostname = Some(hostname);
    }

    pub fn servname(&self) -> Option<&str> {
        self.servname.as_deref()
    }

    pub fn set_service(&mut self, name: &str, port: u16) {
        self.servname = Some(Arc::from(name));
        self.port = port;
    }

    /// Full textual form of the address in its own family.
    pub fn canonical_text(&self) -> String {
        let text = self.addr.ip().to_string();
        debug_assert!(text.len() < self.meta.addr_str_len);
        text
    }

    /// Textual form for display; an IPv4-mapped IPv6 address is shown as
    /// plain IPv4.
    pub fn ip_string(&self) -> String {
        match self.addr.mapped_ipv4() {
            Some(v4) => v4.to_string(),
            None => self.canonical_text(),
        }
    }

    pub fn is_ipv4_mapped(&self) -> bool {
        self.addr.mapped_ipv4().is_some()
    }

    pub fn is_wildcard(&self) -> bool {
        self.addr.ip().is_unspecified()
    }

    pub fn to_socket_addr(&self) -> SocketAddr {
        match self.addr {
            RawAddress::V4(bytes) => {
                SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::from(bytes), self.port))
            }
            RawAddress::V6 { bytes, scope_id } => SocketAddr::V6(SocketAddrV6::new(
                Ipv6Addr::from(bytes),
                self.port,
                0,
                scope_id,
            )),
        }
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_socket_addr())
    }
}
