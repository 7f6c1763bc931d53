use super::{prefix_mask, SubnetSpec};
use crate::{AddressFamily, NetAddrError, RawAddress};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::debug;

/// Longest accepted classful shorthand, as long as a full dotted quad.
const MAX_NETWORK_LEN: usize = "255.255.255.255".len();

/// Base of a subnet before the mask is applied.
enum Base {
    /// A complete numeric address; the mask comes from the caller.
    Address(AddressFamily, [u32; 4]),
    /// Classful shorthand that carries its own mask.
    Network(SubnetSpec),
}

/// Parses an address or network with an optional mask into a [`SubnetSpec`].
///
/// `mask` is a prefix length (`"8"`, `"64"`) or, for IPv4, a dotted netmask
/// (`"255.255.0.0"`). Without a mask the base may also be classful shorthand
/// such as `"9.67"`, meaning `9.67.0.0/16`.
///
/// Errors:
/// - `NotAnAddress`: `ip` is not address-shaped; it may be a hostname.
/// - `BadAddress`: address-shaped but invalid, or an IPv4-mapped IPv6 literal.
/// - `BadMask`: the mask is neither a valid prefix length nor a netmask.
pub fn parse_subnet(ip: &str, mask: Option<&str>) -> Result<SubnetSpec, NetAddrError> {
    if !looks_like_ip(ip) {
        return Err(NetAddrError::NotAnAddress(ip.to_string()));
    }

    let spec = match (parse_base(ip, mask.is_none())?, mask) {
        (Base::Network(spec), _) => spec,
        (Base::Address(family, network), None) => {
            SubnetSpec::new(family, network, prefix_mask(family, family.max_prefix_len()))
        }
        (Base::Address(family, network), Some(mask)) => {
            SubnetSpec::new(family, network, parse_mask(family, mask)?)
        }
    };

    debug!(ip = ip, mask = ?mask, subnet = %spec, "Parsed subnet");
    Ok(spec)
}

/// A colon means an intended IPv6 literal; otherwise only digits and dots.
fn looks_like_ip(text: &str) -> bool {
    if text.contains(':') {
        return true;
    }
    !text.is_empty() && text.bytes().all(|b| b == b'.' || b.is_ascii_digit())
}

fn parse_base(text: &str, network_allowed: bool) -> Result<Base, NetAddrError> {
    if let Ok(v6) = Ipv6Addr::from_str(text) {
        // Mapped literals would make an IPv6 subnet match IPv4 peers.
        if v6.to_ipv4_mapped().is_some() {
            return Err(NetAddrError::BadAddress(format!(
                "{text}: IPv4-mapped addresses must be written as IPv4"
            )));
        }
        return Ok(Base::Address(
            AddressFamily::Inet6,
            RawAddress::from(IpAddr::V6(v6)).words(),
        ));
    }

    if let Ok(v4) = Ipv4Addr::from_str(text) {
        return Ok(Base::Address(AddressFamily::Inet, [u32::from(v4), 0, 0, 0]));
    }

    if network_allowed {
        return parse_network(text).map(Base::Network);
    }

    Err(NetAddrError::BadAddress(text.to_string()))
}

/// Classful shorthand: one to four octets, each worth eight mask bits.
/// `"10"` is `10.0.0.0/8`, `"192.168.1."` is `192.168.1.0/24`.
fn parse_network(text: &str) -> Result<SubnetSpec, NetAddrError> {
    let bad = || NetAddrError::BadAddress(text.to_string());

    if text.len() > MAX_NETWORK_LEN {
        return Err(bad());
    }

    let body = text.strip_suffix('.').unwrap_or(text);
    let mut network = 0u32;
    let mut mask = 0u32;

    for (index, part) in body.split('.').enumerate() {
        if index >= 4 || part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let octet: u32 = part.parse().map_err(|_| bad())?;
        if octet > 255 {
            return Err(bad());
        }
        let shift = 24 - 8 * index as u32;
        network |= octet << shift;
        mask |= 0xFF << shift;
    }

    Ok(SubnetSpec::new(
        AddressFamily::Inet,
        [network, 0, 0, 0],
        [mask, 0, 0, 0],
    ))
}

fn parse_mask(family: AddressFamily, mask: &str) -> Result<[u32; 4], NetAddrError> {
    if let Ok(bits) = mask.parse::<i64>() {
        if bits > 0 && bits <= i64::from(family.max_prefix_len()) {
            return Ok(prefix_mask(family, bits as u32));
        }
    }

    if family == AddressFamily::Inet {
        if let Ok(netmask) = Ipv4Addr::from_str(mask) {
            return Ok([u32::from(netmask), 0, 0, 0]);
        }
    }

    Err(NetAddrError::BadMask(mask.to_string()))
}
