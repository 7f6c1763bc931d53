//! Network/mask pairs and membership tests.
//!
//! - `parser`: text (plus optional mask) to [`SubnetSpec`]
//! - `matcher`: [`SubnetSpec`] x [`AddressRecord`] membership

pub mod matcher;
pub mod parser;

pub use matcher::subnet_contains;
pub use parser::parse_subnet;

use crate::{AddressFamily, AddressRecord, NetAddrError};
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A matchable address range as network and mask words.
///
/// Words are big-endian 32-bit slices of the address; IPv4 uses only the
/// first word. The network is always pre-masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetSpec {
    family: AddressFamily,
    network: [u32; 4],
    mask: [u32; 4],
}

impl SubnetSpec {
    pub(crate) fn new(family: AddressFamily, network: [u32; 4], mask: [u32; 4]) -> Self {
        let mut spec = Self {
            family,
            network,
            mask,
        };
        spec.fix_subnet();
        spec
    }

    /// Parses `ip` with an optional prefix length or dotted mask.
    pub fn parse(ip: &str, mask: Option<&str>) -> Result<Self, NetAddrError> {
        parse_subnet(ip, mask)
    }

    /// Turns off network bits the mask does not cover, and every bit past
    /// the family's width.
    fn fix_subnet(&mut self) {
        let used = self.family.word_count();
        for (i, (network, mask)) in self.network.iter_mut().zip(&mut self.mask).enumerate() {
            if i >= used {
                *mask = 0;
            }
            *network &= *mask;
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn network_words(&self) -> &[u32] {
        &self.network[..self.family.word_count()]
    }

    pub fn mask_words(&self) -> &[u32] {
        &self.mask[..self.family.word_count()]
    }

    pub fn network(&self) -> IpAddr {
        words_to_ip(self.family, &self.network)
    }

    pub fn mask(&self) -> IpAddr {
        words_to_ip(self.family, &self.mask)
    }

    /// Number of one bits in the mask.
    pub fn mask_bits(&self) -> u32 {
        self.mask_words().iter().map(|w| w.count_ones()).sum()
    }

    /// Prefix length when the mask is a contiguous run of leading ones.
    pub fn prefix_len(&self) -> Option<u32> {
        let bits = self.mask_bits();
        let expected = prefix_mask(self.family, bits);
        (self.mask_words() == &expected[..self.family.word_count()]).then_some(bits)
    }

    pub fn matches(&self, record: &AddressRecord) -> bool {
        subnet_contains(self, record)
    }

    pub fn matches_ip(&self, ip: IpAddr) -> bool {
        subnet_contains(self, &AddressRecord::from_ip(ip, 0))
    }
}

impl fmt::Display for SubnetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_len() {
            Some(bits) => write!(f, "{}/{}", self.network(), bits),
            None => write!(f, "{}/{}", self.network(), self.mask()),
        }
    }
}

impl TryFrom<IpNetwork> for SubnetSpec {
    type Error = NetAddrError;

    fn try_from(net: IpNetwork) -> Result<Self, Self::Error> {
        let family = match net.ip() {
            IpAddr::V4(_) => AddressFamily::Inet,
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => {
                return Err(NetAddrError::BadAddress(net.to_string()));
            }
            IpAddr::V6(_) => AddressFamily::Inet6,
        };
        let network = crate::RawAddress::from(net.ip()).words();
        Ok(Self::new(
            family,
            network,
            prefix_mask(family, u32::from(net.prefix())),
        ))
    }
}

impl TryFrom<&SubnetSpec> for IpNetwork {
    type Error = NetAddrError;

    fn try_from(spec: &SubnetSpec) -> Result<Self, Self::Error> {
        let bits = spec
            .prefix_len()
            .ok_or_else(|| NetAddrError::BadMask(spec.mask().to_string()))?;
        IpNetwork::new(spec.network(), bits as u8)
            .map_err(|e| NetAddrError::BadMask(e.to_string()))
    }
}

/// Left-aligned run of `bits` one bits, most significant word first.
pub(crate) fn prefix_mask(family: AddressFamily, bits: u32) -> [u32; 4] {
    let mut mask = [0u32; 4];
    let mut remaining = bits.min(family.max_prefix_len());
    for word in mask.iter_mut().take(family.word_count()) {
        let take = remaining.min(32);
        *word = if take == 0 { 0 } else { u32::MAX << (32 - take) };
        remaining -= take;
    }
    mask
}

fn words_to_ip(family: AddressFamily, words: &[u32; 4]) -> IpAddr {
    match family {
        AddressFamily::Inet => IpAddr::V4(Ipv4Addr::from(words[0])),
        AddressFamily::Inet6 => {
            let mut bytes = [0u8; 16];
            for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
                chunk.copy_from_slice(&word.to_be_bytes());
            }
            IpAddr::V6(Ipv6Addr::from(bytes))
        }
    }
}
