use super::{collect_records, ResolveFlags};
use crate::ports::HostDatabase;
use netaddr_domain::{AddressFamily, AddressRecord, FamilyHint, NetAddrError, RawAddress};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Single-family strategy over the legacy host database. IPv4 only.
///
/// Every host-database failure is wrapped into the name-service status
/// range; only an empty answer maps to `NotFound`.
pub struct LegacyResolver {
    hosts: Arc<dyn HostDatabase>,
}

impl LegacyResolver {
    pub fn new(hosts: Arc<dyn HostDatabase>) -> Self {
        Self { hosts }
    }

    pub fn lookup(
        &self,
        hostname: &str,
        family: FamilyHint,
        port: u16,
        flags: ResolveFlags,
    ) -> Result<Vec<AddressRecord>, NetAddrError> {
        if family.or_inet() != AddressFamily::Inet {
            return Err(NetAddrError::InvalidArgument(
                "legacy resolver only supports IPv4".to_string(),
            ));
        }

        let name: Arc<str> = Arc::from(hostname);
        let to_record = |addr: Ipv4Addr| {
            AddressRecord::new(RawAddress::V4(addr.octets()), port)
                .with_hostname(Some(name.clone()))
        };

        if let Some(addr) = dotted_literal(hostname) {
            debug!(hostname, "Numeric address decoded without lookup");
            return Ok(vec![to_record(addr)]);
        }

        if flags.numeric_host {
            return Err(NetAddrError::BadAddress(hostname.to_string()));
        }

        let addrs = self
            .hosts
            .host_by_name(hostname)
            .map_err(NetAddrError::name_service)?;

        if addrs.is_empty() {
            return Err(NetAddrError::NotFound(hostname.to_string()));
        }

        collect_records(addrs.into_iter().map(to_record))
    }

    pub fn reverse(&self, record: &AddressRecord) -> Result<String, NetAddrError> {
        let addr = match record.raw() {
            RawAddress::V4(bytes) => Ipv4Addr::from(*bytes),
            RawAddress::V6 { .. } => {
                return Err(NetAddrError::InvalidArgument(
                    "legacy reverse lookup only supports IPv4".to_string(),
                ))
            }
        };

        self.hosts
            .host_by_addr(addr)
            .map_err(NetAddrError::name_service)
    }
}

/// A hostname made only of digits and dots, starting with a digit, that is
/// a valid dotted quad.
fn dotted_literal(hostname: &str) -> Option<Ipv4Addr> {
    let numeric = hostname.starts_with(|c: char| c.is_ascii_digit())
        && hostname.bytes().all(|b| b == b'.' || b.is_ascii_digit());
    if !numeric {
        return None;
    }
    Ipv4Addr::from_str(hostname).ok()
}
