use super::{collect_records, ResolveFlags};
use crate::ports::{AddrInfoError, AddrInfoHints, AddrInfoService, NameInfoError};
use netaddr_domain::{AddressRecord, FamilyHint, NetAddrError};
use std::sync::Arc;
use tracing::debug;

/// Dual-stack strategy over `getaddrinfo`/`getnameinfo`.
///
/// `EAI_SYSTEM` surfaces as the underlying OS error; every other resolver
/// code is wrapped into the name-service status range.
pub struct ModernResolver {
    service: Arc<dyn AddrInfoService>,
}

impl ModernResolver {
    pub fn new(service: Arc<dyn AddrInfoService>) -> Self {
        Self { service }
    }

    pub fn lookup(
        &self,
        hostname: &str,
        family: FamilyHint,
        port: u16,
        flags: ResolveFlags,
    ) -> Result<Vec<AddressRecord>, NetAddrError> {
        let hints = AddrInfoHints {
            family,
            numeric_host: flags.numeric_host,
        };

        let addrs = self
            .service
            .addr_info(hostname, &hints)
            .map_err(|e| match e {
                AddrInfoError::System(err) => NetAddrError::Os(err),
                AddrInfoError::Resolver(code) => {
                    debug!(hostname, code, "Dual-stack lookup failed");
                    NetAddrError::name_service(code)
                }
            })?;

        if addrs.is_empty() {
            return Err(NetAddrError::NotFound(hostname.to_string()));
        }

        let name: Arc<str> = Arc::from(hostname);
        collect_records(addrs.into_iter().map(|addr| {
            let mut record =
                AddressRecord::from_socket_addr(addr).with_hostname(Some(name.clone()));
            record.set_port(port);
            record
        }))
    }

    pub fn reverse(
        &self,
        record: &AddressRecord,
        name_required: bool,
    ) -> Result<String, NetAddrError> {
        self.service
            .name_info(&record.to_socket_addr(), name_required)
            .map_err(|e| match e {
                NameInfoError::NoName => NetAddrError::NotFound(record.ip_string()),
                NameInfoError::Transient(code) => NetAddrError::name_service(code),
            })
    }
}
