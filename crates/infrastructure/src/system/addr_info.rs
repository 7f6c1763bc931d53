use super::gai;
use netaddr_application::ports::{AddrInfoError, AddrInfoHints, AddrInfoService, NameInfoError};
use std::net::SocketAddr;
use tracing::debug;

/// Dual-stack resolver backed by `getaddrinfo` and `getnameinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAddrInfo;

impl AddrInfoService for SystemAddrInfo {
    fn addr_info(
        &self,
        host: &str,
        hints: &AddrInfoHints,
    ) -> Result<Vec<SocketAddr>, AddrInfoError> {
        let mut flags = libc::AI_CANONNAME;
        if hints.numeric_host {
            flags |= libc::AI_NUMERICHOST;
        }

        let addrs = gai::lookup(host, gai::family_constant(hints.family), flags)?;
        debug!(host, count = addrs.len(), "getaddrinfo answered");
        Ok(addrs)
    }

    fn name_info(&self, addr: &SocketAddr, name_required: bool) -> Result<String, NameInfoError> {
        let flags = if name_required { libc::NI_NAMEREQD } else { 0 };

        gai::name_of(addr, flags).map_err(|rc| {
            debug!(%addr, rc, "getnameinfo failed");
            name_info_error(rc)
        })
    }
}

/// Resolver failures keep their `EAI_*` code, the same numbering forward
/// lookups report.
fn name_info_error(rc: libc::c_int) -> NameInfoError {
    match rc {
        libc::EAI_AGAIN | libc::EAI_FAIL | libc::EAI_SYSTEM | libc::EAI_MEMORY => {
            NameInfoError::Transient(rc)
        }
        _ => NameInfoError::NoName,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_failures_keep_eai_code() {
        assert_eq!(
            name_info_error(libc::EAI_AGAIN),
            NameInfoError::Transient(libc::EAI_AGAIN)
        );
        assert_eq!(
            name_info_error(libc::EAI_FAIL),
            NameInfoError::Transient(libc::EAI_FAIL)
        );
        assert_eq!(name_info_error(libc::EAI_NONAME), NameInfoError::NoName);
    }
}
