use super::gai;
use netaddr_application::ports::{AddrInfoError, HostDatabase};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::debug;

const HOST_NOT_FOUND: i32 = 1;
const TRY_AGAIN: i32 = 2;
const NO_RECOVERY: i32 = 3;

/// IPv4-only host database.
///
/// Answers come from the same name service switch as `gethostbyname`, with
/// resolver codes folded into `h_errno` values.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostDatabase;

impl HostDatabase for SystemHostDatabase {
    fn host_by_name(&self, host: &str) -> Result<Vec<Ipv4Addr>, i32> {
        let addrs = gai::lookup(host, libc::AF_INET, 0).map_err(|e| match e {
            AddrInfoError::System(err) => {
                debug!(host, error = %err, "Host database lookup failed");
                NO_RECOVERY
            }
            AddrInfoError::Resolver(rc) => h_errno(rc),
        })?;

        let mut v4 = Vec::with_capacity(addrs.len());
        for addr in addrs {
            if let IpAddr::V4(ip) = addr.ip() {
                if !v4.contains(&ip) {
                    v4.push(ip);
                }
            }
        }
        Ok(v4)
    }

    fn host_by_addr(&self, addr: Ipv4Addr) -> Result<String, i32> {
        gai::name_of(&SocketAddr::from((addr, 0)), libc::NI_NAMEREQD).map_err(h_errno)
    }
}

fn h_errno(rc: libc::c_int) -> i32 {
    match rc {
        libc::EAI_AGAIN => TRY_AGAIN,
        libc::EAI_FAIL | libc::EAI_SYSTEM => NO_RECOVERY,
        _ => HOST_NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_codes_fold_into_h_errno() {
        assert_eq!(h_errno(libc::EAI_NONAME), HOST_NOT_FOUND);
        assert_eq!(h_errno(libc::EAI_AGAIN), TRY_AGAIN);
        assert_eq!(h_errno(libc::EAI_FAIL), NO_RECOVERY);
    }
}
