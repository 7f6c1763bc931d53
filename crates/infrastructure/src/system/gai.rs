use netaddr_application::ports::AddrInfoError;
use netaddr_domain::FamilyHint;
use socket2::{SockAddr, SockAddrStorage};
use std::ffi::{CStr, CString};
use std::io;
use std::mem;
use std::net::SocketAddr;
use std::ptr;

/// `NI_MAXHOST`; not exported by every libc target.
const NI_MAXHOST: usize = 1025;

/// Owns a list returned by `getaddrinfo`.
struct AddrInfoList(*mut libc::addrinfo);

impl AddrInfoList {
    fn iter(&self) -> impl Iterator<Item = &libc::addrinfo> {
        let mut next = self.0;
        std::iter::from_fn(move || {
            // SAFETY: every node comes from the list getaddrinfo built and
            // stays alive until `self` is dropped.
            let node = unsafe { next.as_ref()? };
            next = node.ai_next;
            Some(node)
        })
    }
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { libc::freeaddrinfo(self.0) }
        }
    }
}

pub(crate) fn family_constant(family: FamilyHint) -> libc::c_int {
    match family {
        FamilyHint::Unspecified => libc::AF_UNSPEC,
        FamilyHint::Inet => libc::AF_INET,
        FamilyHint::Inet6 => libc::AF_INET6,
    }
}

/// Runs `getaddrinfo` for stream sockets and returns the addresses in the
/// order the resolver produced them.
pub(crate) fn lookup(
    host: &str,
    family: libc::c_int,
    flags: libc::c_int,
) -> Result<Vec<SocketAddr>, AddrInfoError> {
    let Ok(c_host) = CString::new(host) else {
        return Err(AddrInfoError::Resolver(libc::EAI_NONAME));
    };

    // SAFETY: all-zero is the documented "no hints" value for addrinfo.
    let mut hints: libc::addrinfo = unsafe { mem::zeroed() };
    hints.ai_flags = flags;
    hints.ai_family = family;
    hints.ai_socktype = libc::SOCK_STREAM;

    let mut res: *mut libc::addrinfo = ptr::null_mut();
    let rc = unsafe { libc::getaddrinfo(c_host.as_ptr(), ptr::null(), &hints, &mut res) };
    let list = AddrInfoList(res);

    if rc != 0 {
        if rc == libc::EAI_SYSTEM {
            return Err(AddrInfoError::System(io::Error::last_os_error()));
        }
        return Err(AddrInfoError::Resolver(rc));
    }

    Ok(list.iter().filter_map(to_socket_addr).collect())
}

fn to_socket_addr(node: &libc::addrinfo) -> Option<SocketAddr> {
    if node.ai_addr.is_null() {
        return None;
    }

    let mut storage = SockAddrStorage::zeroed();
    let len = node.ai_addrlen.min(storage.size_of());
    // SAFETY: `len` never exceeds either buffer and the family tag is copied
    // along with the address body.
    let addr = unsafe {
        ptr::copy_nonoverlapping(
            node.ai_addr.cast::<u8>(),
            (&mut storage as *mut SockAddrStorage).cast::<u8>(),
            len as usize,
        );
        SockAddr::new(storage, len)
    };
    addr.as_socket()
}

/// Runs `getnameinfo` for the host part only. Errors are raw `EAI_*` codes.
pub(crate) fn name_of(addr: &SocketAddr, flags: libc::c_int) -> Result<String, libc::c_int> {
    let sock = SockAddr::from(*addr);
    let mut host = [0 as libc::c_char; NI_MAXHOST];

    let rc = unsafe {
        libc::getnameinfo(
            sock.as_ptr().cast::<libc::sockaddr>(),
            sock.len(),
            host.as_mut_ptr(),
            host.len() as libc::socklen_t,
            ptr::null_mut(),
            0,
            flags,
        )
    };
    if rc != 0 {
        return Err(rc);
    }

    // SAFETY: on success getnameinfo wrote a NUL-terminated string.
    let name = unsafe { CStr::from_ptr(host.as_ptr()) };
    Ok(name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_lookup_skips_name_service() {
        let addrs = lookup("127.0.0.1", libc::AF_INET, libc::AI_NUMERICHOST).unwrap();
        assert_eq!(addrs, vec!["127.0.0.1:0".parse::<SocketAddr>().unwrap()]);
    }

    #[test]
    fn test_interior_nul_is_no_name() {
        let err = lookup("bad\0host", libc::AF_UNSPEC, 0).unwrap_err();
        assert!(matches!(err, AddrInfoError::Resolver(code) if code == libc::EAI_NONAME));
    }

    #[test]
    fn test_numeric_name_of_loopback() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        assert_eq!(name_of(&addr, libc::NI_NUMERICHOST).unwrap(), "127.0.0.1");
    }
}
