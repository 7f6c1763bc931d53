use super::gai;
use netaddr_application::ports::Capabilities;
use socket2::{Domain, Socket, Type};
use tracing::debug;

/// Probes once for `getaddrinfo` IPv6 support and for IPv6 sockets.
pub fn probe_capabilities() -> Capabilities {
    let dual_stack_resolver =
        gai::lookup("::1", libc::AF_INET6, libc::AI_NUMERICHOST).is_ok_and(|a| !a.is_empty());

    let ipv6 = match Socket::new(Domain::IPV6, Type::DGRAM, None) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "IPv6 sockets unavailable");
            false
        }
    };

    let caps = Capabilities {
        dual_stack_resolver,
        ipv6,
    };
    debug!(?caps, "Platform capabilities probed");
    caps
}
