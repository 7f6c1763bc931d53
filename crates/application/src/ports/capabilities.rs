/// Platform facts probed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// `getaddrinfo`/`getnameinfo` are available
    pub dual_stack_resolver: bool,
    /// The host can create IPv6 sockets
    pub ipv6: bool,
}

impl Capabilities {
    /// The dual-stack resolver is only worth using with IPv6 present.
    pub fn supports_modern(&self) -> bool {
        self.dual_stack_resolver && self.ipv6
    }
}
