use std::net::Ipv4Addr;

/// Legacy single-family host database. Errors are raw `h_errno` values.
pub trait HostDatabase: Send + Sync {
    fn host_by_name(&self, host: &str) -> Result<Vec<Ipv4Addr>, i32>;

    fn host_by_addr(&self, addr: Ipv4Addr) -> Result<String, i32>;
}
