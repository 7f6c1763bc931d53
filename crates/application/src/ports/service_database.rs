/// Service name to port lookup (`/etc/services`).
pub trait ServiceDatabase: Send + Sync {
    fn port_by_name(&self, name: &str) -> Option<u16>;
}
