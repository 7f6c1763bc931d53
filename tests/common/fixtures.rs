use netaddr_application::services::Resolver;
use netaddr_domain::config::ResolverTier;
use netaddr_infrastructure::{platform_services, probe_capabilities};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Subnet-only access list: no rule needs a reverse lookup.
pub const ACCESS_CONFIG: &str = r#"
[logging]
level = "debug"

[resolver]
tier = "legacy"
default_port = 8080

[[access]]
entry = "10.0.0.0/8"
group = 1
comment = "office"

[[access]]
entry = "10.1.2.0/24"
group = 2

[[access]]
entry = "2001:db8::/32"
group = 3

[[access]]
entry = "192.168.7"
group = 4
comment = "classful shorthand"
"#;

pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

pub fn system_resolver(tier: ResolverTier) -> Arc<Resolver> {
    Arc::new(Resolver::select(
        probe_capabilities(),
        tier,
        &platform_services(),
    ))
}
