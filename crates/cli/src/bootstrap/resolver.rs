use netaddr_application::services::Resolver;
use netaddr_domain::Config;
use netaddr_infrastructure::{platform_services, probe_capabilities};
use std::sync::Arc;

pub fn build_resolver(config: &Config) -> Arc<Resolver> {
    let capabilities = probe_capabilities();
    Arc::new(Resolver::select(
        capabilities,
        config.resolver.tier,
        &platform_services(),
    ))
}
