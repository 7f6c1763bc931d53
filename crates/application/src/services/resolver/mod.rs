mod legacy;
mod modern;
mod strategy;

pub use legacy::LegacyResolver;
pub use modern::ModernResolver;
pub use strategy::ResolverStrategy;

use crate::ports::{Capabilities, PlatformServices, ServiceDatabase};
use netaddr_domain::config::ResolverTier;
use netaddr_domain::{AddressRecord, FamilyHint, NetAddrError};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Per-call lookup options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveFlags {
    /// Accept numeric literals only; never query the name service
    pub numeric_host: bool,
}

/// Ordered records produced by one forward lookup.
///
/// Order is exactly what the platform resolver returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    records: Vec<AddressRecord>,
}

impl Resolution {
    pub(crate) fn new(records: Vec<AddressRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AddressRecord] {
        &self.records
    }

    /// First record; every successful resolution has one.
    pub fn primary(&self) -> Option<&AddressRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<AddressRecord> {
        self.records
    }

    /// Tags every record with service `name` and its already looked-up
    /// `port`.
    pub fn set_service(&mut self, name: &str, port: u16) {
        for record in &mut self.records {
            record.set_service(name, port);
        }
    }
}

impl IntoIterator for Resolution {
    type Item = AddressRecord;
    type IntoIter = std::vec::IntoIter<AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Resolution {
    type Item = &'a AddressRecord;
    type IntoIter = std::slice::Iter<'a, AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Forward, reverse and service lookups over one resolver strategy.
pub struct Resolver {
    strategy: ResolverStrategy,
    services: Arc<dyn ServiceDatabase>,
}

impl Resolver {
    pub fn new(strategy: ResolverStrategy, services: Arc<dyn ServiceDatabase>) -> Self {
        Self { strategy, services }
    }

    /// Picks the strategy once, from configuration and the capability probe.
    pub fn select(
        capabilities: Capabilities,
        tier: ResolverTier,
        platform: &PlatformServices,
    ) -> Self {
        let modern = match tier {
            ResolverTier::Auto => capabilities.supports_modern(),
            ResolverTier::Modern => {
                if !capabilities.supports_modern() {
                    warn!(
                        ?capabilities,
                        "Dual-stack resolver forced by configuration but not detected"
                    );
                }
                true
            }
            ResolverTier::Legacy => false,
        };

        let strategy = if modern {
            ResolverStrategy::Modern(ModernResolver::new(platform.addr_info.clone()))
        } else {
            ResolverStrategy::Legacy(LegacyResolver::new(platform.hosts.clone()))
        };

        info!(strategy = strategy.name(), %tier, "Resolver strategy selected");
        Self::new(strategy, platform.services.clone())
    }

    pub fn strategy(&self) -> &ResolverStrategy {
        &self.strategy
    }

    /// Resolves `hostname` into an ordered list of records carrying `port`.
    ///
    /// Without a hostname the result is a single any-address record of the
    /// requested family (IPv4 when unspecified) and no name service is
    /// queried.
    #[instrument(skip(self), fields(strategy = self.strategy.name()))]
    pub fn resolve(
        &self,
        hostname: Option<&str>,
        family: FamilyHint,
        port: u16,
        flags: ResolveFlags,
    ) -> Result<Resolution, NetAddrError> {
        let Some(hostname) = hostname else {
            let record = AddressRecord::wildcard(family.or_inet(), port);
            debug!(address = %record, "No hostname; using wildcard address");
            return Ok(Resolution::new(vec![record]));
        };

        if hostname.is_empty() {
            return Err(NetAddrError::InvalidArgument(
                "hostname cannot be empty".to_string(),
            ));
        }

        let records = self.strategy.lookup(hostname, family, port, flags)?;
        debug!(count = records.len(), "Hostname resolved");
        Ok(Resolution::new(records))
    }

    /// Port registered for service `name`.
    pub fn service_port(&self, name: Option<&str>) -> Result<u16, NetAddrError> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(NetAddrError::InvalidArgument(
                    "service name is required".to_string(),
                ))
            }
        };

        let port = self
            .services
            .port_by_name(name)
            .ok_or_else(|| NetAddrError::NotFound(format!("service {name}")))?;
        debug!(service = name, port, "Service resolved");
        Ok(port)
    }

    /// Looks up service `name` and stores its name and port on `record`.
    pub fn apply_service(
        &self,
        record: &mut AddressRecord,
        name: Option<&str>,
    ) -> Result<u16, NetAddrError> {
        let port = self.service_port(name)?;
        if let Some(name) = name {
            record.set_service(name, port);
        }
        Ok(port)
    }
}

/// Collects records into storage reserved up front, so allocation failure
/// surfaces as an error rather than an abort.
pub(crate) fn collect_records<I>(records: I) -> Result<Vec<AddressRecord>, NetAddrError>
where
    I: ExactSizeIterator<Item = AddressRecord>,
{
    let mut out = Vec::new();
    out.try_reserve_exact(records.len())
        .map_err(|_| NetAddrError::OutOfMemory)?;
    out.extend(records);
    Ok(out)
}
