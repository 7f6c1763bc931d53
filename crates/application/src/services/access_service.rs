use super::resolver::Resolver;
use netaddr_domain::{AccessList, AddressRecord, Config, ConfigError};
use std::sync::{Arc, RwLock};
use tracing::{debug, instrument};

/// Keeps the configured access list and classifies peers against it.
pub struct AccessControlService {
    resolver: Arc<Resolver>,
    list: RwLock<Arc<AccessList>>,
}

impl AccessControlService {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self {
            resolver,
            list: RwLock::new(Arc::new(AccessList::default())),
        }
    }

    /// Rebuilds the list from configuration. On error the previous list
    /// stays in place.
    #[instrument(skip(self, config))]
    pub fn refresh(&self, config: &Config) -> Result<(), ConfigError> {
        let list = Arc::new(config.access_list()?);
        let entries = list.len();

        match self.list.write() {
            Ok(mut guard) => *guard = list,
            Err(poisoned) => *poisoned.into_inner() = list,
        }
        debug!(entries, "Access list refreshed");
        Ok(())
    }

    /// Group of `record`, or `None` when nothing matches.
    ///
    /// Subnet rules are tried first. Hostname rules need the peer's name; if
    /// the record has none it is looked up (and cached) first, and a failed
    /// lookup just means no hostname rule can match. The lookup runs against
    /// a snapshot of the list, so a concurrent refresh never waits on it.
    #[instrument(skip(self, record), fields(address = %record.ip_string()))]
    pub fn find_group(&self, record: &mut AddressRecord) -> Option<i64> {
        let list = self.snapshot();

        if let Some(group) = list.find_group(record) {
            return Some(group);
        }

        if record.hostname().is_some() || !list.has_host_rules() {
            return None;
        }

        match self.resolver.reverse(record, true) {
            Ok(_) => list.find_group(record),
            Err(e) => {
                debug!(error = %e, "No hostname for peer");
                None
            }
        }
    }

    fn snapshot(&self) -> Arc<AccessList> {
        match self.list.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }
}
