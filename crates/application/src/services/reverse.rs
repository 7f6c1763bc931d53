use super::resolver::Resolver;
use netaddr_domain::{AddressRecord, NetAddrError};
use std::sync::Arc;
use tracing::{debug, instrument};

impl Resolver {
    /// Looks up the hostname of `record` and caches it on the record.
    ///
    /// With `name_required` (the usual case) a numeric answer is never
    /// accepted: an address without a name fails `NotFound`. A repeat call
    /// always queries again and replaces the cached name.
    #[instrument(skip(self, record), fields(address = %record.ip_string()))]
    pub fn reverse(
        &self,
        record: &mut AddressRecord,
        name_required: bool,
    ) -> Result<Arc<str>, NetAddrError> {
        let hostname: Arc<str> = Arc::from(self.strategy().reverse(record, name_required)?);

        if let Some(previous) = record.hostname() {
            if previous != &*hostname {
                debug!(previous, hostname = %hostname, "Replacing cached hostname");
            }
        }

        record.cache_hostname(hostname.clone());
        debug!(hostname = %hostname, "Reverse lookup successful");
        Ok(hostname)
    }
}
