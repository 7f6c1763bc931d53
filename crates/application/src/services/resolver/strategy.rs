use super::{LegacyResolver, ModernResolver, ResolveFlags};
use netaddr_domain::{AddressRecord, FamilyHint, NetAddrError};

/// Enum dispatch over the two resolver generations.
pub enum ResolverStrategy {
    Modern(ModernResolver),
    Legacy(LegacyResolver),
}

impl ResolverStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Modern(_) => "modern",
            Self::Legacy(_) => "legacy",
        }
    }

    pub fn lookup(
        &self,
        hostname: &str,
        family: FamilyHint,
        port: u16,
        flags: ResolveFlags,
    ) -> Result<Vec<AddressRecord>, NetAddrError> {
        match self {
            Self::Modern(s) => s.lookup(hostname, family, port, flags),
            Self::Legacy(s) => s.lookup(hostname, family, port, flags),
        }
    }

    pub fn reverse(
        &self,
        record: &AddressRecord,
        name_required: bool,
    ) -> Result<String, NetAddrError> {
        match self {
            Self::Modern(s) => s.reverse(record, name_required),
            Self::Legacy(s) => s.reverse(record),
        }
    }
}
