use super::SubnetSpec;
use crate::{AddressFamily, AddressRecord, RawAddress};

/// Whether `record` lies inside `spec`. Never fails; mismatched families
/// simply do not match.
///
/// An IPv4 subnet also matches IPv4-mapped IPv6 records, so one IPv4 rule
/// covers peers seen over either family. An IPv6 subnet never matches a
/// mapped record.
pub fn subnet_contains(spec: &SubnetSpec, record: &AddressRecord) -> bool {
    let raw = record.raw();
    let network = spec.network_words();
    let mask = spec.mask_words();

    match (spec.family(), raw) {
        (AddressFamily::Inet, RawAddress::V4(_)) => raw.words()[0] & mask[0] == network[0],
        (AddressFamily::Inet, RawAddress::V6 { .. }) => raw
            .mapped_ipv4()
            .is_some_and(|v4| u32::from(v4) & mask[0] == network[0]),
        (AddressFamily::Inet6, RawAddress::V6 { .. }) => {
            raw.mapped_ipv4().is_none()
                && raw
                    .words()
                    .iter()
                    .zip(mask.iter().zip(network))
                    .all(|(word, (mask, network))| word & mask == *network)
        }
        (AddressFamily::Inet6, RawAddress::V4(_)) => false,
    }
}
