use crate::subnet::parse_subnet;
use crate::{AddressRecord, NetAddrError, SubnetSpec};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;

/// One configured access entry: an address, subnet or hostname mapped to a
/// client group.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessEntry {
    pub entry: Arc<str>,
    #[serde(rename = "group")]
    pub group_id: i64,
    #[serde(default)]
    pub comment: Option<Arc<str>>,
}

/// Parsed form of an [`AccessEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRule {
    Subnet(SubnetSpec),
    Host(Arc<str>),
}

impl AccessEntry {
    pub fn new(entry: String, group_id: i64, comment: Option<String>) -> Self {
        Self {
            entry: Arc::from(entry.as_str()),
            group_id,
            comment: comment.map(|s| Arc::from(s.as_str())),
        }
    }

    /// Reads the entry as `ip`, `ip/bits`, `ip/netmask`, classful shorthand,
    /// or, when it is not address-shaped, a hostname.
    pub fn parse_rule(&self) -> Result<AccessRule, NetAddrError> {
        let entry = self.entry.trim();
        if entry.is_empty() {
            return Err(NetAddrError::InvalidArgument(
                "access entry cannot be empty".to_string(),
            ));
        }

        let (ip, mask) = match entry.split_once('/') {
            Some((ip, mask)) => (ip, Some(mask)),
            None => (entry, None),
        };

        match parse_subnet(ip, mask) {
            Ok(spec) => Ok(AccessRule::Subnet(spec)),
            Err(e) if e.is_not_an_address() && mask.is_none() => {
                Ok(AccessRule::Host(Arc::from(entry.to_ascii_lowercase())))
            }
            Err(e) => Err(e),
        }
    }
}

/// Maps peers to groups. The most specific matching subnet wins; hostname
/// rules apply only when no subnet matches.
#[derive(Debug, Default)]
pub struct AccessList {
    subnets: Vec<(SubnetSpec, i64)>,
    hosts: Vec<(Arc<str>, i64)>,
}

impl AccessList {
    pub fn new(entries: &[AccessEntry]) -> Result<Self, NetAddrError> {
        let mut list = Self::default();
        for entry in entries {
            list.insert(entry.parse_rule()?, entry.group_id);
        }
        Ok(list)
    }

    pub fn insert(&mut self, rule: AccessRule, group_id: i64) {
        match rule {
            AccessRule::Subnet(spec) => self.subnets.push((spec, group_id)),
            AccessRule::Host(name) => self.hosts.push((name, group_id)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty() && self.hosts.is_empty()
    }

    pub fn has_host_rules(&self) -> bool {
        !self.hosts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subnets.len() + self.hosts.len()
    }

    pub fn find_group(&self, record: &AddressRecord) -> Option<i64> {
        let mut best_match: Option<(u32, i64)> = None;

        for (spec, group_id) in &self.subnets {
            if spec.matches(record) {
                let bits = spec.mask_bits();

                match best_match {
                    None => best_match = Some((bits, *group_id)),
                    Some((existing_bits, _)) if bits > existing_bits => {
                        best_match = Some((bits, *group_id));
                    }
                    _ => {}
                }
            }
        }

        if let Some((_, group_id)) = best_match {
            return Some(group_id);
        }

        let hostname = record.hostname()?;
        self.hosts
            .iter()
            .find(|(rule, _)| host_matches(rule, hostname))
            .map(|(_, group_id)| *group_id)
    }

    pub fn find_group_for_ip(&self, ip: IpAddr) -> Option<i64> {
        self.find_group(&AddressRecord::from_ip(ip, 0))
    }
}

/// Exact name or any subdomain of it, ignoring case and a trailing dot.
fn host_matches(rule: &str, hostname: &str) -> bool {
    let hostname = hostname.trim_end_matches('.').to_ascii_lowercase();
    let rule = rule.trim_end_matches('.');

    hostname == rule
        || hostname
            .strip_suffix(rule)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
