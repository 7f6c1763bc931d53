#![allow(dead_code)]

use netaddr_application::ports::{
    AddrInfoError, AddrInfoHints, AddrInfoService, Capabilities, HostDatabase, NameInfoError,
    PlatformServices, ServiceDatabase,
};
use netaddr_domain::FamilyHint;
use std::collections::HashMap;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock AddrInfoService
// ============================================================================

#[derive(Clone)]
pub enum AddrInfoReply {
    Addrs(Vec<SocketAddr>),
    Resolver(i32),
    System(i32),
}

#[derive(Default)]
pub struct MockAddrInfo {
    forward: Mutex<HashMap<String, AddrInfoReply>>,
    reverse: Mutex<HashMap<SocketAddr, Result<String, NameInfoError>>>,
    last_hints: Mutex<Option<AddrInfoHints>>,
    last_name_required: Mutex<Option<bool>>,
    reverse_delay: Mutex<Option<Duration>>,
    forward_calls: AtomicUsize,
    reverse_calls: AtomicUsize,
}

impl MockAddrInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_addrs(&self, host: &str, addrs: &[&str]) {
        let addrs = addrs.iter().map(|a| a.parse().unwrap()).collect();
        self.set_reply(host, AddrInfoReply::Addrs(addrs));
    }

    pub fn set_reply(&self, host: &str, reply: AddrInfoReply) {
        self.forward.lock().unwrap().insert(host.to_string(), reply);
    }

    pub fn set_name(&self, addr: &str, reply: Result<&str, NameInfoError>) {
        self.reverse
            .lock()
            .unwrap()
            .insert(addr.parse().unwrap(), reply.map(str::to_string));
    }

    /// Makes every reverse lookup block for `delay` first.
    pub fn set_reverse_delay(&self, delay: Duration) {
        *self.reverse_delay.lock().unwrap() = Some(delay);
    }

    pub fn forward_calls(&self) -> usize {
        self.forward_calls.load(Ordering::SeqCst)
    }

    pub fn reverse_calls(&self) -> usize {
        self.reverse_calls.load(Ordering::SeqCst)
    }

    pub fn last_hints(&self) -> Option<AddrInfoHints> {
        *self.last_hints.lock().unwrap()
    }

    pub fn last_name_required(&self) -> Option<bool> {
        *self.last_name_required.lock().unwrap()
    }
}

impl AddrInfoService for MockAddrInfo {
    fn addr_info(
        &self,
        host: &str,
        hints: &AddrInfoHints,
    ) -> Result<Vec<SocketAddr>, AddrInfoError> {
        self.forward_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_hints.lock().unwrap() = Some(*hints);

        match self.forward.lock().unwrap().get(host).cloned() {
            Some(AddrInfoReply::Addrs(addrs)) => Ok(addrs
                .into_iter()
                .filter(|a| match hints.family {
                    FamilyHint::Unspecified => true,
                    FamilyHint::Inet => a.is_ipv4(),
                    FamilyHint::Inet6 => a.is_ipv6(),
                })
                .collect()),
            Some(AddrInfoReply::Resolver(code)) => Err(AddrInfoError::Resolver(code)),
            Some(AddrInfoReply::System(errno)) => {
                Err(AddrInfoError::System(io::Error::from_raw_os_error(errno)))
            }
            None => Err(AddrInfoError::Resolver(-2)),
        }
    }

    fn name_info(&self, addr: &SocketAddr, name_required: bool) -> Result<String, NameInfoError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_name_required.lock().unwrap() = Some(name_required);

        let delay = *self.reverse_delay.lock().unwrap();
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }

        match self.reverse.lock().unwrap().get(addr).cloned() {
            Some(reply) => reply,
            None if name_required => Err(NameInfoError::NoName),
            None => Ok(addr.ip().to_string()),
        }
    }
}

// ============================================================================
// Mock HostDatabase
// ============================================================================

#[derive(Default)]
pub struct MockHostDatabase {
    hosts: Mutex<HashMap<String, Result<Vec<Ipv4Addr>, i32>>>,
    names: Mutex<HashMap<Ipv4Addr, Result<String, i32>>>,
    calls: AtomicUsize,
}

impl MockHostDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_host(&self, host: &str, reply: Result<Vec<Ipv4Addr>, i32>) {
        self.hosts.lock().unwrap().insert(host.to_string(), reply);
    }

    pub fn set_name(&self, addr: Ipv4Addr, reply: Result<&str, i32>) {
        self.names
            .lock()
            .unwrap()
            .insert(addr, reply.map(str::to_string));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// `HOST_NOT_FOUND`
pub const HOST_NOT_FOUND: i32 = 1;
/// `TRY_AGAIN`
pub const TRY_AGAIN: i32 = 2;

impl HostDatabase for MockHostDatabase {
    fn host_by_name(&self, host: &str) -> Result<Vec<Ipv4Addr>, i32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.hosts
            .lock()
            .unwrap()
            .get(host)
            .cloned()
            .unwrap_or(Err(HOST_NOT_FOUND))
    }

    fn host_by_addr(&self, addr: Ipv4Addr) -> Result<String, i32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names
            .lock()
            .unwrap()
            .get(&addr)
            .cloned()
            .unwrap_or(Err(HOST_NOT_FOUND))
    }
}

// ============================================================================
// Mock ServiceDatabase
// ============================================================================

pub struct MockServiceDatabase {
    services: HashMap<&'static str, u16>,
    calls: AtomicUsize,
}

impl MockServiceDatabase {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockServiceDatabase {
    fn default() -> Self {
        Self {
            services: HashMap::from([("http", 80), ("https", 443), ("ssh", 22)]),
            calls: AtomicUsize::new(0),
        }
    }
}

impl ServiceDatabase for MockServiceDatabase {
    fn port_by_name(&self, name: &str) -> Option<u16> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.services.get(name).copied()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub struct MockPlatform {
    pub addr_info: Arc<MockAddrInfo>,
    pub hosts: Arc<MockHostDatabase>,
    pub services: Arc<MockServiceDatabase>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            addr_info: Arc::new(MockAddrInfo::new()),
            hosts: Arc::new(MockHostDatabase::new()),
            services: Arc::new(MockServiceDatabase::default()),
        }
    }

    pub fn services(&self) -> PlatformServices {
        PlatformServices {
            addr_info: self.addr_info.clone(),
            hosts: self.hosts.clone(),
            services: self.services.clone(),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.addr_info.forward_calls() + self.addr_info.reverse_calls() + self.hosts.calls()
    }
}

pub const DUAL_STACK: Capabilities = Capabilities {
    dual_stack_resolver: true,
    ipv6: true,
};

pub const IPV4_ONLY: Capabilities = Capabilities {
    dual_stack_resolver: false,
    ipv6: false,
};
