//! Bindings from the application ports to the host's C resolver.

pub mod addr_info;
pub mod capabilities;
mod gai;
pub mod host_database;
pub mod service_database;

pub use addr_info::SystemAddrInfo;
pub use capabilities::probe_capabilities;
pub use host_database::SystemHostDatabase;
pub use service_database::SystemServiceDatabase;

use netaddr_application::ports::PlatformServices;
use std::sync::Arc;

/// The system implementation of every resolver port.
pub fn platform_services() -> PlatformServices {
    PlatformServices {
        addr_info: Arc::new(SystemAddrInfo),
        hosts: Arc::new(SystemHostDatabase),
        services: Arc::new(SystemServiceDatabase),
    }
}
