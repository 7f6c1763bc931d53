pub mod capabilities;
pub mod host_database;
pub mod name_service;
pub mod service_database;

pub use capabilities::Capabilities;
pub use host_database::HostDatabase;
pub use name_service::{AddrInfoError, AddrInfoHints, AddrInfoService, NameInfoError};
pub use service_database::ServiceDatabase;

use std::sync::Arc;

/// The platform's resolver services, one handle per generation.
#[derive(Clone)]
pub struct PlatformServices {
    pub addr_info: Arc<dyn AddrInfoService>,
    pub hosts: Arc<dyn HostDatabase>,
    pub services: Arc<dyn ServiceDatabase>,
}
