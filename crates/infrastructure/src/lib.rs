pub mod system;

pub use system::{platform_services, probe_capabilities};
