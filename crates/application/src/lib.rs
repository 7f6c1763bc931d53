//! netaddr Application Layer
//!
//! Platform-service ports and the resolution services built on them.
pub mod ports;
pub mod services;
