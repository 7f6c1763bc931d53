//! Configuration module for netaddr
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Resolver tier selection and defaults
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, ResolverTier};
pub use root::{CliOverrides, Config};
