pub mod access_service;
pub mod blocking;
pub mod resolver;
pub mod reverse;

pub use access_service::AccessControlService;
pub use blocking::{resolve_blocking, reverse_blocking};
pub use resolver::{
    LegacyResolver, ModernResolver, Resolution, ResolveFlags, Resolver, ResolverStrategy,
};
