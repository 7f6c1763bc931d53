use super::resolver::{Resolution, ResolveFlags, Resolver};
use netaddr_domain::{AddressRecord, FamilyHint, NetAddrError};
use std::io;
use std::sync::Arc;

/// Runs a forward lookup on tokio's blocking pool.
///
/// Lookups block on the platform resolver; async callers should go through
/// here (and add their own timeout) instead of calling [`Resolver::resolve`]
/// on a runtime thread.
pub async fn resolve_blocking(
    resolver: Arc<Resolver>,
    hostname: Option<String>,
    family: FamilyHint,
    port: u16,
    flags: ResolveFlags,
) -> Result<Resolution, NetAddrError> {
    tokio::task::spawn_blocking(move || resolver.resolve(hostname.as_deref(), family, port, flags))
        .await
        .map_err(|e| NetAddrError::Os(io::Error::other(e)))?
}

/// Runs a reverse lookup on tokio's blocking pool and hands the record back
/// with its hostname cached.
pub async fn reverse_blocking(
    resolver: Arc<Resolver>,
    mut record: AddressRecord,
    name_required: bool,
) -> Result<AddressRecord, NetAddrError> {
    tokio::task::spawn_blocking(move || {
        resolver.reverse(&mut record, name_required)?;
        Ok(record)
    })
    .await
    .map_err(|e| NetAddrError::Os(io::Error::other(e)))?
}
