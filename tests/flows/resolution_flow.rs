/// Resolution Flow Test
///
/// Token → parse → resolve on the system resolver → subnet test

#[path = "../common/mod.rs"]
mod common;
use common::system_resolver;

use netaddr_application::services::{resolve_blocking, reverse_blocking, ResolveFlags};
use netaddr_domain::config::ResolverTier;
use netaddr_domain::{parse_addr_port, parse_subnet, subnet_contains, AddressFamily, FamilyHint};

const NUMERIC: ResolveFlags = ResolveFlags { numeric_host: true };

// ============================================================================
// Forward resolution
// ============================================================================

#[tokio::test]
async fn test_token_to_matching_record() {
    let parts = parse_addr_port("127.0.0.1:8080").unwrap();
    let resolver = system_resolver(ResolverTier::Legacy);

    let resolution = resolve_blocking(
        resolver,
        parts.host,
        FamilyHint::Inet,
        parts.port.unwrap(),
        NUMERIC,
    )
    .await
    .unwrap();

    let record = resolution.primary().unwrap();
    assert_eq!(record.to_socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(record.hostname(), Some("127.0.0.1"));

    let loopback = parse_subnet("127.0.0.0", Some("8")).unwrap();
    assert!(subnet_contains(&loopback, record));
    let private = parse_subnet("10", None).unwrap();
    assert!(!subnet_contains(&private, record));
}

#[tokio::test]
async fn test_bracketed_token_on_modern_tier() {
    let parts = parse_addr_port("[::1]:443").unwrap();
    assert_eq!(parts.host.as_deref(), Some("::1"));

    let resolver = system_resolver(ResolverTier::Modern);
    let resolution = resolve_blocking(
        resolver,
        parts.host,
        FamilyHint::Unspecified,
        parts.port.unwrap(),
        NUMERIC,
    )
    .await
    .unwrap();

    let record = resolution.primary().unwrap();
    assert_eq!(record.family(), AddressFamily::Inet6);
    assert_eq!(record.meta().ipaddr_len, 16);

    let v6_loopback = parse_subnet("::1", None).unwrap();
    assert!(subnet_contains(&v6_loopback, record));
    let v4_loopback = parse_subnet("127.0.0.0", Some("8")).unwrap();
    assert!(!subnet_contains(&v4_loopback, record));
}

#[tokio::test]
async fn test_bare_port_gives_wildcard() {
    let parts = parse_addr_port("9000").unwrap();
    assert_eq!(parts.host, None);

    for tier in [ResolverTier::Modern, ResolverTier::Legacy] {
        let resolution = resolve_blocking(
            system_resolver(tier),
            parts.host.clone(),
            FamilyHint::Inet6,
            parts.port.unwrap(),
            ResolveFlags::default(),
        )
        .await
        .unwrap();

        assert_eq!(resolution.len(), 1);
        let record = resolution.primary().unwrap();
        assert!(record.is_wildcard());
        assert_eq!(record.canonical_text(), "::");
        assert_eq!(record.port(), 9000);
    }
}

#[tokio::test]
async fn test_mapped_record_matches_ipv4_subnet() {
    let resolution = resolve_blocking(
        system_resolver(ResolverTier::Legacy),
        Some("192.0.2.10".to_string()),
        FamilyHint::Inet,
        0,
        NUMERIC,
    )
    .await
    .unwrap();

    let mut record = resolution.into_records().remove(0);
    record.correct_family(AddressFamily::Inet6).unwrap();
    assert!(record.is_ipv4_mapped());
    assert_eq!(record.ip_string(), "192.0.2.10");

    let subnet = parse_subnet("192.0.2.0", Some("255.255.255.0")).unwrap();
    assert!(subnet_contains(&subnet, &record));
}

// ============================================================================
// Reverse resolution
// ============================================================================

#[tokio::test]
async fn test_reverse_numeric_fallback_caches_name() {
    let resolver = system_resolver(ResolverTier::Modern);
    let record = resolve_blocking(
        resolver.clone(),
        Some("127.0.0.1".to_string()),
        FamilyHint::Inet,
        0,
        NUMERIC,
    )
    .await
    .unwrap()
    .into_records()
    .remove(0);

    let record = reverse_blocking(resolver, record, false).await.unwrap();
    assert!(!record.hostname().unwrap_or_default().is_empty());
}
