/// Access Flow Test
///
/// Config file → validation → access list → peer classification

#[path = "../common/mod.rs"]
mod common;
use common::{system_resolver, write_config, ACCESS_CONFIG};

use netaddr_application::services::AccessControlService;
use netaddr_domain::config::ResolverTier;
use netaddr_domain::{AddressFamily, AddressRecord, CliOverrides, Config, ConfigError};

fn load(content: &str) -> Config {
    let file = write_config(content);
    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();
    config.validate().unwrap();
    config
}

fn peer(ip: &str) -> AddressRecord {
    AddressRecord::parse_literal(ip, 0).unwrap()
}

#[test]
fn test_config_drives_classification() {
    let config = load(ACCESS_CONFIG);
    assert_eq!(config.resolver.tier, ResolverTier::Legacy);
    assert_eq!(config.resolver.default_port, 8080);

    let service = AccessControlService::new(system_resolver(config.resolver.tier));
    service.refresh(&config).unwrap();

    assert_eq!(service.find_group(&mut peer("10.9.9.9")), Some(1));
    assert_eq!(service.find_group(&mut peer("10.1.2.3")), Some(2));
    assert_eq!(service.find_group(&mut peer("2001:db8:1::5")), Some(3));
    assert_eq!(service.find_group(&mut peer("192.168.7.200")), Some(4));
    assert_eq!(service.find_group(&mut peer("192.168.8.1")), None);
}

#[test]
fn test_mapped_peer_uses_ipv4_rules() {
    let config = load(ACCESS_CONFIG);
    let service = AccessControlService::new(system_resolver(ResolverTier::Legacy));
    service.refresh(&config).unwrap();

    let mut record = peer("10.1.2.3");
    record.correct_family(AddressFamily::Inet6).unwrap();
    assert_eq!(service.find_group(&mut record), Some(2));
}

#[test]
fn test_subnet_only_list_never_reverse_resolves() {
    let config = load(ACCESS_CONFIG);
    let service = AccessControlService::new(system_resolver(ResolverTier::Legacy));
    service.refresh(&config).unwrap();

    let mut record = peer("203.0.113.1");
    assert_eq!(service.find_group(&mut record), None);
    assert_eq!(record.hostname(), None);
}

#[test]
fn test_bad_entry_keeps_previous_list() {
    let service = AccessControlService::new(system_resolver(ResolverTier::Legacy));
    service.refresh(&load(ACCESS_CONFIG)).unwrap();

    let broken = Config::from_toml(
        r#"
[[access]]
entry = "10.0.0.0/99"
group = 9
"#,
    )
    .unwrap();
    let err = service.refresh(&broken).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAccessEntry { .. }));

    assert_eq!(service.find_group(&mut peer("10.1.2.3")), Some(2));
}

#[test]
fn test_cli_override_beats_file() {
    let file = write_config(ACCESS_CONFIG);
    let overrides = CliOverrides {
        tier: Some(ResolverTier::Modern),
        log_level: Some("trace".to_string()),
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();
    config.validate().unwrap();

    assert_eq!(config.resolver.tier, ResolverTier::Modern);
    assert_eq!(config.logging.level, "trace");
}
