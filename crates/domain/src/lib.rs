//! netaddr Domain Layer
//!
//! Address records, `host[:port]` parsing, subnet parsing and matching.
pub mod access_list;
pub mod address_parser;
pub mod address_record;
pub mod config;
pub mod errors;
pub mod family;
pub mod subnet;

pub use access_list::{AccessEntry, AccessList, AccessRule};
pub use address_parser::{parse_addr_port, HostPort};
pub use address_record::{AddressMeta, AddressRecord, RawAddress, ANY_ADDR};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{NetAddrError, OS_START_SYSERR};
pub use family::{AddressFamily, FamilyHint};
pub use subnet::{parse_subnet, subnet_contains, SubnetSpec};
