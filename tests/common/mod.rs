#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{system_resolver, write_config, ACCESS_CONFIG};
