pub mod mock_services;

pub use mock_services::*;
