//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod review_service;

pub use manage_config::ConfigService;
pub use review_service::ReviewService;
