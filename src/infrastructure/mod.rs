//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod repository;
pub mod workspace;

pub use config::Config;
pub use repository::{ReviewRepository, SqliteRepository};
pub use workspace::Workspace;
