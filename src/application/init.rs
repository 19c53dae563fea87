//! Initialize review workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;

/// Create a review workspace at `path`: `.reviews/config.toml` with default
/// settings plus a database carrying the review schema.
pub fn init(path: &Path) -> Result<Workspace> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::default();
    workspace.save_config(&config)?;

    let repository = workspace.open_repository()?;
    log::info!(
        "Initialized review workspace at {} (database {})",
        path.display(),
        repository.path().display()
    );

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config_and_database() {
        let temp = TempDir::new().unwrap();

        let workspace = init(temp.path()).unwrap();

        assert!(workspace.is_initialized());
        assert!(temp.path().join(".reviews/config.toml").exists());
        assert!(temp.path().join("reviews.db").exists());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("store");

        init(&target).unwrap();
        assert!(target.join(".reviews").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
