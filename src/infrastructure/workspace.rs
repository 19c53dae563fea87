//! Review workspace discovery and layout

use crate::error::{Result, ReviewError};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, SqliteRepository};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory holding `.reviews/config.toml` and, by default, the database
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace root.
    /// Checks REVIEWS_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("REVIEWS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(Workspace::new(path));
            }
            return Err(ReviewError::Config(format!(
                "REVIEWS_ROOT is set to '{}' but no .reviews directory found. \
                Run 'reviews init' in that directory or unset REVIEWS_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the first directory with a `.reviews` directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_workspace_dir(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .ok_or_else(|| ReviewError::NotInitialized(start.to_path_buf()))
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    /// Create the `.reviews` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let dir = self.root.join(WORKSPACE_DIR);

        if dir.exists() {
            return Err(ReviewError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Open the configured database, bootstrapping its schema
    pub fn open_repository(&self) -> Result<SqliteRepository> {
        let config = self.load_config()?;
        SqliteRepository::open(config.database_path(&self.root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sentiment;
    use crate::infrastructure::ReviewRepository;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_dir() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        assert!(!workspace.is_initialized());
        workspace.initialize().unwrap();
        assert!(workspace.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        workspace.initialize().unwrap();
        assert!(workspace.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        Workspace::new(temp.path().to_path_buf()).initialize().unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = Workspace::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_without_workspace() {
        let temp = TempDir::new().unwrap();

        match Workspace::discover_from(temp.path()).unwrap_err() {
            ReviewError::NotInitialized(path) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotInitialized error, got {:?}", other),
        }
    }

    #[test]
    fn test_open_repository_uses_config() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());
        workspace.initialize().unwrap();
        workspace
            .save_config(&Config {
                database: PathBuf::from("data.sqlite"),
                ..Config::default()
            })
            .unwrap();

        let repo = workspace.open_repository().unwrap();
        assert_eq!(repo.path(), temp.path().join("data.sqlite"));
        assert!(repo.list_by_sentiment(Sentiment::Neutral).unwrap().is_empty());
    }
}
