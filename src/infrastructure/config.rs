//! Configuration management

use crate::domain::{Sentiment, DEFAULT_SENTIMENT_FILTER};
use crate::error::{Result, ReviewError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the workspace marker directory holding `config.toml`
pub const WORKSPACE_DIR: &str = ".reviews";

const DEFAULT_DATABASE: &str = "reviews.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file, relative paths resolve against the workspace root
    #[serde(default = "default_database")]
    pub database: PathBuf,
    /// Filter applied by `list` when no sentiment is given
    #[serde(default = "default_sentiment")]
    pub default_sentiment: Sentiment,
    pub created: DateTime<Utc>,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

fn default_sentiment() -> Sentiment {
    DEFAULT_SENTIMENT_FILTER
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: default_database(),
            default_sentiment: default_sentiment(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .reviews/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReviewError::NotInitialized(path.to_path_buf())
            } else {
                ReviewError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ReviewError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .reviews/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace = path.join(WORKSPACE_DIR);

        if !workspace.exists() {
            fs::create_dir(&workspace)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(workspace.join("config.toml"), contents)?;

        Ok(())
    }

    /// Absolute location of the database for a workspace rooted at `root`
    pub fn database_path(&self, root: &Path) -> PathBuf {
        if self.database.is_absolute() {
            self.database.clone()
        } else {
            root.join(&self.database)
        }
    }
}
