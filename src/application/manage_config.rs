//! Config management use case

use crate::domain::Sentiment;
use crate::error::{Result, ReviewError};
use crate::infrastructure::{Config, Workspace};
use std::path::PathBuf;

/// Service for reading and changing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "database" => Ok(config.database.display().to_string()),
            "default_sentiment" => Ok(config.default_sentiment.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ReviewError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: database, default_sentiment, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "database" => {
                if value.trim().is_empty() {
                    return Err(ReviewError::Config(
                        "Database path must not be empty".to_string(),
                    ));
                }
                config.database = PathBuf::from(value);
            }
            "default_sentiment" => {
                config.default_sentiment = value.parse::<Sentiment>()?;
            }
            "created" => {
                return Err(ReviewError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ReviewError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: database, default_sentiment",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        log::info!("Set {} = {}", key, value);
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
