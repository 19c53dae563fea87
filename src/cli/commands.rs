//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reviews")]
#[command(about = "Submit reviews and list them by sentiment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new review store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Submit a review; its sentiment is derived from the text
    Add {
        /// Review text
        text: String,

        /// Print the stored review as JSON
        #[arg(long)]
        json: bool,
    },

    /// List reviews with the given sentiment
    List {
        /// neutral, positive or negative (default: config value, initially negative)
        #[arg(short, long)]
        sentiment: Option<String>,

        /// Print reviews as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the sentiment a text would receive without storing it
    Classify {
        /// Text to classify
        text: String,
    },

    /// Show review counts per sentiment
    Stats,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
