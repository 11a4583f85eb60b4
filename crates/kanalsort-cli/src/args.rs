use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "kanalsort")]
#[command(about = "Categorize playlist channels with keyword and country-code rules")]
#[command(version)]
pub struct Cli {
    /// Base directory (default: ~/.kanalsort)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Categorize the configured playlist and write the report
    Run {
        /// Playlist file to read (overrides paths.input)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Report file to write (overrides paths.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a single channel title and print its category
    Classify {
        /// Channel title, e.g. "BeIN Sports 1 [TR]"
        title: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., paths.input)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., paths.output)
        key: String,

        /// New value
        value: String,
    },

    /// List all config values
    List,

    /// Print the config file path
    Path,

    /// Create a default config file
    Init,
}
