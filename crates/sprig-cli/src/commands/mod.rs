//! CLI definition and per-command modules.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod branches;
pub mod completions;
pub mod create;
pub mod current;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(
    name = "sprig",
    version,
    about = "Git branch queries and creation for build scripts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the currently checked out branch
    Current {
        /// Path to the repository (searched upward from here)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Create a branch at the current HEAD commit
    Create {
        /// Name of the branch to create
        name: String,

        /// Path to the repository (searched upward from here)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Check out the new branch after creating it
        #[arg(long)]
        checkout: bool,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// List local and remote-tracking branches
    Branches {
        /// Path to the repository (searched upward from here)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
