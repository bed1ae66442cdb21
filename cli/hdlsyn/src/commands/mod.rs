//! CLI command implementations.

pub mod build;
pub mod init;
pub mod modules;

use clap::ValueEnum;

/// Output format shared by the printing commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    Toml,
    Json,
}
