pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw a secret santa assignment and email every participant their target")]
pub struct CliConfig {
    /// Path to the TOML roster configuration file
    #[arg(short, long)]
    pub config: String,

    /// Write composed messages to this directory instead of sending them
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seed for the random draw (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Validate the config and show a summary without drawing or sending
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;

        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        Ok(())
    }
}
