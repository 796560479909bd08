use crate::config::script::OUTPUT_FORMATS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "scoreboard")]
#[command(about = "Replay a match script and print the live scoreboard summary")]
pub struct CliConfig {
    /// Path to the TOML match script
    #[arg(short, long)]
    pub script: String,

    /// Override the script's output format (text, json, csv)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Compare team names case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("script", &self.script)?;
        if let Some(format) = &self.format {
            validate_one_of("format", format, &OUTPUT_FORMATS)?;
        }
        Ok(())
    }
}
