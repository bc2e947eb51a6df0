use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "javalyzer")]
#[clap(about = "AI-assisted Java code review with a heuristic fallback", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (defaults to ~/.javalyzer/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
