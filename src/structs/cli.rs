use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "aidebugger", version)]
#[clap(about = "AI-powered code debugger", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ~/aidebugger/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
