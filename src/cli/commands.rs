//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Singer tap for the Nikabot API
#[derive(Parser, Debug)]
#[command(name = "tap-nikabot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Discover streams and print the catalog
    #[arg(short, long)]
    pub discover: bool,

    /// Catalog file selecting the streams to sync
    #[arg(long, visible_alias = "properties")]
    pub catalog: Option<PathBuf>,

    /// State file from a previous run (JSON)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Write the final state to this file
    #[arg(long)]
    pub state_output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
