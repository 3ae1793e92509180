pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghdash")]
#[command(about = "Build the GitHub activity dashboard data file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every tracked account and write the dashboard JSON
    Fetch {
        /// Output file (defaults to public/data.json)
        #[arg(short, long, env = "OUTPUT_PATH")]
        output: Option<PathBuf>,
    },

    /// Validate the credential pool and show which login each token belongs to
    Tokens,
}
