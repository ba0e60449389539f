use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridcrit")]
#[command(about = "Criticality index calculator for electrical substations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score substations and write the augmented table back
    Score {
        /// Table to score (defaults to the configured io.path)
        path: Option<PathBuf>,

        /// Field delimiter, a single ASCII character
        #[arg(long)]
        delimiter: Option<char>,

        /// Text encoding label (latin-1, windows-1252, utf-8, ...)
        #[arg(long)]
        encoding: Option<String>,

        /// Write results here instead of overwriting the input in place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .gridcrit.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
