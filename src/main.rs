use anyhow::Result;
use clap::Parser;
use gridcrit::cli::{Cli, Commands};
use gridcrit::commands::score::ScoreConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            path,
            delimiter,
            encoding,
            output,
            config,
        } => gridcrit::commands::score::run_score(ScoreConfig {
            path,
            delimiter,
            encoding,
            output,
            config,
        }),
        Commands::Init { force } => gridcrit::commands::init::init_config(force),
    }
}
