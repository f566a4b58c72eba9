//! Strictly Stars binary.

use anyhow::Result;
use clap::Parser;
use strictly_stars_tui::{Cli, CliCommand, SampleRequest, StarsConfig, logging, run_tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        CliCommand::Play { config, seed } => {
            let mut config = StarsConfig::load_or_default(&config)?;
            if let Some(seed) = seed {
                config = config.with_seed(Some(seed));
            }
            logging::init_file(config.log_file(), config.log_filter())?;
            info!(seed = ?config.seed(), "Launching game");
            run_tui(config).await?;
        }
        CliCommand::Sample {
            numbers,
            bound,
            draws,
            seed,
        } => {
            logging::init_stderr("info");
            let report = SampleRequest::new(numbers, bound, draws, seed).run()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
