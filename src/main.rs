mod cli;
mod config;
mod error;
mod score;
mod store;
mod types;
mod update;

use crate::error::IndexError;
use clap::Parser;
use std::time::Duration;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_FAILURE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<i32, IndexError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        cli::Commands::Update(cmd) => {
            let config = config::Config::load()?;

            let selection = match cmd.agency {
                Some(agency_id) => store::Selection::Agency {
                    agency_id,
                    year: cmd.year,
                },
                None => store::Selection::All,
            };
            let options = update::RunOptions {
                dry_run: cmd.dry_run,
                throttle: Duration::from_millis(config.throttle_ms),
            };

            let store = store::RecordStore::connect(&config).await?;
            println!("updating transparency index for {selection}...");

            // Close the connection on failure paths too before surfacing
            // the error.
            let outcome = update::run(&store, &selection, &options).await;
            store.close().await;
            let summary = outcome?;

            println!(
                "done: {} records scored, {} skipped",
                summary.processed, summary.skipped
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            let code = match e {
                IndexError::MissingEnv(_) | IndexError::InvalidConfig { .. } => {
                    exit_code::CONFIG_FAILURE
                }
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
