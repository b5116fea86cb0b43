mod cli;
mod endpoints;
mod fetch;
mod metadata;
mod present;
mod request;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::command::stations::StationsError;
use cli::{command, Cli, Commands};
use endpoints::Endpoints;

const BANNER: &str = r#"
  ________  _________  _______   ____
 / ___/ _ \/ __/ ___/ / ___/ /  /  _/
/ /__/ // / _// /__  / /__/ /___/ /
\___/____/___/\___/  \___/____/___/
"#;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("{BANNER}");

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(1);
    });

    let endpoints = Endpoints::default();

    match &cli.command {
        Commands::Query(options) => match command::query(&endpoints, options).await {
            Ok(body) => println!("{body}"),
            Err(e) => {
                error!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Stations { station_id } => match command::stations(&endpoints, station_id).await
        {
            Ok(report) => println!("{report}"),
            Err(e @ StationsError::NotFound(_)) => {
                println!("{e}");
                std::process::exit(1);
            }
            Err(e) => {
                error!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}
