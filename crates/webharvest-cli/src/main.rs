mod cli;
mod commands;

use clap::Parser;

use crate::cli::Cli;
use webharvest::LogConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let console_level = if cli.verbose > 0 { "DEBUG" } else { "INFO" };
    let config = LogConfig {
        filename: cli.log_file.clone(),
        console_level: console_level.into(),
        ..LogConfig::default()
    };
    if let Err(err) = webharvest::configure_logging(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
