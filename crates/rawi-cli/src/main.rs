//! Rawi - extract structured author biographies from Arabic PDF documents.

use clap::Parser;
use rawi_cli::commands;
use rawi_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> rawi_cli::Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|_| Config::default());

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, &config, &data_dir, &formatter).await?;
        }
        Command::Get(args) => {
            commands::execute_get(args, &data_dir, &formatter).await?;
        }
        Command::Search(args) => {
            commands::execute_search(args, &data_dir, &formatter).await?;
        }
        Command::List => {
            commands::execute_list(&data_dir, &formatter).await?;
        }
        Command::Export(args) => {
            commands::execute_export(args, &data_dir, &formatter).await?;
        }
    }

    Ok(())
}
