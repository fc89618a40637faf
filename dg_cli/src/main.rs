use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
use dg_core::server::default_config::DEFAULT_SERVER_BASE_URL;
use std::env;
mod cli;
mod client;
mod commands;
mod error;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let base_url =
        env::var("SERVER_BASE_URL").unwrap_or(String::from(DEFAULT_SERVER_BASE_URL));
    let cli_client = CliClient::new(&base_url);

    match cli.command {
        Commands::Outline {
            topic,
            language,
            model,
        } => commands::outline::handle(&cli_client, topic, language, model).await?,
        Commands::Slides {
            outline,
            language,
            model,
        } => commands::slides::handle(&cli_client, outline, language, model).await?,
        Commands::Rewrite {
            content,
            command,
            model,
        } => commands::rewrite::handle(&cli_client, content, command, model).await?,
        Commands::Health => commands::health::handle(&cli_client).await?,
    }

    Ok(())
}
