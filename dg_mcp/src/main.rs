use crate::error::Result;
use crate::server::DeckToolServer;
use dg_core::config::Settings;
use dg_core::logger::init_logger;
use dg_engine::generator::Generator;
use dg_engine::store::DeckStore;
use std::sync::Arc;
use tracing::{error, info};
mod error;
mod server;
mod transport;

#[tokio::main]
async fn main() {
    init_logger();
    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Arc::new(Settings::from_env()?);
    let generator = Arc::new(Generator::new(settings.clone()));
    let store = Arc::new(DeckStore::new(settings.clone()));

    let server = DeckToolServer::new(generator, store);
    info!("Starting MCP server on stdio");
    transport::serve_stdio(server).await
}
