use crate::error::Result;
use dg_core::config::Settings;
use dg_core::logger::init_logger;
use dg_engine::generator::Generator;
use dg_engine::store::DeckStore;
use std::sync::Arc;
use tracing::error;
mod app_state;
mod error;
mod server;
mod utils;

fn main() {
    init_logger();
    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Arc::new(Settings::from_env()?);
    let generator = Arc::new(Generator::new(settings.clone()));
    let store = Arc::new(DeckStore::new(settings.clone()));

    server::http_server::http_server(settings, generator, store)
}
