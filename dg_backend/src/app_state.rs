use dg_core::config::Settings;
use dg_engine::generator::Generator;
use dg_engine::store::DeckStore;
use std::sync::Arc;

/// Shared application state. Everything in here is immutable once built,
/// so concurrent requests share it without any locking.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
    pub store: Arc<DeckStore>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(generator: Arc<Generator>, store: Arc<DeckStore>, settings: Arc<Settings>) -> Self {
        AppState {
            generator,
            store,
            settings,
        }
    }
}
