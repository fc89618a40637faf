use std::env;
use tracing_subscriber::EnvFilter;

pub fn init_logger() {
    let aippt_debug = env::var("AIPPT_DEBUG").unwrap_or_else(|_| "false".to_string());

    let default_directive = if aippt_debug == "true" { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
