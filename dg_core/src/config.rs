use crate::error::Result;
use crate::server::default_config::{
    DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_SERVER_BASE_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_STATIC_DIR, DEFAULT_STREAM_DELAY_MS, DEFAULT_VIEWER_BASE_URL,
};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Process-wide configuration, read once from the environment at startup
/// and passed by reference into the engine and store constructors.
///
/// # Environment
/// * `OPENAI_API_KEY` - API key for the remote completion service.
/// * `OPENAI_BASE_URL` - base address of the remote completion service.
/// * `AIPPT_MODEL` - default model name when a request carries none.
/// * `SERVER_BASE_URL` - public address used to build returned file URLs.
/// * `VIEWER_BASE_URL` - frontend address used to build deck view URLs.
/// * `AIPPT_STATIC_DIR` - directory where deck JSON files are written.
/// * `SERVER_HOST` / `SERVER_PORT` - HTTP bind address.
/// * `STREAM_DELAY_MS` - pacing delay between flushed slide lines.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base_url: String,
    pub default_model: String,
    pub server_base_url: String,
    pub viewer_base_url: String,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: String,
    pub stream_delay_ms: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let stream_delay_ms = match env::var("STREAM_DELAY_MS") {
            Ok(raw) => raw.parse::<u64>()?,
            Err(_) => DEFAULT_STREAM_DELAY_MS,
        };

        let settings = Settings {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or(String::from(DEFAULT_API_BASE_URL)),
            default_model: env::var("AIPPT_MODEL").unwrap_or(String::from(DEFAULT_MODEL)),
            server_base_url: env::var("SERVER_BASE_URL")
                .unwrap_or(String::from(DEFAULT_SERVER_BASE_URL)),
            viewer_base_url: env::var("VIEWER_BASE_URL")
                .unwrap_or(String::from(DEFAULT_VIEWER_BASE_URL)),
            static_dir: PathBuf::from(
                env::var("AIPPT_STATIC_DIR").unwrap_or(String::from(DEFAULT_STATIC_DIR)),
            ),
            host: env::var("SERVER_HOST").unwrap_or(String::from(DEFAULT_SERVER_HOST)),
            port: env::var("SERVER_PORT").unwrap_or(String::from(DEFAULT_SERVER_PORT)),
            stream_delay_ms,
        };
        debug!(
            "configuration loaded: model={}, api={}, static_dir={}",
            settings.default_model,
            settings.api_base_url,
            settings.static_dir.display()
        );
        Ok(settings)
    }

    /// Model to use for a single request: caller override, else the default.
    pub fn resolve_model(&self, requested: Option<&str>) -> String {
        match requested {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.default_model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_model_override() {
        let settings = Settings {
            api_key: String::new(),
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            default_model: String::from("gpt-4o"),
            server_base_url: String::from(DEFAULT_SERVER_BASE_URL),
            viewer_base_url: String::from(DEFAULT_VIEWER_BASE_URL),
            static_dir: PathBuf::from("ppt_files"),
            host: String::from(DEFAULT_SERVER_HOST),
            port: String::from(DEFAULT_SERVER_PORT),
            stream_delay_ms: DEFAULT_STREAM_DELAY_MS,
        };
        assert_eq!(settings.resolve_model(Some("gpt-4o-mini")), "gpt-4o-mini");
        assert_eq!(settings.resolve_model(Some("")), "gpt-4o");
        assert_eq!(settings.resolve_model(None), "gpt-4o");
    }
}
