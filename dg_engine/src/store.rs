use crate::error::Result;
use dg_core::config::Settings;
use dg_core::server::routes::FilesApi;
use dg_core::types::deck::Deck;
use dg_core::types::saved_deck::SavedDeck;
use dg_core::types::slide::Slide;
use std::fs;
use std::sync::Arc;
use tracing::info;

/// Writes decks as uniquely-named JSON files under the static-serving
/// directory and builds their retrieval URLs. Decks are write-once
/// artifacts: there is no update or delete, and concurrent saves never
/// contend because every call writes a fresh filename.
pub struct DeckStore {
    settings: Arc<Settings>,
}

impl DeckStore {
    pub fn new(settings: Arc<Settings>) -> Self {
        DeckStore { settings }
    }

    /// Serializes a new deck to `{static_dir}/ppt_{id}.json` and returns
    /// its URLs. The file is written in place without fsync or atomic
    /// rename: decks are best-effort generated artifacts, not durable
    /// records of truth.
    pub fn save(&self, title: &str, slides: Vec<Slide>, template: &str) -> Result<SavedDeck> {
        let deck = Deck::new(title, slides, template);
        let filename = deck.filename();

        fs::create_dir_all(&self.settings.static_dir)?;
        let path = self.settings.static_dir.join(&filename);
        // Pretty-printed UTF-8; serde_json keeps non-ASCII characters literal.
        fs::write(&path, serde_json::to_string_pretty(&deck)?)?;

        let json_url = format!(
            "{}{}",
            self.settings.server_base_url,
            FilesApi::Get.path(Some(&filename)).as_str()
        );
        let view_url = format!(
            "{}/?aippt_config_url={}",
            self.settings.viewer_base_url, json_url
        );

        info!(
            "saved deck {} ({} slides) to {}",
            deck.id,
            deck.slides.len(),
            path.display()
        );

        Ok(SavedDeck {
            id: deck.id,
            filename,
            json_url,
            view_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::server::default_config::{
        DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_STREAM_DELAY_MS,
    };
    use serde_json::{Value, json};
    use std::path::Path;

    fn test_settings(static_dir: &Path) -> Arc<Settings> {
        Arc::new(Settings {
            api_key: String::new(),
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            default_model: String::from(DEFAULT_MODEL),
            server_base_url: String::from("http://127.0.0.1:5000"),
            viewer_base_url: String::from("http://127.0.0.1:5173"),
            static_dir: static_dir.to_path_buf(),
            host: String::from("127.0.0.1"),
            port: String::from("5000"),
            stream_delay_ms: DEFAULT_STREAM_DELAY_MS,
        })
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::new(test_settings(dir.path()));
        let slides = vec![
            json!({"type": "cover", "data": {"title": "Ferris 入門", "text": "intro"}}),
            json!({"type": "end"}),
        ];

        let saved = store
            .save("Ferris 入門", slides.clone(), "template_7")
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join(&saved.filename)).unwrap();
        // Non-ASCII characters stay literal in the file.
        assert!(written.contains("Ferris 入門"));

        let deck: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(deck["title"], "Ferris 入門");
        assert_eq!(deck["slides"], json!(slides));
        assert_eq!(deck["template"], "template_7");
        assert_eq!(deck["type"], "aippt_slides");
        assert_eq!(deck["id"], saved.id);
        assert!(deck["created_at"].is_string());
    }

    #[test]
    fn test_repeated_saves_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::new(test_settings(dir.path()));

        let first = store.save("T", vec![json!({"type": "end"})], "template_7").unwrap();
        let second = store.save("T", vec![json!({"type": "end"})], "template_7").unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(first.filename, second.filename);
        assert_ne!(first.json_url, second.json_url);
        assert!(dir.path().join(&first.filename).exists());
        assert!(dir.path().join(&second.filename).exists());
    }

    #[test]
    fn test_urls_are_built_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::new(test_settings(dir.path()));

        let saved = store.save("T", vec![], "template_7").unwrap();
        assert_eq!(
            saved.json_url,
            format!("http://127.0.0.1:5000/files/{}", saved.filename)
        );
        assert_eq!(
            saved.view_url,
            format!("http://127.0.0.1:5173/?aippt_config_url={}", saved.json_url)
        );
    }

    #[test]
    fn test_static_dir_is_created_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("decks").join("out");
        let store = DeckStore::new(test_settings(&nested));

        let saved = store.save("T", vec![], "template_7").unwrap();
        assert!(nested.join(&saved.filename).exists());
    }
}
