use crate::types::slide::Slide;
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed tag written into every deck file so the viewer can recognize it.
pub const DECK_TYPE_TAG: &str = "aippt_slides";

/// A complete generated slide set plus metadata. Decks are write-once:
/// created at save time, identified by their generated id, and addressed
/// thereafter only through their file URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub slides: Vec<Slide>,
    pub template: String,
    pub title: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub created_at: String,
    pub id: String,
}

impl Deck {
    /// Builds a fresh deck record: new v4 id, current timestamp, slide
    /// order exactly as given.
    pub fn new(title: &str, slides: Vec<Slide>, template: &str) -> Self {
        Deck {
            slides,
            template: template.to_string(),
            title: title.to_string(),
            type_tag: DECK_TYPE_TAG.to_string(),
            created_at: Local::now().to_rfc3339(),
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn filename(&self) -> String {
        format!("ppt_{}.json", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_decks_get_distinct_ids() {
        let a = Deck::new("T", vec![], "template_7");
        let b = Deck::new("T", vec![], "template_7");
        assert_ne!(a.id, b.id);
        assert_ne!(a.filename(), b.filename());
    }

    #[test]
    fn test_type_tag_is_serialized_as_type() {
        let deck = Deck::new("T", vec![json!({"type": "end"})], "template_7");
        let value = serde_json::to_value(&deck).unwrap();
        assert_eq!(value["type"], DECK_TYPE_TAG);
        assert_eq!(value["title"], "T");
        assert_eq!(value["slides"], json!([{"type": "end"}]));
    }
}
