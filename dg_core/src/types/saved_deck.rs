use serde::{Deserialize, Serialize};

/// Where a saved deck can be fetched from: the raw JSON file and the
/// viewer page that loads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDeck {
    pub id: String,
    pub filename: String,
    pub json_url: String,
    pub view_url: String,
}
