use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page record within a deck. Slides are kept as raw JSON objects:
/// the upstream generator is not guaranteed to conform to any schema, so
/// consumers must tolerate missing or extra fields.
pub type Slide = Value;

/// The page-type vocabulary the generator is prompted to use. Not
/// enforced anywhere; `kind_of` is a best-effort read for logging and
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Cover,
    Contents,
    Content,
    Transition,
    End,
}

impl SlideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Cover => "cover",
            SlideKind::Contents => "contents",
            SlideKind::Content => "content",
            SlideKind::Transition => "transition",
            SlideKind::End => "end",
        }
    }
}

pub fn kind_of(slide: &Slide) -> Option<SlideKind> {
    let kind = slide.get("type")?.as_str()?;
    match kind {
        "cover" => Some(SlideKind::Cover),
        "contents" => Some(SlideKind::Contents),
        "content" => Some(SlideKind::Content),
        "transition" => Some(SlideKind::Transition),
        "end" => Some(SlideKind::End),
        _ => None,
    }
}
