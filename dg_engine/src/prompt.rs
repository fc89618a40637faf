use crate::error::{Error, Result};
use std::collections::HashMap;

/// The three generation operations the engine knows how to prompt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Outline,
    SlideContent,
    Rewrite,
}

/// A static prompt template with named substitution slots. The template
/// text embeds example output to bias the remote model toward the
/// expected structured format. That is a prompt-engineering contract,
/// not a parser contract: the model is not guaranteed to conform, which
/// is why the slide parser tolerates malformed lines.
pub struct PromptTemplate {
    pub id: &'static str,
    text: &'static str,
    slots: &'static [&'static str],
}

static OUTLINE_TEMPLATE: PromptTemplate = PromptTemplate {
    id: "outline",
    slots: &["require", "language"],
    text: r#"You are the user's slide-deck outline assistant. Generate a chapter
structure for the topic below.

Output format:
# Deck title (exactly one)
## Chapter name
### Section name
- point 1
- point 2
- point 3
### Section name
- xxxxx
- xxxxx
- xxxxx
### Section name
- xxxxx
- xxxxx
- xxxxx

Generation requirement: {require}

Output language: {language}
"#,
};

static SLIDE_CONTENT_TEMPLATE: PromptTemplate = PromptTemplate {
    id: "slide_content",
    slots: &["language", "content"],
    text: r#"You are a professional slide-deck content assistant. Given the outline
and the original requirement below, generate the complete page structure
of the deck.

Page types:
- cover page: "cover"
- table-of-contents page: "contents"
- content page: "content"
- transition page: "transition"
- end page: "end"

Output requirements:
- every page is one independent JSON object
- every JSON object is written on a **single line**
- pages are separated by two newline characters
- do not add comments or explanations of any kind
- if the requirement includes source material, reuse as much of that
  material as possible

Example format (note: one JSON object per line):

{"type": "cover", "data": { "title": "An Introduction to Interfaces", "text": "Definition, design and implementation essentials" }}

{"type": "contents", "data": { "items": ["What an interface is", "Interface categories", "Interface design principles"] }}

{"type": "transition", "data": { "title": "What an interface is", "text": "Starting with the basic definition" }}

{"type": "content", "data": { "title": "What an interface is", "items": [ { "title": "Basic concept", "text": "An interface is the contract modules communicate through", "image": "image url", "table": "table HTML" }, { "title": "Purpose", "text": "Decouples modules and keeps the system flexible" } ] }}

{"type": "end"}

Generate the deck content from the following:

Language: {language}
Outline and original requirement: {content}
"#,
};

static REWRITE_TEMPLATE: PromptTemplate = PromptTemplate {
    id: "rewrite",
    slots: &["command", "content"],
    text: r#"You are a professional slide-deck content editor. Given the rewrite
instruction and the original content below, produce the improved content.

Rewrite instruction: {command}
Original content: {content}
"#,
};

impl PromptTemplate {
    pub fn get(kind: PromptKind) -> &'static PromptTemplate {
        match kind {
            PromptKind::Outline => &OUTLINE_TEMPLATE,
            PromptKind::SlideContent => &SLIDE_CONTENT_TEMPLATE,
            PromptKind::Rewrite => &REWRITE_TEMPLATE,
        }
    }

    pub fn slots(&self) -> &'static [&'static str] {
        self.slots
    }

    /// Binds runtime arguments into the final prompt string. Every
    /// declared slot must be present in `args`; a missing slot is
    /// rejected before any remote call, never substituted with an empty
    /// value. Literal braces elsewhere in the template (the JSON
    /// examples) are left untouched.
    pub fn render(&self, args: &HashMap<&str, String>) -> Result<String> {
        let mut rendered = self.text.to_string();
        for slot in self.slots {
            let value = args
                .get(slot)
                .ok_or_else(|| Error::MissingSlot(format!("{}.{}", self.id, slot)))?;
            rendered = rendered.replace(&format!("{{{slot}}}"), value);
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_slots() {
        let args = HashMap::from([
            ("require", String::from("Rust for beginners")),
            ("language", String::from("English")),
        ]);
        let rendered = PromptTemplate::get(PromptKind::Outline).render(&args).unwrap();
        assert!(rendered.contains("Generation requirement: Rust for beginners"));
        assert!(rendered.contains("Output language: English"));
        assert!(!rendered.contains("{require}"));
        assert!(!rendered.contains("{language}"));
    }

    #[test]
    fn test_render_missing_slot_is_rejected() {
        let args = HashMap::from([("require", String::from("Rust for beginners"))]);
        let err = PromptTemplate::get(PromptKind::Outline)
            .render(&args)
            .unwrap_err();
        match err {
            Error::MissingSlot(slot) => assert_eq!(slot, "outline.language"),
            other => panic!("expected MissingSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_render_keeps_json_example_braces() {
        let args = HashMap::from([
            ("language", String::from("English")),
            ("content", String::from("# Outline")),
        ]);
        let rendered = PromptTemplate::get(PromptKind::SlideContent)
            .render(&args)
            .unwrap();
        assert!(rendered.contains(r#"{"type": "end"}"#));
        assert!(rendered.contains("Language: English"));
    }

    #[test]
    fn test_template_slot_lists() {
        assert_eq!(
            PromptTemplate::get(PromptKind::Outline).slots(),
            ["require", "language"]
        );
        assert_eq!(
            PromptTemplate::get(PromptKind::SlideContent).slots(),
            ["language", "content"]
        );
        assert_eq!(
            PromptTemplate::get(PromptKind::Rewrite).slots(),
            ["command", "content"]
        );
    }
}
