use dg_core::types::slide::{Slide, kind_of};
use serde_json::Value;
use tracing::debug;

/// Interprets raw model output as a sequence of independent JSON values,
/// one per non-blank line. The upstream text is untrusted free text that
/// may contain stray prose, partial JSON, or formatting noise around the
/// intended payload; treating each line as an independent parse unit
/// keeps one bad line from corrupting the whole deck. Lines that fail to
/// decode are skipped, not repaired, and slide order equals line order.
pub fn parse_slides(raw: &str) -> Vec<Slide> {
    let mut slides = Vec::new();
    for line in non_blank_lines(raw) {
        match serde_json::from_str::<Value>(&line) {
            Ok(slide) => {
                if kind_of(&slide).is_none() {
                    debug!("parsed slide line without a known page type");
                }
                slides.push(slide);
            }
            Err(_) => {
                debug!("dropping undecodable slide line: {line}");
            }
        }
    }
    slides
}

/// Trimmed, non-blank lines of raw model output, in order. Shared by the
/// parser and by the paced line-by-line response path.
pub fn non_blank_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
