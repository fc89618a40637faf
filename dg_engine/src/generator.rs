use crate::client::CompletionClient;
use crate::error::Result;
use crate::prompt::{PromptKind, PromptTemplate};
use crossbeam::channel::Sender;
use dg_core::config::Settings;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Arguments of one generation call. Constructed per call, discarded
/// after use. `language` is required for the outline and slide-content
/// operations, `command` only for rewrite; the prompt renderer rejects a
/// call whose required slots are absent.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub model: Option<String>,
    pub language: Option<String>,
    pub content: String,
    pub command: Option<String>,
}

/// The generation engine: for each operation, prompt rendering, then a
/// remote completion call, then raw-text output. Immutable once built,
/// shared freely between concurrent requests.
pub struct Generator {
    settings: Arc<Settings>,
    client: CompletionClient,
}

impl Generator {
    pub fn new(settings: Arc<Settings>) -> Self {
        Generator {
            client: CompletionClient::new(settings.clone()),
            settings,
        }
    }

    fn slot_args(kind: PromptKind, request: &GenerationRequest) -> HashMap<&'static str, String> {
        let mut args = HashMap::new();
        match kind {
            PromptKind::Outline => {
                args.insert("require", request.content.clone());
                if let Some(language) = &request.language {
                    args.insert("language", language.clone());
                }
            }
            PromptKind::SlideContent => {
                args.insert("content", request.content.clone());
                if let Some(language) = &request.language {
                    args.insert("language", language.clone());
                }
            }
            PromptKind::Rewrite => {
                args.insert("content", request.content.clone());
                if let Some(command) = &request.command {
                    args.insert("command", command.clone());
                }
            }
        }
        args
    }

    /// Blocking generation: renders the prompt for `kind` and returns the
    /// remote model's full text output.
    pub async fn generate(&self, kind: PromptKind, request: &GenerationRequest) -> Result<String> {
        let template = PromptTemplate::get(kind);
        let prompt = template.render(&Self::slot_args(kind, request))?;
        let model = self.settings.resolve_model(request.model.as_deref());
        debug!("running {} generation with model {model}", template.id);
        self.client.complete(&model, &prompt).await
    }

    /// Streaming outline generation: pushes text fragments into `tx` as
    /// they arrive. A failure after the stream has started is pushed as a
    /// final inline `[ERROR]:` fragment instead of being raised, so
    /// partial output already delivered to the caller is preserved and
    /// the stream terminates cleanly.
    pub async fn generate_outline_stream(
        &self,
        request: &GenerationRequest,
        tx: Arc<Sender<String>>,
    ) {
        let outcome = async {
            let template = PromptTemplate::get(PromptKind::Outline);
            let prompt = template.render(&Self::slot_args(PromptKind::Outline, request))?;
            let model = self.settings.resolve_model(request.model.as_deref());
            debug!("running streaming outline generation with model {model}");
            self.client.complete_stream(&model, &prompt, tx.clone()).await
        }
        .await;

        if let Err(err) = outcome {
            error!("streaming outline generation failed: {err}");
            let _ = tx.send(format!("\n[ERROR]: {err}\n"));
        }
    }

    /// Context enrichment for the composite operation: the slide-content
    /// prompt is seeded with both the original requirement and the
    /// generated outline.
    pub fn enriched_content(original_require: &str, outline: &str) -> String {
        format!("Original requirement: {original_require}\n\nOutline:\n{outline}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_slot_args_per_operation() {
        let request = GenerationRequest {
            model: None,
            language: Some(String::from("English")),
            content: String::from("topic"),
            command: Some(String::from("shorten")),
        };

        let outline = Generator::slot_args(PromptKind::Outline, &request);
        assert_eq!(outline["require"], "topic");
        assert_eq!(outline["language"], "English");

        let content = Generator::slot_args(PromptKind::SlideContent, &request);
        assert_eq!(content["content"], "topic");
        assert_eq!(content["language"], "English");

        let rewrite = Generator::slot_args(PromptKind::Rewrite, &request);
        assert_eq!(rewrite["content"], "topic");
        assert_eq!(rewrite["command"], "shorten");
    }

    #[test]
    fn test_missing_language_rejected_before_any_remote_call() {
        let request = GenerationRequest {
            content: String::from("topic"),
            ..Default::default()
        };
        let args = Generator::slot_args(PromptKind::Outline, &request);
        let err = PromptTemplate::get(PromptKind::Outline)
            .render(&args)
            .unwrap_err();
        assert!(matches!(err, Error::MissingSlot(_)));
    }

    #[test]
    fn test_enriched_content_carries_both_parts() {
        let enriched = Generator::enriched_content("topic", "# Outline\n## Chapter");
        assert!(enriched.starts_with("Original requirement: topic"));
        assert!(enriched.ends_with("Outline:\n# Outline\n## Chapter"));
    }
}
