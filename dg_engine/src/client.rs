use crate::error::{Error, Result};
use crossbeam::channel::Sender;
use dg_core::config::Settings;
use futures_util::StreamExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

/// Sampling temperature for every completion call.
const TEMPERATURE: f64 = 0.7;

/// Client for an OpenAI-compatible chat-completions endpoint. One
/// request per generation operation, no retries: a failed call is
/// terminal for that request.
pub struct CompletionClient {
    client: reqwest::Client,
    settings: Arc<Settings>,
}

impl CompletionClient {
    pub fn new(settings: Arc<Settings>) -> Self {
        CompletionClient {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.api_base_url.trim_end_matches('/')
        )
    }

    fn request_body(model: &str, prompt: &str, stream: bool) -> Value {
        json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": TEMPERATURE,
            "stream": stream,
        })
    }

    async fn send(&self, model: &str, prompt: &str, stream: bool) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&Self::request_body(model, prompt, stream))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Completion(format!(
                "completion endpoint returned {status}: {body}"
            )));
        }
        Ok(response)
    }

    /// Blocking completion: returns the full generated text.
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let response = self.send(model, prompt, false).await?;
        let value: Value = response.json().await?;
        message_content(&value).ok_or(Error::EmptyCompletion)
    }

    /// Streaming completion: pushes each content fragment into `tx` as it
    /// arrives, until the remote service signals the end of the stream or
    /// the receiving side goes away.
    pub async fn complete_stream(
        &self,
        model: &str,
        prompt: &str,
        tx: Arc<Sender<String>>,
    ) -> Result<()> {
        let response = self.send(model, prompt, true).await?;

        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk?;
            buffer.extend_from_slice(&bytes);

            // Drain complete "\n\n"-terminated event frames from the buffer.
            while let Some(end) = find_event_frame_end(&buffer) {
                let frame: Vec<u8> = buffer.drain(..end).collect();
                let Ok(text) = String::from_utf8(frame) else {
                    continue;
                };
                for line in text.lines() {
                    let Some(data) = line.trim_start().strip_prefix("data: ") else {
                        continue;
                    };
                    if data == "[DONE]" {
                        return Ok(());
                    }
                    match delta_content(data) {
                        Some(fragment) => {
                            if tx.send(fragment).is_err() {
                                // Receiver dropped; the caller is gone.
                                return Ok(());
                            }
                        }
                        None => debug!("skipping event frame without content delta"),
                    }
                }
            }
        }
        Ok(())
    }
}

/// Index of the byte just past the first `\n\n` frame delimiter, if any.
fn find_event_frame_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|w| w == b"\n\n").map(|i| i + 2)
}

/// `choices[0].message.content` of a blocking completion response.
fn message_content(value: &Value) -> Option<String> {
    value["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
}

/// `choices[0].delta.content` of one streamed event payload, if present.
fn delta_content(data: &str) -> Option<String> {
    let value: Value = serde_json::from_str(data).ok()?;
    value["choices"][0]["delta"]["content"]
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_event_frame_end() {
        assert_eq!(find_event_frame_end(b"data: x\n\nrest"), Some(9));
        assert_eq!(find_event_frame_end(b"data: x\n"), None);
        assert_eq!(find_event_frame_end(b""), None);
    }

    #[test]
    fn test_message_content_extraction() {
        let value = json!({
            "choices": [{"message": {"role": "assistant", "content": "# Title"}}]
        });
        assert_eq!(message_content(&value), Some(String::from("# Title")));
        assert_eq!(message_content(&json!({"choices": []})), None);
    }

    #[test]
    fn test_delta_content_extraction() {
        let data = r#"{"choices":[{"delta":{"content":"frag"}}]}"#;
        assert_eq!(delta_content(data), Some(String::from("frag")));

        // Final chunks carry an empty delta; there is nothing to emit.
        let done = r#"{"choices":[{"delta":{},"finish_reason":"stop"}]}"#;
        assert_eq!(delta_content(done), None);
        assert_eq!(delta_content("not json"), None);
    }

    #[test]
    fn test_request_body_shape() {
        let body = CompletionClient::request_body("gpt-4o", "hello", true);
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["stream"], true);
    }
}
