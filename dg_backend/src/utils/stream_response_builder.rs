use crate::error::{Error, ResultAPIStream};
use crate::utils::tokio_bridge::bridge_stream;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use crossbeam::channel::{Receiver, bounded};
use futures::StreamExt;
use std::time::Duration;

/// Builds a `text/event-stream` HTTP response from a channel of text
/// fragments. Fragments are flushed to the client exactly as received:
/// the outline path feeds raw model tokens, the paced paths feed whole
/// `line + "\n\n"` frames, and an inline `[ERROR]:` fragment is just
/// another item on the channel.
pub struct StreamResponseBuilder {
    rx: Receiver<String>,
}

impl StreamResponseBuilder {
    pub fn new(rx: Receiver<String>) -> Self {
        Self { rx }
    }

    pub fn build(self) -> ResultAPIStream {
        let stream = bridge_stream(self.rx).map(Ok::<_, Error>);
        let body = Body::from_stream(stream);

        Ok(Response::builder()
            .header("Content-Type", "text/event-stream")
            .body(body)
            .map_err(|e| Error::FailedBuildSseResponse(e.to_string()))
            .into_response())
    }

    /// Flushes pre-generated lines one frame at a time with a fixed delay
    /// between them. The delay is cosmetic pacing for clients that render
    /// line by line; it carries no synchronization meaning.
    pub fn paced(lines: Vec<String>, delay: Duration) -> ResultAPIStream {
        let (tx, rx) = bounded::<String>(100);

        let response = StreamResponseBuilder::new(rx).build();
        tokio::spawn(async move {
            for line in lines {
                if tx.send(format!("{line}\n\n")).is_err() {
                    break;
                }
                tokio::time::sleep(delay).await;
            }
        });
        response
    }
}
