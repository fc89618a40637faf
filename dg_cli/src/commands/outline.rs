use crate::client::CliClient;
use crate::error::Result;
use dg_core::server::payload::outline_request::OutlineRequest;
use futures_util::StreamExt;
use std::io::Write;

/// Streams the outline to stdout as fragments arrive. An upstream
/// failure shows up inline as an `[ERROR]:` marker in the text.
pub async fn handle(
    client: &CliClient,
    topic: String,
    language: String,
    model: Option<String>,
) -> Result<()> {
    let request = OutlineRequest {
        model,
        language,
        content: topic,
        stream: true,
    };

    let response = client.generate_outline(&request).await?;
    let mut stream = response.bytes_stream();
    let mut stdout = std::io::stdout();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        stdout.write_all(&chunk)?;
        stdout.flush()?;
    }
    println!();
    Ok(())
}
