use crate::client::CliClient;
use crate::error::Result;
use crate::utils::stream_response_bytes::stream_response_bytes;
use dg_core::server::payload::slide_content_request::SlideContentRequest;

/// Prints each slide line as the server flushes it.
pub async fn handle(
    client: &CliClient,
    outline: String,
    language: String,
    model: Option<String>,
) -> Result<()> {
    let request = SlideContentRequest {
        model,
        language,
        content: outline,
        stream: true,
    };

    let response = client.generate_slides(&request).await?;
    let mut rx = stream_response_bytes(response.bytes_stream()).await;
    while let Some(line) = rx.recv().await {
        println!("{line}");
    }
    Ok(())
}
