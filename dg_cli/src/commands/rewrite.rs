use crate::client::CliClient;
use crate::error::Result;
use crate::utils::stream_response_bytes::stream_response_bytes;
use dg_core::server::payload::writing_request::WritingRequest;

pub async fn handle(
    client: &CliClient,
    content: String,
    command: String,
    model: Option<String>,
) -> Result<()> {
    let request = WritingRequest {
        model,
        content,
        command,
        stream: true,
    };

    let response = client.rewrite(&request).await?;
    let mut rx = stream_response_bytes(response.bytes_stream()).await;
    while let Some(line) = rx.recv().await {
        println!("{line}");
    }
    Ok(())
}
