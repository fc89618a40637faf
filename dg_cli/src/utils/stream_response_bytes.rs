use bytes::Bytes;
use futures_util::{Stream, StreamExt};

/// Reassembles a chunked streaming response body into complete text
/// lines. Chunk boundaries do not align with line boundaries, so bytes
/// are buffered until a newline arrives; blank lines (the paced-frame
/// separators) are dropped.
pub async fn stream_response_bytes(
    stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
) -> tokio::sync::mpsc::Receiver<String> {
    let mut stream = Box::pin(stream);
    let (tx, rx) = tokio::sync::mpsc::channel::<String>(32);
    tokio::spawn(async move {
        let mut buffer = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("Error receiving chunk: {}", e);
                    continue;
                }
            };

            match std::str::from_utf8(&chunk) {
                Ok(text) => buffer.push_str(text),
                Err(e) => {
                    eprintln!("Error converting chunk to string: {}", e);
                    continue;
                }
            }

            while let Some(pos) = buffer.find('\n') {
                let line = buffer[..pos].trim().to_string();
                buffer.drain(..pos + 1);
                if line.is_empty() {
                    continue;
                }
                if tx.send(line).await.is_err() {
                    return;
                }
            }
        }
        // Whatever is left after the stream closes is the final line.
        let rest = buffer.trim();
        if !rest.is_empty() {
            let _ = tx.send(rest.to_string()).await;
        }
    });
    rx
}
