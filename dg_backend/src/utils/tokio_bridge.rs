use crossbeam::channel::Receiver as CrossbeamReceiver;
use futures::Stream;
use tokio::sync::mpsc::unbounded_channel;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::debug;

/// Bridges a sync crossbeam receiver into an async stream. A blocking
/// task drains the channel and forwards each item; the stream ends when
/// every sender is dropped, or the drain loop stops early when the
/// stream side goes away.
pub fn bridge_stream<T: Send + 'static>(sync_rx: CrossbeamReceiver<T>) -> impl Stream<Item = T> {
    let (tx, rx) = unbounded_channel();

    tokio::task::spawn_blocking(move || {
        for item in sync_rx {
            if tx.send(item).is_err() {
                break;
            }
        }
        debug!("stream bridge drained, closing");
    });

    UnboundedReceiverStream::new(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::bounded;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_bridge_forwards_in_order_and_ends() {
        let (tx, rx) = bounded::<String>(8);
        for fragment in ["a", "b", "c"] {
            tx.send(fragment.to_string()).unwrap();
        }
        drop(tx);

        let collected: Vec<String> = bridge_stream(rx).collect().await;
        assert_eq!(collected, vec!["a", "b", "c"]);
    }
}
