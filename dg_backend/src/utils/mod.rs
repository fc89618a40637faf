pub mod stream_response_builder;
pub mod tokio_bridge;
