pub mod stream_response_bytes;
