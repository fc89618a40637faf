pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: &str = "5000";
pub const DEFAULT_SERVER_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_VIEWER_BASE_URL: &str = "http://127.0.0.1:5173";

pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const DEFAULT_STATIC_DIR: &str = "ppt_files";
pub const DEFAULT_STREAM_DELAY_MS: u64 = 500;
