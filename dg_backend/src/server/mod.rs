pub mod http_server;
pub mod outline;
pub mod service;
pub mod slides;
pub mod writing;
