pub mod host;
pub mod request_log;
pub mod shutdown;
