pub mod http_api;
pub mod retry;
