pub mod cookies;
pub mod http_client;
