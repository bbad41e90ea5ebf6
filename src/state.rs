use std::sync::Arc;

use crate::app::ports::HttpClientPort;

/// Shared handler state: the upstream API capability and its base address.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn HttpClientPort>,
    pub api_base_url: String,
}
