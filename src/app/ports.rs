use async_trait::async_trait;

/// Outbound HTTP capability the handlers depend on. Production uses the
/// reqwest-backed adapter in `infra`; tests substitute canned responses.
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, String>;
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, String>;
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub bytes: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Read-only view of the cookies carried by the incoming request.
pub trait CookieJarPort: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}
