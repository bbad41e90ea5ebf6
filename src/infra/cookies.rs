use std::collections::HashMap;

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

use crate::app::ports::CookieJarPort;

/// Cookie jar backed by the request's `Cookie` header, parsed once per
/// request. Values are kept as the opaque strings the browser sent.
pub struct HeaderCookieJar {
    values: HashMap<String, String>,
}

impl HeaderCookieJar {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut values = HashMap::new();
        for header in headers.get_all(COOKIE) {
            let Ok(raw) = header.to_str() else { continue };
            for pair in raw.split(';') {
                if let Some((name, value)) = pair.trim().split_once('=') {
                    values.insert(name.to_string(), value.to_string());
                }
            }
        }
        Self { values }
    }
}

impl CookieJarPort for HeaderCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
