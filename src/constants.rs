/// Names shared across handlers, configuration, and tests.

// Session cookies read by the profile loader
pub const TOKEN_COOKIE: &str = "token";
pub const USERNAME_COOKIE: &str = "username";

/// Placeholder shown when no username cookie is present.
pub const DEFAULT_USERNAME: &str = "User";

// Upstream API endpoints, relative to the configured base URL
pub const SERVICES_ENDPOINT: &str = "/api/services";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

/// Where a successful registration sends the browser.
pub const LOGIN_REDIRECT: &str = "/login?registered=true";

// Configuration defaults
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:3000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
