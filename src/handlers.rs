use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};
use tracing::error;

use crate::app::ports::{CookieJarPort, HttpClientPort};
use crate::backend::{fetch_active_services, submit_registration};
use crate::constants::{DEFAULT_USERNAME, LOGIN_REDIRECT, TOKEN_COOKIE, USERNAME_COOKIE};
use crate::error::WebError;
use crate::infra::cookies::HeaderCookieJar;
use crate::models::{
    CatalogData, CatalogQuery, FailurePayload, RegisterForm, RegisterOutcome, SessionData,
};
use crate::state::AppState;
use crate::validation::validate_password;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "booking-web",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Page data for the booking page: the active service catalog, plus the
/// record singled out by the `service` query parameter when present.
pub async fn book_page(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogData> {
    Json(load_catalog(state.api.as_ref(), &state.api_base_url, query.service.as_deref()).await)
}

/// Build the booking page data. Every upstream failure is folded into the
/// `error` field so the page always renders.
pub async fn load_catalog(
    http: &dyn HttpClientPort,
    base_url: &str,
    selected: Option<&str>,
) -> CatalogData {
    let (services, error) = match fetch_active_services(http, base_url).await {
        Ok(services) => (services, None),
        Err(e) => {
            error!("Error loading services data: {}", e);
            (Vec::new(), Some(format!("Failed to load services: {}", e)))
        }
    };

    // An unmatched selection is not an error; the page simply has nothing
    // pre-selected.
    let selected_service =
        selected.and_then(|wanted| services.iter().find(|s| s.id_text() == wanted).cloned());

    CatalogData {
        services,
        selected_service,
        error,
    }
}

/// Page data for the profile page.
pub async fn profile_page(headers: HeaderMap) -> Json<SessionData> {
    let jar = HeaderCookieJar::from_headers(&headers);
    Json(session_from_cookies(&jar))
}

pub fn session_from_cookies(cookies: &dyn CookieJarPort) -> SessionData {
    SessionData {
        token: cookies.get(TOKEN_COOKIE),
        username: cookies
            .get(USERNAME_COOKIE)
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
    }
}

/// Registration form action.
pub async fn register_action(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Response {
    register_submission(state.api.as_ref(), &state.api_base_url, &form)
        .await
        .into_response()
}

/// Validate and forward a registration, reporting the outcome as a value.
/// The policy check runs first; no upstream call is made when it fails.
pub async fn register_submission(
    http: &dyn HttpClientPort,
    base_url: &str,
    form: &RegisterForm,
) -> RegisterOutcome {
    if let Err(message) = validate_password(&form.password) {
        return RegisterOutcome::Failure { error: message };
    }

    match submit_registration(http, base_url, form).await {
        Ok(()) => RegisterOutcome::Redirect {
            location: LOGIN_REDIRECT.to_string(),
        },
        Err(WebError::Rejected(message)) => RegisterOutcome::Failure { error: message },
        Err(e) => {
            error!("Registration error: {}", e);
            RegisterOutcome::Failure {
                error: "Registration failed. Please try again.".to_string(),
            }
        }
    }
}

impl IntoResponse for RegisterOutcome {
    fn into_response(self) -> Response {
        match self {
            // 303 See Other, so the browser re-requests with GET
            RegisterOutcome::Redirect { location } => Redirect::to(&location).into_response(),
            RegisterOutcome::Failure { error } => Json(FailurePayload::new(error)).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapJar(HashMap<String, String>);

    impl CookieJarPort for MapJar {
        fn get(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    #[test]
    fn session_passes_cookies_through() {
        let jar = MapJar(HashMap::from([
            ("token".to_string(), "abc123".to_string()),
            ("username".to_string(), "neo".to_string()),
        ]));
        let session = session_from_cookies(&jar);
        assert_eq!(session.token, Some("abc123".to_string()));
        assert_eq!(session.username, "neo");
    }

    #[test]
    fn missing_username_defaults_and_missing_token_stays_unset() {
        let session = session_from_cookies(&MapJar(HashMap::new()));
        assert_eq!(session.token, None);
        assert_eq!(session.username, "User");
    }
}
