use serde_json::json;
use tracing::{debug, info, instrument};

use crate::app::ports::HttpClientPort;
use crate::constants::{REGISTER_ENDPOINT, SERVICES_ENDPOINT};
use crate::error::{Result, WebError};
use crate::models::{RegisterErrorBody, RegisterForm, ServiceRecord, ServicesResponse};

/// Fetch the service catalog from the upstream API and keep only the
/// services currently open for booking.
#[instrument(skip(http))]
pub async fn fetch_active_services(
    http: &dyn HttpClientPort,
    base_url: &str,
) -> Result<Vec<ServiceRecord>> {
    let url = format!("{base_url}{SERVICES_ENDPOINT}");
    let response = http.get(&url).await.map_err(WebError::Transport)?;

    if !response.is_success() {
        return Err(WebError::UpstreamStatus {
            status: response.status,
        });
    }

    let body: ServicesResponse = serde_json::from_slice(&response.bytes)?;
    let services: Vec<ServiceRecord> = body
        .services
        .into_iter()
        .filter(|service| service.is_active)
        .collect();
    debug!("Fetched {} active services", services.len());
    Ok(services)
}

/// Forward a validated registration to the upstream API.
///
/// A non-2xx answer is mapped to [`WebError::Rejected`] carrying the message
/// the upstream provided; transport failures keep their own variant so the
/// caller can report them generically.
#[instrument(skip_all)]
pub async fn submit_registration(
    http: &dyn HttpClientPort,
    base_url: &str,
    form: &RegisterForm,
) -> Result<()> {
    let url = format!("{base_url}{REGISTER_ENDPOINT}");
    let body = json!({
        "username": form.username,
        "email": form.email,
        "password": form.password,
    });

    let response = http
        .post_json(&url, &body)
        .await
        .map_err(WebError::Transport)?;

    if response.is_success() {
        info!("Registered new account for {}", form.username);
        return Ok(());
    }

    Err(WebError::Rejected(rejection_message(&response.bytes)))
}

/// Extract a user-facing message from an upstream rejection body.
fn rejection_message(bytes: &[u8]) -> String {
    let Ok(body) = serde_json::from_slice::<RegisterErrorBody>(bytes) else {
        return "Registration failed".to_string();
    };
    if let Some(errors) = &body.errors {
        if !errors.is_empty() {
            return errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
        }
    }
    body.message
        .unwrap_or_else(|| "Registration failed".to_string())
}
