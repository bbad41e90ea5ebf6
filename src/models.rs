use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One bookable service as returned by the upstream catalog endpoint.
///
/// The identifier arrives as either a JSON number or a string depending on
/// the service's origin, so it is kept as a raw scalar and compared as text.
/// Display fields beyond the ones named here pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Value,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub display: serde_json::Map<String, Value>,
}

impl ServiceRecord {
    /// Identifier rendered as text, for comparison against query parameters.
    pub fn id_text(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Body shape of `GET /api/services`. A missing `services` field is treated
/// as an empty catalog, not an error.
#[derive(Debug, Deserialize)]
pub struct ServicesResponse {
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

/// Query parameters accepted by the booking page.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogQuery {
    pub service: Option<String>,
}

/// Page data for the booking page.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogData {
    pub services: Vec<ServiceRecord>,
    #[serde(rename = "selectedService")]
    pub selected_service: Option<ServiceRecord>,
    pub error: Option<String>,
}

/// Page data for the profile page, read straight from the session cookies.
#[derive(Debug, Clone, Serialize)]
pub struct SessionData {
    pub token: Option<String>,
    pub username: String,
}

/// Form fields submitted by the registration page.
#[derive(Clone, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Error body shape of `POST /api/auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterErrorBody {
    pub errors: Option<Vec<FieldError>>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub message: String,
}

/// Structured feedback returned to the registration form on failure.
#[derive(Debug, Clone, Serialize)]
pub struct FailurePayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: FailureData,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureData {
    pub error: String,
}

impl FailurePayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            kind: "failure".to_string(),
            data: FailureData {
                error: error.into(),
            },
        }
    }
}

/// Outcome of the registration action: a success navigation or structured
/// feedback, as sibling variants of one type.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Redirect { location: String },
    Failure { error: String },
}
