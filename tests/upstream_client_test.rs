use httpmock::prelude::*;
use serde_json::json;

use booking_web::app::ports::HttpClientPort;
use booking_web::backend::{fetch_active_services, submit_registration};
use booking_web::handlers::register_submission;
use booking_web::infra::http_client::ReqwestHttp;
use booking_web::models::{RegisterForm, RegisterOutcome};

fn form() -> RegisterForm {
    RegisterForm {
        username: "neo".to_string(),
        email: "neo@example.com".to_string(),
        password: "Abcdef1!".to_string(),
    }
}

#[tokio::test]
async fn get_maps_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ping");
        then.status(200).body("pong");
    });

    let http = ReqwestHttp::new();
    let response = http.get(&server.url("/ping")).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.bytes, b"pong");
}

#[tokio::test]
async fn fetch_active_services_filters_against_live_http() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(200).json_body(json!({
            "services": [
                { "id": 1, "name": "Haircut", "isActive": true },
                { "id": 2, "name": "Retired", "isActive": false }
            ]
        }));
    });

    let http = ReqwestHttp::new();
    let services = fetch_active_services(&http, &server.base_url())
        .await
        .unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id_text(), "1");
    mock.assert();
}

#[tokio::test]
async fn submit_registration_posts_the_json_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/register").json_body(json!({
            "username": "neo",
            "email": "neo@example.com",
            "password": "Abcdef1!"
        }));
        then.status(201).json_body(json!({}));
    });

    let http = ReqwestHttp::new();
    submit_registration(&http, &server.base_url(), &form())
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn rejected_registration_surfaces_upstream_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/register");
        then.status(409)
            .json_body(json!({ "errors": [{ "message": "email taken" }] }));
    });

    let http = ReqwestHttp::new();
    let outcome = register_submission(&http, &server.base_url(), &form()).await;
    assert_eq!(
        outcome,
        RegisterOutcome::Failure {
            error: "email taken".to_string()
        }
    );
}

#[tokio::test]
async fn unreachable_upstream_reports_generic_retry_message() {
    // Port 9 is discard; nothing is listening there in the test environment.
    let http = ReqwestHttp::with_timeout(1);
    let outcome = register_submission(&http, "http://127.0.0.1:9", &form()).await;
    assert_eq!(
        outcome,
        RegisterOutcome::Failure {
            error: "Registration failed. Please try again.".to_string()
        }
    );
}
