use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use serde_json::{Value, json};
use wire::ContactDraft;

use super::*;

async fn spawn_backend(router: Router) -> BackendConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    BackendConfig::resolve(Some(&format!("http://{addr}")))
}

async fn closed_backend() -> BackendConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    BackendConfig::resolve(Some(&format!("http://{addr}")))
}

fn gigs_router(status: StatusCode, body: Value) -> Router {
    Router::new().route("/api/gigs", get(move || async move { (status, Json(body)) }))
}

/// Contact endpoint answering with a fixed reply and recording request bodies.
fn contact_router(status: StatusCode, reply: &'static str, seen: Arc<Mutex<Vec<Value>>>) -> Router {
    Router::new().route(
        "/api/contact",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(body);
                (status, reply)
            }
        }),
    )
}

fn ada_form() -> ContactForm {
    ContactForm {
        draft: ContactDraft {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: String::new(),
            message: "Hi".to_owned(),
        },
        ..ContactForm::default()
    }
}

// =============================================================
// Gig feed
// =============================================================

#[tokio::test]
async fn feed_keeps_backend_order_and_length() {
    let body = json!([
        {"date": "2026-06-01T23:00:00Z", "title": "Opening", "venue": "Tenax", "city": "Firenze"},
        {"date": "2026-06-08T23:00:00Z", "title": "Residency", "venue": "Amnesia", "city": "Ibiza", "ticket_url": "https://t.example/r"},
        {"date": "2026-06-15T23:00:00Z", "title": "Closing", "venue": "Cocoricò", "city": "Riccione"}
    ]);
    let backend = spawn_backend(gigs_router(StatusCode::OK, body)).await;
    let feed = load_feed(&reqwest::Client::new(), &backend).await;

    let titles: Vec<&str> = feed.gigs().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Opening", "Residency", "Closing"]);
    assert_eq!(feed.caption(), None);
    assert_eq!(feed.gigs()[1].ticket_link(), Some("https://t.example/r"));
}

#[tokio::test]
async fn feed_with_zero_items_is_empty() {
    let backend = spawn_backend(gigs_router(StatusCode::OK, json!([]))).await;
    let feed = load_feed(&reqwest::Client::new(), &backend).await;
    assert_eq!(feed, FeedState::Empty);
    assert_eq!(feed.caption(), Some("Presto saranno annunciate nuove date."));
}

#[tokio::test]
async fn feed_server_error_is_empty() {
    let backend = spawn_backend(gigs_router(StatusCode::INTERNAL_SERVER_ERROR, json!({"detail": "boom"}))).await;
    let http = reqwest::Client::new();

    assert!(matches!(fetch_gigs(&http, &backend).await, Err(CliError::FeedStatus(500))));
    assert_eq!(load_feed(&http, &backend).await, FeedState::Empty);
}

#[tokio::test]
async fn feed_unexpected_body_is_empty() {
    let backend = spawn_backend(gigs_router(StatusCode::OK, json!({"gigs": []}))).await;
    let http = reqwest::Client::new();

    assert!(matches!(fetch_gigs(&http, &backend).await, Err(CliError::Http(_))));
    assert_eq!(load_feed(&http, &backend).await, FeedState::Empty);
}

#[tokio::test]
async fn feed_unreachable_is_empty() {
    let backend = closed_backend().await;
    let feed = load_feed(&reqwest::Client::new(), &backend).await;
    assert_eq!(feed, FeedState::Empty);
    assert_eq!(feed.caption(), Some("Presto saranno annunciate nuove date."));
}

// =============================================================
// Contact submission
// =============================================================

#[tokio::test]
async fn contact_success_resets_draft_and_tags_source() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let backend = spawn_backend(contact_router(StatusCode::OK, "{}", seen.clone())).await;
    let mut form = ada_form();

    let result = submit(&reqwest::Client::new(), &backend, &mut form).await.unwrap();

    assert!(result.ok);
    assert_eq!(result.message, "Messaggio inviato! Ti risponderemo presto.");
    assert_eq!(form.draft, ContactDraft::default());
    assert!(!form.sending);

    let bodies = seen.lock().unwrap().clone();
    assert_eq!(
        bodies,
        vec![json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "",
            "message": "Hi",
            "source": "website"
        })]
    );
}

#[tokio::test]
async fn contact_rejection_shows_server_detail_and_keeps_draft() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let backend = spawn_backend(contact_router(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":"Invalid email"}"#,
        seen,
    ))
    .await;
    let mut form = ada_form();

    let result = submit(&reqwest::Client::new(), &backend, &mut form).await.unwrap();

    assert!(!result.ok);
    assert_eq!(result.message, "Invalid email");
    assert_eq!(form.draft, ada_form().draft);
    assert!(!form.sending);
}

#[tokio::test]
async fn contact_rejection_without_detail_uses_fallback() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let backend = spawn_backend(contact_router(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", seen)).await;
    let mut form = ada_form();

    let result = submit(&reqwest::Client::new(), &backend, &mut form).await.unwrap();

    assert!(!result.ok);
    assert_eq!(result.message, "Errore durante l'invio. Riprova.");
    assert_eq!(form.draft, ada_form().draft);
}

#[tokio::test]
async fn contact_unreachable_shows_connectivity_message_and_keeps_draft() {
    let backend = closed_backend().await;
    let mut form = ada_form();

    let result = submit(&reqwest::Client::new(), &backend, &mut form).await.unwrap();

    assert!(!result.ok);
    assert_eq!(result.message, "Connessione non disponibile. Riprova tra poco.");
    assert_eq!(form.draft, ada_form().draft);
    assert!(!form.sending);
    assert!(!form.submit_disabled());
}

#[tokio::test]
async fn contact_with_missing_field_is_not_sent() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let backend = spawn_backend(contact_router(StatusCode::OK, "{}", seen.clone())).await;
    let mut form = ada_form();
    form.draft.email.clear();

    let err = submit(&reqwest::Client::new(), &backend, &mut form).await.unwrap_err();

    assert!(matches!(err, CliError::MissingField("email")));
    assert!(seen.lock().unwrap().is_empty());
    assert!(!form.sending);
}

#[tokio::test]
async fn contact_while_in_flight_is_refused() {
    let backend = closed_backend().await;
    let mut form = ada_form();
    form.sending = true;

    let err = submit(&reqwest::Client::new(), &backend, &mut form).await.unwrap_err();
    assert!(matches!(err, CliError::SubmissionInFlight));
}
