//! Backend calls over `reqwest`.
//!
//! Same contract and the same `wire` state machines as the browser bundle, so
//! the CLI reports exactly what a visitor would see.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use wire::{BackendConfig, ContactForm, ContactReply, ContactRequest, FeedState, Gig, SubmissionResult};

use crate::CliError;

/// `GET {base}/api/gigs`, decoded in backend order.
pub async fn fetch_gigs(http: &reqwest::Client, backend: &BackendConfig) -> Result<Vec<Gig>, CliError> {
    let response = http.get(backend.gigs_url()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::FeedStatus(status.as_u16()));
    }
    Ok(response.json::<Vec<Gig>>().await?)
}

/// Run the one-shot feed load. Failures are logged and settle to empty.
pub async fn load_feed(http: &reqwest::Client, backend: &BackendConfig) -> FeedState {
    let outcome = fetch_gigs(http, backend).await;
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, url = %backend.gigs_url(), "gig feed unavailable");
    }
    FeedState::settle(outcome)
}

/// `POST {base}/api/contact`, classified into a [`ContactReply`].
pub async fn submit_contact(http: &reqwest::Client, backend: &BackendConfig, request: &ContactRequest) -> ContactReply {
    let response = match http.post(backend.contact_url()).json(request).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "contact submission did not complete");
            return ContactReply::Unreachable;
        }
    };
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ContactReply::from_response(status, &body)
}

/// Drive one submission through the form state machine.
pub async fn submit(
    http: &reqwest::Client,
    backend: &BackendConfig,
    form: &mut ContactForm,
) -> Result<SubmissionResult, CliError> {
    let Some(request) = form.begin() else {
        return Err(form
            .draft
            .missing_field()
            .map_or(CliError::SubmissionInFlight, CliError::MissingField));
    };
    let reply = submit_contact(http, backend, &request).await;
    Ok(form.settle(reply).clone())
}
