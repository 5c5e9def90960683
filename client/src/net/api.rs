//! REST calls to the artist backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since both calls are only meaningful in the
//! browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! The feed call returns `Result` so the caller can log before settling to the
//! empty state. The contact call never fails: every outcome is folded into a
//! [`ContactReply`] for the form to display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{BackendConfig, ContactReply, ContactRequest, Gig};

/// Failure loading the gig feed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("gig feed request failed: {0}")]
    Status(u16),
    #[error("gig feed body invalid: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Fetch upcoming gigs from `GET {base}/api/gigs`, in backend order.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a JSON array of gigs.
pub async fn fetch_gigs(backend: &BackendConfig) -> Result<Vec<Gig>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&backend.gigs_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Gig>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = backend;
        Err(ApiError::Unavailable)
    }
}

/// Post a contact submission to `POST {base}/api/contact`.
pub async fn submit_contact(backend: &BackendConfig, request: &ContactRequest) -> ContactReply {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::post(&backend.contact_url());
        let Ok(req) = builder.json(request) else {
            return ContactReply::Unreachable;
        };
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("contact submission did not complete: {e}");
                return ContactReply::Unreachable;
            }
        };
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ContactReply::from_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, request);
        ContactReply::Unreachable
    }
}
