//! Shared backend contract for the MAFFA site.
//!
//! This crate owns the request/response shapes of the two backend calls
//! (`GET /api/gigs`, `POST /api/contact`) and the small state machines that
//! turn their outcomes into what the page shows. Both the Leptos `client`
//! and `cli` drive the same types, so the user-facing behavior cannot drift
//! between them.
//!
//! Nothing in here performs I/O: transports live with their callers.

pub mod config;
pub mod contact;
pub mod feed;
pub mod gig;

pub use config::{BACKEND_URL_ENV, BackendConfig, DEFAULT_BACKEND_URL};
pub use contact::{CONTACT_SOURCE, ContactDraft, ContactForm, ContactReply, ContactRequest, SubmissionResult};
pub use feed::FeedState;
pub use gig::Gig;
