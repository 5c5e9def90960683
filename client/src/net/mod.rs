//! Networking modules for the backend HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two backend requests from the browser. Payload shapes
//! and outcome classification come from the shared `wire` crate.

pub mod api;
