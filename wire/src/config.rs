//! Backend base-address resolution.
//!
//! The address is resolved once at startup and then passed around as a value;
//! nothing reads the environment ad hoc after that.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable carrying the backend override.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Resolved backend base address (no trailing slash).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Resolve the base address from an optional override.
    ///
    /// A missing or blank override falls back to [`DEFAULT_BACKEND_URL`].
    /// Surrounding whitespace and trailing slashes are stripped so endpoint
    /// paths can be appended directly.
    #[must_use]
    pub fn resolve(override_url: Option<&str>) -> Self {
        let base_url = override_url
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_owned();
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` endpoint for the gig feed.
    #[must_use]
    pub fn gigs_url(&self) -> String {
        format!("{}/api/gigs", self.base_url)
    }

    /// `POST` endpoint for contact submissions.
    #[must_use]
    pub fn contact_url(&self) -> String {
        format!("{}/api/contact", self.base_url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
