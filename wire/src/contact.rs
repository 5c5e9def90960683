//! Contact form draft, submission outcome, and the form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ContactForm::begin` turns the draft into a [`ContactRequest`] and marks the
//! form as sending; the transport posts it and classifies what came back as a
//! [`ContactReply`]; `ContactForm::settle` applies that reply. Transports never
//! touch the draft or the result directly.
//!
//! Submissions are not deduplicated: every accepted `begin` is a new message.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

/// Origin tag sent with every submission.
pub const CONTACT_SOURCE: &str = "website";

pub const SUCCESS_MESSAGE: &str = "Messaggio inviato! Ti risponderemo presto.";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Errore durante l'invio. Riprova.";
pub const UNREACHABLE_MESSAGE: &str = "Connessione non disponibile. Riprova tra poco.";

/// Editable form fields. `subject` stays an empty string when unused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// First required field that is empty, by its wire name.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [("name", &self.name), ("email", &self.email), ("message", &self.message)]
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
    }

    /// Wire body for `POST /api/contact`.
    #[must_use]
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            source: CONTACT_SOURCE,
        }
    }
}

/// JSON body of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub source: &'static str,
}

/// One line of feedback under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
    pub ok: bool,
    pub message: String,
}

impl SubmissionResult {
    fn success() -> Self {
        Self { ok: true, message: SUCCESS_MESSAGE.to_owned() }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self { ok: false, message: message.into() }
    }
}

/// What the transport observed for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactReply {
    /// 2xx; the body is ignored.
    Accepted,
    /// Non-2xx, with the server's `detail` when the body carried one.
    Rejected { detail: Option<String> },
    /// The request never completed.
    Unreachable,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ContactReply {
    /// Classify a completed HTTP exchange from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            Self::Accepted
        } else {
            Self::Rejected { detail: error_detail(body) }
        }
    }

    fn into_result(self) -> SubmissionResult {
        match self {
            Self::Accepted => SubmissionResult::success(),
            Self::Rejected { detail } => SubmissionResult::failure(
                detail
                    .filter(|detail| !detail.is_empty())
                    .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_owned()),
            ),
            Self::Unreachable => SubmissionResult::failure(UNREACHABLE_MESSAGE),
        }
    }
}

/// `detail` from an error body, only when it is a non-empty string.
///
/// Validation errors that carry a structured `detail` (arrays, objects) fall
/// through to the generic message rather than being shown raw.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

/// Transient contact form state: draft, in-flight flag, last result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub sending: bool,
    pub result: Option<SubmissionResult>,
}

impl ContactForm {
    /// Start a submission.
    ///
    /// Returns the request to post, or `None` when a submission is already in
    /// flight or a required field is empty. On success the form is marked as
    /// sending and the previous result is cleared.
    pub fn begin(&mut self) -> Option<ContactRequest> {
        if self.sending || self.draft.missing_field().is_some() {
            return None;
        }
        self.sending = true;
        self.result = None;
        Some(self.draft.to_request())
    }

    /// Apply the transport outcome. The draft is only cleared on success.
    pub fn settle(&mut self, reply: ContactReply) -> &SubmissionResult {
        if reply == ContactReply::Accepted {
            self.draft = ContactDraft::default();
        }
        self.sending = false;
        self.result.insert(reply.into_result())
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.sending
    }
}
