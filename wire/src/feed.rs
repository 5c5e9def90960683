//! Gig feed loading state.
//!
//! DESIGN
//! ======
//! A tagged enum instead of a `loading` flag plus a list, so "still loading
//! but holding gigs" cannot be represented. `Loading` is the only initial
//! state; `Empty` and `Populated` are terminal for a page activation.
//!
//! A failed fetch and an empty feed both settle to `Empty`: the visitor only
//! ever sees "no dates announced yet".

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::gig::Gig;

/// Caption shown while the feed request is in flight.
pub const LOADING_CAPTION: &str = "Caricamento date...";

/// Caption shown when there is nothing to list.
pub const EMPTY_CAPTION: &str = "Presto saranno annunciate nuove date.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    Loading,
    Empty,
    Populated(Vec<Gig>),
}

impl FeedState {
    /// Settle the feed from the outcome of the one-shot fetch.
    ///
    /// The error is dropped on purpose; callers log it if they care.
    #[must_use]
    pub fn settle<E>(outcome: Result<Vec<Gig>, E>) -> Self {
        match outcome {
            Ok(gigs) if !gigs.is_empty() => Self::Populated(gigs),
            Ok(_) | Err(_) => Self::Empty,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Gigs to render, in feed order. Empty unless populated.
    #[must_use]
    pub fn gigs(&self) -> &[Gig] {
        match self {
            Self::Populated(gigs) => gigs,
            Self::Loading | Self::Empty => &[],
        }
    }

    /// Placeholder text replacing the gig cards, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_CAPTION),
            Self::Empty => Some(EMPTY_CAPTION),
            Self::Populated(_) => None,
        }
    }
}
