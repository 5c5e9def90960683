//! Gig records as served by `GET /api/gigs`.

#[cfg(test)]
#[path = "gig_test.rs"]
mod gig_test;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// One upcoming gig. Read-only on the client; rendered in feed order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gig {
    /// Timestamp as sent by the backend (RFC 3339 or a plain date).
    pub date: String,
    pub title: String,
    pub venue: String,
    pub city: String,
    #[serde(default)]
    pub ticket_url: Option<String>,
}

impl Gig {
    /// Calendar date formatted `DD/MM/YYYY` as seen from UTC.
    ///
    /// Used where no viewer clock is available (server render, CLI).
    #[must_use]
    pub fn display_date(&self) -> String {
        self.display_date_in(UtcOffset::UTC)
    }

    /// Calendar date formatted `DD/MM/YYYY` as seen from `offset`.
    ///
    /// Zoned timestamps are shifted into `offset` first, so a gig at
    /// `22:30Z` lands on the next day for a viewer at UTC+2. Naive timestamps and
    /// plain dates carry no zone and keep their written date. Anything else is
    /// returned verbatim.
    #[must_use]
    pub fn display_date_in(&self, offset: UtcOffset) -> String {
        let date = match self.instant() {
            Some(at) => Some(at.to_offset(offset).date()),
            None => parse_leading_date(&self.date),
        };
        date.map_or_else(|| self.date.clone(), format_date)
    }

    /// The gig's instant, when `date` is a zoned RFC 3339 timestamp.
    #[must_use]
    pub fn instant(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(self.date.trim(), &Rfc3339).ok()
    }

    /// Ticket link, if the backend sent a non-empty one.
    #[must_use]
    pub fn ticket_link(&self) -> Option<&str> {
        self.ticket_url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// `venue • city` line shown under the title.
    #[must_use]
    pub fn location_line(&self) -> String {
        format!("{} • {}", self.venue, self.city)
    }
}

fn format_date(date: Date) -> String {
    format!("{:02}/{:02}/{}", date.day(), u8::from(date.month()), date.year())
}

fn parse_leading_date(raw: &str) -> Option<Date> {
    let head = raw.trim().get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}
