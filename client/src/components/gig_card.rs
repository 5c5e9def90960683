//! Card for one upcoming gig.

#[cfg(test)]
#[path = "gig_card_test.rs"]
mod gig_card_test;

use leptos::prelude::*;
use time::UtcOffset;
use wire::Gig;

#[component]
pub fn GigCard(gig: Gig) -> impl IntoView {
    let ticket = gig.ticket_link().map(str::to_owned);
    let date = local_date(&gig);
    view! {
        <article class="gig-card">
            <time class="gig-card__date" datetime=gig.date.clone()>{date}</time>
            <h3 class="gig-card__title">{gig.title.clone()}</h3>
            <p class="gig-card__place">{gig.location_line()}</p>
            {ticket.map(|href| {
                view! {
                    <a class="gig-card__tickets" href=href target="_blank" rel="noreferrer">
                        "Tickets →"
                    </a>
                }
            })}
        </article>
    }
}

/// Gig date on the visitor's calendar. Without a browser clock (server
/// render) the UTC date is shown.
fn local_date(gig: &Gig) -> String {
    match gig.instant() {
        Some(at) => gig.display_date_in(browser_offset(at)),
        None => gig.display_date(),
    }
}

/// Browser time-zone offset in effect at `at`, so DST is taken per gig.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_precision_loss)]
fn browser_offset(at: time::OffsetDateTime) -> UtcOffset {
    let millis = (at.unix_timestamp_nanos() / 1_000_000) as f64;
    let minutes = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis)).get_timezone_offset();
    offset_from_timezone_minutes(minutes)
}

#[cfg(not(feature = "hydrate"))]
fn browser_offset(_at: time::OffsetDateTime) -> UtcOffset {
    UtcOffset::UTC
}

/// `Date.getTimezoneOffset()` counts minutes west of UTC (CEST is `-120`).
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
#[allow(clippy::cast_possible_truncation)]
fn offset_from_timezone_minutes(minutes: f64) -> UtcOffset {
    if !minutes.is_finite() {
        return UtcOffset::UTC;
    }
    UtcOffset::from_whole_seconds(-(minutes.round() as i32) * 60).unwrap_or(UtcOffset::UTC)
}
