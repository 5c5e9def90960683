//! Upcoming gigs section and the one-shot feed loader.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server render always shows the loading caption. After hydration the
//! section fetches `/api/gigs` once and settles the shared `FeedState`; a
//! failed fetch is logged to the console and rendered exactly like an empty
//! feed.

#[cfg(all(test, feature = "ssr"))]
#[path = "gigs_section_test.rs"]
mod gigs_section_test;

use leptos::prelude::*;
use wire::{BackendConfig, FeedState};

use crate::components::gig_card::GigCard;
use crate::content::ARTIST_NAME;

#[component]
pub fn GigsSection() -> impl IntoView {
    let backend = expect_context::<BackendConfig>();
    let feed = expect_context::<RwSignal<FeedState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_gigs(&backend).await;
        if let Err(e) = &outcome {
            log::warn!("gig feed unavailable: {e}");
        }
        feed.set(FeedState::settle(outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = backend;

    view! {
        <section id="gigs" class="section">
            <div class="section__header">
                <div>
                    <h2 class="section__title">"Upcoming Gigs"</h2>
                    <p class="section__lead">"See you on the dancefloor."</p>
                </div>
                <a class="button button--light" href="#contact">{format!("Book {ARTIST_NAME}")}</a>
            </div>
            <div class="gigs__grid" aria-busy=move || feed.with(FeedState::is_loading).to_string()>
                {move || feed.with(render_feed)}
            </div>
        </section>
    }
}

fn render_feed(state: &FeedState) -> AnyView {
    match state.caption() {
        Some(caption) => view! { <p class="gigs__caption">{caption}</p> }.into_any(),
        None => state
            .gigs()
            .iter()
            .cloned()
            .map(|gig| view! { <GigCard gig/> })
            .collect_view()
            .into_any(),
    }
}
