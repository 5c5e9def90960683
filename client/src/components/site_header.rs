//! Sticky header with the wordmark and section anchors.

use leptos::prelude::*;

use crate::content::{ARTIST_NAME, NAV_SECTIONS};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__wordmark" href="#">{ARTIST_NAME}</a>
                <nav class="site-header__nav">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|section| view! { <a href=section.href()>{section.label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
