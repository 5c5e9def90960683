//! Page footer with the copyright line.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

use crate::content::ARTIST_NAME;

fn copyright_line(year: i32) -> String {
    format!("© {year} {ARTIST_NAME} — All rights reserved.")
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();
    view! { <footer class="site-footer">{copyright_line(year)}</footer> }
}
