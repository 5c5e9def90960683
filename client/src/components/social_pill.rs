//! Rounded outbound link with an icon, used in the hero.

use leptos::prelude::*;

use crate::content::SocialIcon;

#[component]
pub fn SocialPill(href: &'static str, label: &'static str, children: Children) -> impl IntoView {
    let external = href.starts_with("http");
    view! {
        <a
            class="social-pill"
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            aria-label=label
        >
            {children()}
            <span class="social-pill__label">{label}</span>
        </a>
    }
}

/// 18px inline SVG for a social platform.
#[component]
pub fn SocialGlyph(icon: SocialIcon) -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d=icon.path()></path>
        </svg>
    }
}
