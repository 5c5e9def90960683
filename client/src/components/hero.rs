//! Hero block: headline, tagline, calls to action, social links.

use leptos::prelude::*;

use crate::components::social_pill::{SocialGlyph, SocialPill};
use crate::content::{ARTIST_NAME, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__copy">
                <h1 class="hero__title">
                    "Sound of the night."
                    <span class="hero__name">{ARTIST_NAME}</span>
                </h1>
                <p class="hero__tagline">{TAGLINE}</p>
                <div class="hero__actions">
                    <SocialPill href="#music" label="Ascolta">
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                            <path d="M8 5v14l11-7z"></path>
                        </svg>
                        "Ascolta ora"
                    </SocialPill>
                    <SocialPill href="#contact" label="Booking">
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                            <path d="M3 6h18v2H3zm0 5h18v2H3zm0 5h18v2H3z"></path>
                        </svg>
                        "Booking"
                    </SocialPill>
                </div>
                <div class="hero__socials">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <SocialPill href=link.href label=link.label>
                                    <SocialGlyph icon=link.icon/>
                                </SocialPill>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="hero__badge">
                <div class="hero__monogram">"M"</div>
                <div class="hero__role">"DJ / Producer"</div>
            </div>
        </section>
    }
}
