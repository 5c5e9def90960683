//! Embedded streaming players.

use leptos::prelude::*;

use crate::content::PLAYER_EMBEDS;

#[component]
pub fn MusicSection() -> impl IntoView {
    view! {
        <section id="music" class="section">
            <h2 class="section__title">"Latest Releases"</h2>
            <p class="section__lead">"Stream on your favorite platform."</p>
            <div class="music__players">
                {PLAYER_EMBEDS
                    .into_iter()
                    .map(|embed| {
                        view! {
                            <iframe
                                class="music__player"
                                title=embed.title
                                src=embed.src
                                allow=embed.allow
                                {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                            ></iframe>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
