//! Bio, highlights, and the press kit card.

use leptos::prelude::*;

use crate::content::{ABOUT_HIGHLIGHTS, ARTIST_NAME, BIO};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="about__bio">
                <h2 class="section__title">{format!("About {ARTIST_NAME}")}</h2>
                <p class="about__text">{BIO}</p>
                <ul class="about__highlights">
                    {ABOUT_HIGHLIGHTS
                        .into_iter()
                        .map(|item| view! { <li><span class="about__dot"></span>{item}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="card">
                <div class="card__eyebrow">"Press Kit"</div>
                <div class="card__title">"Download EPK"</div>
                <p class="card__text">"Photos, logo, bio, technical rider."</p>
                <button class="button button--light button--block" type="button">"Scarica"</button>
            </div>
        </section>
    }
}
