//! The single landing page: every section in scroll order.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::gigs_section::GigsSection;
use crate::components::hero::Hero;
use crate::components::music_section::MusicSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader/>
            <main>
                <Hero/>
                <MusicSection/>
                <GigsSection/>
                <AboutSection/>
                <ContactSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
