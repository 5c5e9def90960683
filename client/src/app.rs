//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use wire::{BackendConfig, ContactForm, FeedState};

use crate::config::backend_config;
use crate::content::ARTIST_NAME;
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="it">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the backend address once and provides it, together with the
/// feed and contact form state, to the page below.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend: BackendConfig = backend_config();
    let feed = RwSignal::new(FeedState::default());
    let contact = RwSignal::new(ContactForm::default());

    provide_context(backend);
    provide_context(feed);
    provide_context(contact);

    view! {
        <Stylesheet id="leptos" href="/pkg/maffa-site.css"/>
        <Title text=format!("{ARTIST_NAME} | DJ / Producer")/>
        <Meta name="description" content="DJ/Producer. Tech House, Melodic, Club Energy."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
