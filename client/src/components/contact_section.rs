//! Booking contact form and the management card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field edits write straight into the shared `ContactForm` draft. Submitting
//! calls `ContactForm::begin`, which refuses while a previous submission is in
//! flight, then posts from a local task and hands the reply to
//! `ContactForm::settle`.

#[cfg(test)]
#[path = "contact_section_test.rs"]
mod contact_section_test;

use leptos::prelude::*;
use wire::{BackendConfig, ContactForm};

use crate::content::{BOOKING_EMAIL, HOME_BASE, PRESS_EMAIL, SOCIAL_LINKS};

fn submit_label(sending: bool) -> &'static str {
    if sending { "Invio..." } else { "Invia messaggio" }
}

fn result_class(ok: bool) -> &'static str {
    if ok { "contact__result contact__result--ok" } else { "contact__result contact__result--error" }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let backend = expect_context::<BackendConfig>();
    let form = expect_context::<RwSignal<ContactForm>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(ContactForm::begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                let reply = crate::net::api::submit_contact(&backend, &request).await;
                form.update(|f| {
                    f.settle(reply);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&backend, request);
    };

    view! {
        <section id="contact" class="section contact">
            <div class="contact__main">
                <h2 class="section__title">"Booking & Contact"</h2>
                <p class="section__lead">"Per booking, collaborazioni o press: compila il form."</p>
                <form class="contact__form" on:submit=on_submit>
                    <div class="contact__row">
                        <input
                            class="contact__input"
                            type="text"
                            required
                            placeholder="Nome"
                            prop:value=move || form.with(|f| f.draft.name.clone())
                            on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                        />
                        <input
                            class="contact__input"
                            type="email"
                            required
                            placeholder="Email"
                            prop:value=move || form.with(|f| f.draft.email.clone())
                            on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                        />
                    </div>
                    <input
                        class="contact__input"
                        type="text"
                        placeholder="Oggetto (opzionale)"
                        prop:value=move || form.with(|f| f.draft.subject.clone())
                        on:input=move |ev| form.update(|f| f.draft.subject = event_target_value(&ev))
                    />
                    <textarea
                        class="contact__input"
                        required
                        placeholder="Messaggio"
                        rows="6"
                        prop:value=move || form.with(|f| f.draft.message.clone())
                        on:input=move |ev| form.update(|f| f.draft.message = event_target_value(&ev))
                    ></textarea>
                    <button
                        class="button button--gradient"
                        type="submit"
                        disabled=move || form.with(ContactForm::submit_disabled)
                    >
                        {move || submit_label(form.with(|f| f.sending))}
                    </button>
                    {move || {
                        form.with(|f| f.result.clone())
                            .map(|result| view! { <p class=result_class(result.ok)>{result.message}</p> })
                    }}
                </form>
            </div>
            <div class="card">
                <div class="card__eyebrow">"Management"</div>
                <div class="card__line">{BOOKING_EMAIL}</div>
                <div class="card__line">{PRESS_EMAIL}</div>
                <div class="card__eyebrow">"Base"</div>
                <div class="card__line">{HOME_BASE}</div>
                <div class="contact__socials">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class="contact__social" href=link.href target="_blank" rel="noreferrer">
                                    {link.short}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
