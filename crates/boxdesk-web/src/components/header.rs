//! Application header with the language toggle

use boxdesk_core::{Locale, MessageKey, Translator};
use leptos::prelude::*;

/// Title bar; the button switches to the other language
#[component]
pub fn Header(
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
    /// Called when the language button is pressed
    on_toggle_locale: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="logo">
                {move || Translator::new(locale.get()).t(MessageKey::DashboardTitle)}
            </h1>
            <button
                class="locale-toggle"
                title=move || locale.get().toggle().as_str()
                on:click=move |_| on_toggle_locale.run(())
            >
                {move || locale.get().toggle().as_str().to_uppercase()}
            </button>
        </header>
    }
}
