//! Loading component for displaying loading states

use boxdesk_core::{Locale, MessageKey, Translator};
use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Loading(
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{move || Translator::new(locale.get()).t(MessageKey::CommonLoading)}</p>
        </div>
    }
}
