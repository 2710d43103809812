//! Colored status pill

use boxdesk_core::{Locale, Translator};
use boxdesk_types::Status;
use leptos::prelude::*;

/// CSS modifier class for a status
pub const fn status_class(status: Status) -> &'static str {
    match status {
        Status::New => "status-badge status-new",
        Status::InProgress => "status-badge status-in-progress",
        Status::Completed => "status-badge status-completed",
        Status::OnHold => "status-badge status-on-hold",
    }
}

/// Status pill with its translated label
#[component]
pub fn StatusBadge(
    /// Status to show
    #[prop(into)]
    status: Signal<Status>,
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
) -> impl IntoView {
    view! {
        <span class=move || status_class(status.get())>
            {move || Translator::new(locale.get()).status(status.get())}
        </span>
    }
}
