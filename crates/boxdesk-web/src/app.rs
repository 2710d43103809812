//! Main Leptos application component

use crate::api_client::ApiClient;
use crate::components::{header::Header, loading::Loading};
use crate::pages::{box_detail::BoxDetail, dashboard::Dashboard};
use boxdesk_core::{Locale, UiConfig};
use boxdesk_sync::{DashboardState, load_snapshot};
use boxdesk_types::{BoxId, BoxRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Record store client shared by the components of one mounted app
///
/// Kept in local storage because the browser client is only ever touched
/// from the UI thread.
pub type ClientHandle = StoredValue<ApiClient, LocalStorage>;

/// Main application component
///
/// Fetches the snapshot once on mount, then switches between the dashboard
/// and the detail view of the selected box.
#[component]
pub fn App(
    /// Record store client
    client: ApiClient,
    /// Language shown first
    #[prop(optional)]
    initial_locale: Locale,
    /// Names offered in the technician pickers
    #[prop(default = UiConfig::default().technicians)]
    technicians: Vec<String>,
) -> impl IntoView {
    let client: ClientHandle = StoredValue::new_local(client);
    let locale = RwSignal::new(initial_locale);
    let technicians = Signal::stored(technicians);
    let dashboard = RwSignal::new(DashboardState::new());

    if let Some(api) = client.try_get_value() {
        spawn_local(async move {
            let state = load_snapshot(&api).await;
            dashboard.try_update(|d| d.load = state);
        });
    }

    let loading = Memo::new(move |_| dashboard.with(|d| d.load.is_loading()));
    let selected = Memo::new(move |_| dashboard.with(|d| d.selected_box().map(|b| b.id.clone())));

    let on_toggle_locale = Callback::new(move |()| locale.update(|l| *l = l.toggle()));
    let on_select = Callback::new(move |id: BoxId| {
        dashboard.update(|d| {
            d.select_box(&id);
        });
    });
    let on_back = Callback::new(move |()| dashboard.update(DashboardState::clear_selection));
    let on_settled = Callback::new(move |record: BoxRecord| {
        dashboard.update(|d| {
            d.replace_box(record);
        });
    });

    // Re-rendered only when loading finishes or the selection changes
    let content = move || {
        if loading.get() {
            return view! { <Loading locale=locale /> }.into_any();
        }
        let detail = selected
            .get()
            .and_then(|_| dashboard.with_untracked(|d| d.selected_box().cloned()));
        match detail {
            Some(record) => view! {
                <BoxDetail
                    record=record
                    client=client
                    technicians=technicians
                    locale=locale
                    on_back=on_back
                    on_settled=on_settled
                />
            }
            .into_any(),
            None => view! {
                <Dashboard
                    state=dashboard
                    technicians=technicians
                    locale=locale
                    on_select=on_select
                />
            }
            .into_any(),
        }
    };

    view! {
        <div class="app">
            <Header locale=locale on_toggle_locale=on_toggle_locale />
            <main class="content">{content}</main>
        </div>
    }
}

