//! Dashboard page listing boxes with search and technician filter

use crate::components::box_card::BoxCard;
use boxdesk_core::filter::{ALL_TECHNICIANS, TechnicianFilter, UNASSIGNED_FILTER};
use boxdesk_core::{Locale, MessageKey, Translator};
use boxdesk_sync::{DashboardState, LoadState};
use boxdesk_types::BoxId;
use leptos::prelude::*;

/// Main dashboard page component
#[component]
pub fn Dashboard(
    /// Snapshot plus filter state
    state: RwSignal<DashboardState>,
    /// Configured technician names
    technicians: Signal<Vec<String>>,
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
    /// Called with the id of the clicked box
    on_select: Callback<BoxId>,
) -> impl IntoView {
    let tr = move || Translator::new(locale.get());

    let visible = Memo::new(move |_| {
        state.with(|s| s.visible_boxes().into_iter().cloned().collect::<Vec<_>>())
    });
    let roster = Memo::new(move |_| {
        technicians.with(|configured| state.with(|s| s.technicians(configured)))
    });
    let filter = Memo::new(move |_| state.with(|s| s.technician.clone()));
    let failed = Memo::new(move |_| state.with(|s| s.load.error().is_some()));
    let empty = Memo::new(move |_| state.with(|s| matches!(s.load, LoadState::Empty)));

    let cards = move || {
        visible
            .get()
            .into_iter()
            .map(|record| view! { <BoxCard record=record locale=locale on_select=on_select /> })
            .collect_view()
    };

    view! {
        <div class="dashboard">
            <div class="dashboard-filters">
                <input
                    type="search"
                    class="search-input"
                    placeholder=move || tr().t(MessageKey::DashboardSearchBoxes)
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        state.update(|s| s.search = search);
                    }
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let technician = TechnicianFilter::parse(&event_target_value(&ev));
                        state.update(|s| s.technician = technician);
                    }
                >
                    <option
                        value=ALL_TECHNICIANS
                        selected=move || filter.get() == TechnicianFilter::All
                    >
                        {move || tr().t(MessageKey::DashboardAllTechnicians)}
                    </option>
                    <option
                        value=UNASSIGNED_FILTER
                        selected=move || filter.get() == TechnicianFilter::Unassigned
                    >
                        {move || tr().t(MessageKey::DashboardUnassigned)}
                    </option>
                    {move || {
                        roster
                            .get()
                            .into_iter()
                            .map(|name| {
                                let option = TechnicianFilter::Technician(name.clone());
                                view! {
                                    <option
                                        value=name.clone()
                                        selected=move || filter.with(|f| *f == option)
                                    >
                                        {name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <Show when=move || failed.get()>
                <p class="error-banner">{move || tr().t(MessageKey::DashboardLoadError)}</p>
            </Show>
            <Show when=move || empty.get()>
                <p class="empty">{move || tr().t(MessageKey::DashboardNoBoxes)}</p>
            </Show>
            <Show when=move || !empty.get() && !failed.get() && visible.with(Vec::is_empty)>
                <p class="empty">{move || tr().t(MessageKey::CommonNoData)}</p>
            </Show>

            <div class="box-grid">{cards}</div>
        </div>
    }
}
