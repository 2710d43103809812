//! Summary card for one box

use crate::components::status_badge::StatusBadge;
use boxdesk_core::{Locale, MessageKey, Translator};
use boxdesk_types::{BoxId, BoxRecord};
use leptos::prelude::*;

/// Card shown in the dashboard grid; clicking opens the box
#[component]
pub fn BoxCard(
    /// Box to summarize
    record: BoxRecord,
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
    /// Called with the box id when the card is clicked
    on_select: Callback<BoxId>,
) -> impl IntoView {
    let tr = move || Translator::new(locale.get());
    let BoxRecord {
        id,
        box_number,
        device_type,
        status,
        assigned_technician,
        devices,
        ..
    } = record;
    let device_count = devices.len();
    let technician = assigned_technician.technician().map(str::to_string);

    view! {
        <div class="box-card" on:click=move |_| on_select.run(id.clone())>
            <div class="box-card-header">
                <h3>"#" {box_number}</h3>
                <StatusBadge status=Signal::stored(status) locale=locale />
            </div>
            <p class="device-type">{device_type.unwrap_or_default()}</p>
            <p class="assigned-to">
                {move || tr().t(MessageKey::DashboardAssignedTo)} ": "
                {move || {
                    technician
                        .clone()
                        .unwrap_or_else(|| tr().t(MessageKey::DashboardUnassigned).to_string())
                }}
            </p>
            <p class="device-count">{move || tr().device_count(device_count)}</p>
        </div>
    }
}
