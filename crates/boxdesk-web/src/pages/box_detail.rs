//! Detail view of one box

use crate::app::ClientHandle;
use crate::components::{device_list::DeviceList, status_badge::StatusBadge};
use crate::edits::{edit_assignee, edit_status, outcome_message};
use boxdesk_core::{Locale, MessageKey, Translator};
use boxdesk_sync::{BoxSession, EditOutcome};
use boxdesk_types::{Assignee, BoxRecord, Status, UNASSIGNED};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Box header with status and technician pickers, followed by its devices
///
/// Every settled edit is written back through `on_settled`, so the list
/// shows what the detail view shows.
#[component]
pub fn BoxDetail(
    /// Box as found in the snapshot
    record: BoxRecord,
    /// Record store client
    client: ClientHandle,
    /// Names offered in the technician picker
    technicians: Signal<Vec<String>>,
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
    /// Return to the dashboard
    on_back: Callback<()>,
    /// Called with the box after each edit settles
    on_settled: Callback<BoxRecord>,
) -> impl IntoView {
    let tr = move || Translator::new(locale.get());
    let box_number = record.box_number.clone();
    let device_type = record.device_type.clone().unwrap_or_default();

    let session = RwSignal::new(BoxSession::new(record));
    let error = RwSignal::new(None::<MessageKey>);

    let status = Memo::new(move |_| session.with(BoxSession::status));
    let assignee = Memo::new(move |_| session.with(|s| s.assignee().clone()));

    // Lost edits show their message; confirmations clear it
    let settle = move |outcome: &EditOutcome, failure: MessageKey| {
        error.try_set(outcome_message(outcome, failure));
        if let Some(record) = session.try_with_untracked(BoxSession::record) {
            on_settled.run(record);
        }
    };

    let on_device_settled =
        Callback::new(move |outcome: EditOutcome| settle(&outcome, MessageKey::DeviceUpdateError));

    let on_status_change = move |ev| {
        let Ok(next) = event_target_value(&ev).parse::<Status>() else {
            return;
        };
        let Some(api) = client.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Some(outcome) = edit_status(session, &api, next).await {
                settle(&outcome, MessageKey::BoxUpdateError);
            }
        });
    };

    let on_assignee_change = move |ev| {
        let next = Assignee::from_selection(&event_target_value(&ev));
        let Some(api) = client.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Some(outcome) = edit_assignee(session, &api, next).await {
                settle(&outcome, MessageKey::BoxUpdateError);
            }
        });
    };

    // Configured names, plus the current assignee if it is not one of them
    let technician_options = move || {
        let mut names = technicians.get();
        if let Some(current) = assignee.with(|a| a.technician().map(str::to_string)) {
            if !names.contains(&current) {
                names.push(current);
            }
        }
        names
    };

    view! {
        <div class="box-detail">
            <button class="btn back" on:click=move |_| on_back.run(())>
                {move || tr().t(MessageKey::CommonClose)}
            </button>

            <div class="box-detail-header">
                <h2>{move || tr().t(MessageKey::BoxDetails)} " #" {box_number}</h2>
                <p class="device-type">{device_type}</p>
                <StatusBadge status=status locale=locale />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="error-banner">
                    {move || error.get().map(|key| tr().t(key)).unwrap_or_default()}
                </p>
            </Show>

            <div class="box-detail-fields">
                <label>
                    {move || tr().t(MessageKey::CommonStatus)}
                    <select on:change=on_status_change>
                        {Status::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || status.get() == option
                                    >
                                        {move || tr().status(option)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label>
                    {move || tr().t(MessageKey::BoxAssignedTechnician)}
                    <select on:change=on_assignee_change>
                        <option
                            value=UNASSIGNED
                            selected=move || assignee.with(Assignee::is_unassigned)
                        >
                            {move || tr().t(MessageKey::DashboardUnassigned)}
                        </option>
                        {move || {
                            technician_options()
                                .into_iter()
                                .map(|name| {
                                    let current = Some(name.clone());
                                    let is_current = move || {
                                        assignee.with(|a| a.technician() == current.as_deref())
                                    };
                                    view! {
                                        <option value=name.clone() selected=is_current>
                                            {name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
            </div>

            <div class="sync-note">
                <strong>{move || tr().t(MessageKey::CommonImportantNote)}</strong>
                <p>{move || tr().t(MessageKey::BoxSyncNote)}</p>
            </div>

            <h3>{move || tr().t(MessageKey::CommonDevices)}</h3>
            <DeviceList session=session client=client locale=locale on_settled=on_device_settled />
        </div>
    }
}
