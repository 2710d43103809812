//! Device table with selection and bulk status update

use crate::app::ClientHandle;
use crate::components::{device_edit_modal::DeviceEditModal, status_badge::StatusBadge};
use crate::edits::edit_devices;
use boxdesk_core::{Locale, MessageKey, Translator};
use boxdesk_sync::{BoxSession, EditOutcome};
use boxdesk_types::{Device, DeviceId, DevicePatch, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use tracing::warn;

/// Devices of the open box
#[component]
pub fn DeviceList(
    /// Session owning the box
    session: RwSignal<BoxSession>,
    /// Record store client
    client: ClientHandle,
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
    /// Called with the outcome of every device edit
    on_settled: Callback<EditOutcome>,
) -> impl IntoView {
    let tr = move || Translator::new(locale.get());

    let devices = Memo::new(move |_| session.with(|s| s.devices().to_vec()));
    let selected = RwSignal::new(HashSet::<DeviceId>::new());
    let bulk_status = RwSignal::new(Status::Completed);
    let bulk_saving = RwSignal::new(false);
    let bulk_refused = RwSignal::new(false);
    let editing = RwSignal::new(None::<Device>);

    let all_selected = move || {
        devices.with(|devices| {
            !devices.is_empty() && selected.with(|s| devices.iter().all(|d| s.contains(&d.id)))
        })
    };
    let toggle_all = move |_| {
        if all_selected() {
            selected.update(HashSet::clear);
        } else {
            let ids = devices.with(|devices| devices.iter().map(|d| d.id.clone()).collect());
            selected.set(ids);
        }
    };

    let run_bulk_update = move |_| {
        let ids: Vec<DeviceId> = devices.with_untracked(|devices| {
            selected.with_untracked(|s| {
                devices
                    .iter()
                    .filter(|d| s.contains(&d.id))
                    .map(|d| d.id.clone())
                    .collect()
            })
        });
        if ids.is_empty() || bulk_saving.get_untracked() {
            return;
        }
        let Some(api) = client.try_get_value() else {
            return;
        };

        let patch = DevicePatch::status(bulk_status.get_untracked());
        bulk_saving.set(true);
        bulk_refused.set(false);
        spawn_local(async move {
            match edit_devices(session, &api, &patch, &ids).await {
                Ok(Some(outcome)) => {
                    if !outcome.is_lost() {
                        selected.try_update(HashSet::clear);
                    }
                    on_settled.run(outcome);
                }
                Ok(None) => return,
                Err(e) => {
                    warn!(error = %e, "bulk update refused");
                    bulk_refused.try_set(true);
                }
            }
            bulk_saving.try_set(false);
        });
    };

    let rows = move || {
        devices
            .get()
            .into_iter()
            .map(|device| {
                let id = device.id.clone();
                let checked_id = id.clone();
                let edit_target = device.clone();
                view! {
                    <tr>
                        <td>
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|s| s.contains(&checked_id))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selected.update(|s| {
                                        if checked {
                                            s.insert(id.clone());
                                        } else {
                                            s.remove(&id);
                                        }
                                    });
                                }
                            />
                        </td>
                        <td>{device.serial_number.clone()}</td>
                        <td>
                            <StatusBadge status=Signal::stored(device.status) locale=locale />
                        </td>
                        <td>{device.point_of_error.clone().unwrap_or_default()}</td>
                        <td>{device.customer_issue.clone().unwrap_or_default()}</td>
                        <td>
                            <button
                                class="btn btn-sm"
                                on:click=move |_| editing.set(Some(edit_target.clone()))
                            >
                                {move || tr().t(MessageKey::CommonEdit)}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let modal = move || {
        editing.get().map(|device| {
            view! {
                <DeviceEditModal
                    device=device
                    session=session
                    client=client
                    locale=locale
                    on_close=Callback::new(move |()| editing.set(None))
                    on_settled=on_settled
                />
            }
        })
    };

    view! {
        <section class="device-list">
            <div class="bulk-update">
                <h3>{move || tr().t(MessageKey::BoxBulkUpdate)}</h3>
                <label>
                    <input type="checkbox" prop:checked=all_selected on:change=toggle_all />
                    {move || tr().t(MessageKey::BoxSelectAll)}
                </label>
                <span class="selection-count">
                    {move || selected.with(HashSet::len)} " "
                    {move || tr().t(MessageKey::CommonSelected)}
                </span>
                <select on:change=move |ev| {
                    if let Ok(status) = event_target_value(&ev).parse::<Status>() {
                        bulk_status.set(status);
                    }
                }>
                    {Status::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    selected=move || bulk_status.get() == option
                                >
                                    {move || tr().status(option)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button
                    class="btn"
                    disabled=move || bulk_saving.get() || selected.with(HashSet::is_empty)
                    on:click=run_bulk_update
                >
                    {move || {
                        if bulk_saving.get() {
                            tr().t(MessageKey::CommonSaving)
                        } else {
                            tr().t(MessageKey::BoxUpdateSelected)
                        }
                    }}
                </button>
            </div>

            <Show when=move || bulk_refused.get()>
                <p class="error-banner">{move || tr().t(MessageKey::DeviceUpdateError)}</p>
            </Show>

            <table class="device-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>{move || tr().t(MessageKey::DeviceSerialNumber)}</th>
                        <th>{move || tr().t(MessageKey::CommonStatus)}</th>
                        <th>{move || tr().t(MessageKey::DevicePointOfError)}</th>
                        <th>{move || tr().t(MessageKey::DeviceCustomerIssue)}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <Show when=move || devices.with(Vec::is_empty)>
                <p class="empty">{move || tr().t(MessageKey::CommonNoData)}</p>
            </Show>

            {modal}
        </section>
    }
}
