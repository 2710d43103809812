//! Dialog editing the service fields of one device

use crate::app::ClientHandle;
use crate::edits::{edit_devices, outcome_message};
use boxdesk_core::{Locale, MessageKey, Translator};
use boxdesk_sync::{BoxSession, EditOutcome};
use boxdesk_types::{Device, DevicePatch, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

/// Edit dialog; closes itself once the save is confirmed and stays open
/// with an inline error when the save is rolled back or superseded
#[component]
pub fn DeviceEditModal(
    /// Device being edited, as shown when the dialog opened
    device: Device,
    /// Session owning the box
    session: RwSignal<BoxSession>,
    /// Record store client
    client: ClientHandle,
    /// Active language
    #[prop(into)]
    locale: Signal<Locale>,
    /// Called when the dialog should disappear
    on_close: Callback<()>,
    /// Called with the outcome of every save
    on_settled: Callback<EditOutcome>,
) -> impl IntoView {
    let tr = move || Translator::new(locale.get());

    let status = RwSignal::new(device.status);
    let point_of_error = RwSignal::new(device.point_of_error.clone().unwrap_or_default());
    let error_reason = RwSignal::new(device.error_reason.clone().unwrap_or_default());
    let error_analysis = RwSignal::new(device.error_analysis.clone().unwrap_or_default());
    let internal_comments = RwSignal::new(device.internal_comments.clone().unwrap_or_default());
    let saving = RwSignal::new(false);
    let failure = RwSignal::new(None::<MessageKey>);

    let device_id = device.id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(api) = client.try_get_value() else {
            return;
        };

        let patch = DevicePatch {
            status: Some(status.get_untracked()),
            point_of_error: Some(point_of_error.get_untracked()),
            error_reason: Some(error_reason.get_untracked()),
            error_analysis: Some(error_analysis.get_untracked()),
            internal_comments: Some(internal_comments.get_untracked()),
        };
        let ids = vec![device_id.clone()];
        saving.set(true);
        failure.set(None);

        spawn_local(async move {
            match edit_devices(session, &api, &patch, &ids).await {
                Ok(Some(outcome)) => {
                    let message = outcome_message(&outcome, MessageKey::DeviceUpdateError);
                    on_settled.run(outcome);
                    match message {
                        Some(key) => {
                            failure.try_set(Some(key));
                            saving.try_set(false);
                        }
                        None => on_close.run(()),
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "device edit refused");
                    failure.try_set(Some(MessageKey::DeviceUpdateError));
                    saving.try_set(false);
                }
            }
        });
    };

    let warranty = device.warranty_date.clone().unwrap_or_default();
    let customer_issue = device.customer_issue.clone().unwrap_or_default();

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=on_submit>
                <h2>{move || tr().t(MessageKey::DeviceEdit)}</h2>
                <dl class="device-meta">
                    <dt>{move || tr().t(MessageKey::DeviceSerialNumber)}</dt>
                    <dd>{device.serial_number.clone()}</dd>
                    <dt>{move || tr().t(MessageKey::DeviceWarrantyUntil)}</dt>
                    <dd>{warranty}</dd>
                    <dt>{move || tr().t(MessageKey::DeviceCustomerIssue)}</dt>
                    <dd>{customer_issue}</dd>
                </dl>

                <label>
                    {move || tr().t(MessageKey::CommonStatus)}
                    <select on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<Status>() {
                            status.set(value);
                        }
                    }>
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

                <TextField
                    label=MessageKey::DevicePointOfError
                    value=point_of_error
                    locale=locale
                />
                <TextField label=MessageKey::DeviceErrorReason value=error_reason locale=locale />
                <TextField
                    label=MessageKey::DeviceErrorAnalysis
                    value=error_analysis
                    locale=locale
                    multiline=true
                />
                <TextField
                    label=MessageKey::DeviceInternalComments
                    value=internal_comments
                    locale=locale
                    multiline=true
                />

                <Show when=move || failure.get().is_some()>
                    <p class="error-banner">
                        {move || failure.get().map(|key| tr().t(key)).unwrap_or_default()}
                    </p>
                </Show>

                <div class="modal-actions">
                    <button
                        type="button"
                        disabled=move || saving.get()
                        on:click=move |_| on_close.run(())
                    >
                        {move || tr().t(MessageKey::CommonCancel)}
                    </button>
                    <button type="submit" disabled=move || saving.get()>
                        {move || {
                            if saving.get() {
                                tr().t(MessageKey::CommonSaving)
                            } else {
                                tr().t(MessageKey::CommonSave)
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Labelled text input bound to a signal
#[component]
fn TextField(
    label: MessageKey,
    value: RwSignal<String>,
    #[prop(into)] locale: Signal<Locale>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label>
            {move || Translator::new(locale.get()).t(label)}
            {input}
        </label>
    }
}
