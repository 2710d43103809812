//! Browser entry point, built for `wasm32-unknown-unknown`
#![forbid(unsafe_code)]

#[cfg(target_arch = "wasm32")]
fn main() {
    use boxdesk_core::UiConfig;
    use boxdesk_web::{ApiClient, App, api_client::UI_CONFIG_PATH};
    use leptos::prelude::*;
    use leptos::task::spawn_local;
    use tracing::warn;

    let origin = location().origin().unwrap_or_default();

    // Same-origin proxy unless the bundle was built against another backend
    let api_base = option_env!("BOXDESK_API_URL")
        .map_or_else(|| format!("{origin}/api"), str::to_string);
    let client = ApiClient::new(api_base);

    // Settings always come from the host server that served the page
    let config_url = format!("{origin}{UI_CONFIG_PATH}");
    spawn_local(async move {
        let ui = client
            .fetch_ui_config(&config_url)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "using default ui settings");
                UiConfig::default()
            });

        leptos::mount::mount_to_body(move || {
            view! {
                <App
                    client=client.clone()
                    initial_locale=ui.default_locale
                    technicians=ui.technicians.clone()
                />
            }
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("boxdesk-ui runs in the browser; build it with --target wasm32-unknown-unknown");
}
