//! Host server for the boxdesk dashboard
#![forbid(unsafe_code)]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use boxdesk_web::build_app;
    use std::net::{IpAddr, SocketAddr};
    use tracing::{info, warn};

    // Get configuration; logging is not up yet, so report load errors after init
    let (config, load_error) = match boxdesk_core::Config::load() {
        Ok(config) => (config, None),
        Err(e) => (boxdesk_core::Config::default(), Some(e)),
    };

    boxdesk_core::init_logging(&config.logging)?;
    if let Some(e) = load_error {
        warn!("Failed to load config: {}, using defaults", e);
    }

    // Build the application with configuration
    let app = build_app(config.clone());

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("Invalid server host '{}': {}", config.server.host, e))?;
    let addr = SocketAddr::new(host, config.server.port);

    info!(
        records_url = %config.api.records_url,
        tickets_url = %config.api.tickets_url,
        "Starting boxdesk web server on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
