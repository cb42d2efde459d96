use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crystalpay_axum::WebhookDispatcher;

use crate::config::Config;
use crate::confirm::ConfirmPayment;
use crate::sig_down::SigDown;
use crate::telemetry;

/// Starts the webhook server.
///
/// - Loads `.env` variables.
/// - Installs the log subscriber.
/// - Builds the CrystalPay client from the config file.
/// - Serves the webhook route until SIGINT or SIGTERM.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    telemetry::init();

    let config = Config::load()?;
    let client = config.client()?;

    let dispatcher = match config.salt() {
        Some(salt) => WebhookDispatcher::new().with_signature_salt(salt),
        None => {
            tracing::warn!("No salt configured, payment notifications are not verified");
            WebhookDispatcher::new()
        }
    };
    dispatcher.register(ConfirmPayment::new(client));

    let http_endpoints = Router::new()
        .merge(dispatcher.arm(config.webhook_path())?)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path()
                )
            }),
        );

    let addr = SocketAddr::new(config.host(), config.port());
    tracing::info!(
        "Listening for payment notifications at http://{}{}",
        addr,
        config.webhook_path()
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!("Failed to bind to {}: {}", addr, e))?;

    let sig_down = SigDown::try_new()?;
    let cancellation_token = sig_down.cancellation_token();
    axum::serve(listener, http_endpoints)
        .with_graceful_shutdown(async move { cancellation_token.cancelled().await })
        .await?;

    Ok(())
}
