//! The payment webhook: parse, filter on `state`, fan out.

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use crystalpay_types::webhook::PaymentEvent;
use serde_json::json;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::callback::PaymentCallback;
use crate::error::{CallbackFailure, WebhookError};

pub const DEFAULT_WEBHOOK_PATH: &str = "/payment-webhook";

/// Body sent back for a completed payment. The spelling is what CrystalPay expects.
pub const PAYMENT_ACKNOWLEDGEMENT: &str = "Successfull payment!";

/// Reply to a delivered notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    /// The event was `payed` and every callback ran successfully.
    Payment,
    /// The event is in some other state. No callback ran.
    Ignored,
}

impl IntoResponse for Acknowledgement {
    fn into_response(self) -> Response {
        match self {
            Acknowledgement::Payment => (
                StatusCode::OK,
                Json(json!({ "message": PAYMENT_ACKNOWLEDGEMENT })),
            )
                .into_response(),
            Acknowledgement::Ignored => StatusCode::OK.into_response(),
        }
    }
}

/// Registry of payment callbacks, served on one webhook route.
///
/// Clones share the registry and the armed state, so callbacks registered
/// through any clone, before or after [`WebhookDispatcher::arm`], are seen by
/// the router. A copy made by [`WebhookDispatcher::with_signature_salt`] shares
/// only the registry. A notification runs against the callbacks registered at
/// the moment it arrived.
///
/// ```rust
/// use crystalpay_axum::{CallbackResult, WebhookDispatcher, DEFAULT_WEBHOOK_PATH};
/// use crystalpay_types::webhook::PaymentEvent;
/// use std::sync::Arc;
///
/// let dispatcher = WebhookDispatcher::new().with_signature_salt("salt");
/// dispatcher.register(|event: Arc<PaymentEvent>| async move {
///     println!("paid: {}", event.id);
///     CallbackResult::Ok(())
/// });
/// let app: axum::Router = dispatcher.arm(DEFAULT_WEBHOOK_PATH).unwrap();
/// ```
#[derive(Clone, Default)]
pub struct WebhookDispatcher {
    callbacks: Arc<RwLock<Vec<Arc<dyn PaymentCallback>>>>,
    armed: Arc<OnceLock<String>>,
    signature_salt: Option<Arc<str>>,
}

impl std::fmt::Debug for WebhookDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookDispatcher")
            .field("callbacks", &self.len())
            .field("armed", &self.endpoint())
            .field("verifies_signature", &self.signature_salt.is_some())
            .finish()
    }
}

impl WebhookDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects notifications whose `signature` is not `sha1("{id}:{salt}")`.
    ///
    /// Without a salt, notifications are accepted unverified.
    ///
    /// The returned dispatcher shares the callback registry with `self` but is
    /// unarmed, even if `self` is already armed. Routers built by `self.arm`
    /// keep their previous verification; arm the returned dispatcher to serve
    /// verified notifications.
    pub fn with_signature_salt(&self, salt: impl Into<String>) -> Self {
        Self {
            callbacks: Arc::clone(&self.callbacks),
            armed: Arc::default(),
            signature_salt: Some(Arc::from(salt.into())),
        }
    }

    /// Appends a callback. Callbacks run in registration order.
    pub fn register<C>(&self, callback: C)
    where
        C: PaymentCallback + 'static,
    {
        self.callbacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(callback));
    }

    pub fn len(&self) -> usize {
        self.callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the router serving `POST {path}`. A dispatcher arms once.
    pub fn arm(&self, path: &str) -> Result<Router, WebhookError> {
        if !path.starts_with('/') {
            return Err(WebhookError::InvalidPath {
                path: path.to_string(),
            });
        }
        if self.armed.set(path.to_string()).is_err() {
            return Err(WebhookError::AlreadyArmed {
                path: self.endpoint().unwrap_or(path).to_string(),
            });
        }

        #[cfg(feature = "telemetry")]
        tracing::info!(path, "Payment webhook armed");

        Ok(Router::new()
            .route(path, post(receive))
            .with_state(self.clone()))
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get().is_some()
    }

    /// The path passed to [`WebhookDispatcher::arm`], once armed.
    pub fn endpoint(&self) -> Option<&str> {
        self.armed.get().map(String::as_str)
    }

    /// Processes one raw notification body.
    ///
    /// A `payed` event is handed to every callback, one after another, as the
    /// same shared [`PaymentEvent`]. A failing callback does not stop the ones
    /// after it; the failures are collected into
    /// [`WebhookError::CallbackFailed`].
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "crystalpay.webhook", skip_all, err)
    )]
    pub async fn handle(&self, body: &[u8]) -> Result<Acknowledgement, WebhookError> {
        let event: PaymentEvent =
            serde_json::from_slice(body).map_err(WebhookError::InvalidEvent)?;

        if let Some(salt) = &self.signature_salt {
            if !event.verify_signature(salt) {
                return Err(WebhookError::InvalidSignature { id: event.id });
            }
        }

        if !event.is_payed() {
            #[cfg(feature = "telemetry")]
            tracing::debug!(id = %event.id, state = %event.state, "Ignoring payment event");
            return Ok(Acknowledgement::Ignored);
        }

        self.fan_out(Arc::new(event)).await?;
        Ok(Acknowledgement::Payment)
    }

    async fn fan_out(&self, event: Arc<PaymentEvent>) -> Result<(), WebhookError> {
        let callbacks = self.snapshot();

        #[cfg(feature = "telemetry")]
        tracing::info!(id = %event.id, callbacks = callbacks.len(), "Dispatching payment");

        let mut failures = Vec::new();
        for (index, callback) in callbacks.iter().enumerate() {
            if let Err(error) = callback.on_payment(Arc::clone(&event)).await {
                #[cfg(feature = "telemetry")]
                tracing::warn!(id = %event.id, index, error = %error, "Payment callback failed");
                failures.push(CallbackFailure {
                    index,
                    message: error.to_string(),
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(WebhookError::CallbackFailed {
                event_id: event.id.clone(),
                failures,
            })
        }
    }

    fn snapshot(&self) -> Vec<Arc<dyn PaymentCallback>> {
        self.callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

async fn receive(
    State(dispatcher): State<WebhookDispatcher>,
    body: Bytes,
) -> Result<Acknowledgement, WebhookError> {
    dispatcher.handle(&body).await
}
