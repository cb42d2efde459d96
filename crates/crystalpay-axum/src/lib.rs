//! Axum endpoint for CrystalPay payment notifications.
//!
//! CrystalPay POSTs an invoice's state to its `callback_url`. This crate turns
//! that request into calls to your own handlers: register any number of
//! [`PaymentCallback`]s on a [`WebhookDispatcher`], then [`arm`](WebhookDispatcher::arm)
//! it to get a [`Router`](axum::Router) you can merge into your app.
//!
//! ```rust,no_run
//! use crystalpay_axum::{CallbackResult, WebhookDispatcher, DEFAULT_WEBHOOK_PATH};
//! use crystalpay_types::webhook::PaymentEvent;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = WebhookDispatcher::new();
//! dispatcher.register(|event: Arc<PaymentEvent>| async move {
//!     println!("order {} paid", event.extra);
//!     CallbackResult::Ok(())
//! });
//!
//! let app = dispatcher.arm(DEFAULT_WEBHOOK_PATH)?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Only events in state `payed` reach the callbacks; they are answered with
//! `{"message": "Successfull payment!"}`. Other states get an empty `200 OK`.
//!
//! # Feature Flags
//!
//! - `telemetry` - Emits `tracing` spans and events for each notification

pub mod callback;
pub mod dispatcher;
pub mod error;

pub use callback::{CallbackError, CallbackResult, PaymentCallback};
pub use dispatcher::{
    Acknowledgement, DEFAULT_WEBHOOK_PATH, PAYMENT_ACKNOWLEDGEMENT, WebhookDispatcher,
};
pub use error::{CallbackFailure, WebhookError};
