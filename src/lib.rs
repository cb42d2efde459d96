#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async Rust client for the [CrystalPay](https://crystalpay.io) payment API.
//!
//! The client exposes the API as six operation groups, each a set of typed
//! remote calls:
//!
//! - [`CrystalPay::checkout`] - cash register info and balances
//! - [`CrystalPay::payment`] - payment method settings
//! - [`CrystalPay::invoice`] - invoice creation and lookup
//! - [`CrystalPay::payoff`] - withdrawals
//! - [`CrystalPay::ticker`] - exchange rates
//! - [`CrystalPay::history`] - paged history and totals
//!
//! Every call makes exactly one HTTP request. Its body is built fresh from the
//! call's own arguments and the client's credentials. The reply is checked for
//! CrystalPay's `error`/`errors` envelope, then validated into a type from
//! [`crystalpay_types::proto`]. Failures are reported as [`CrystalPayError`]
//! and never retried.
//!
//! # Modules
//!
//! - [`api`] - Operation groups and their argument types
//! - [`client`] - The [`CrystalPay`] client
//! - [`error`] - [`CrystalPayError`]
//! - [`payload`] - Per-call request bodies and [`Credentials`](payload::Credentials)
//! - [`transport`] - The request executor and response envelope
//!
//! # Feature Flags
//!
//! - `telemetry` - Emits a `tracing` span per request with its outcome
//!
//! Receiving CrystalPay's payment callbacks is handled by the `crystalpay-axum` crate.

pub mod api;
pub mod client;
pub mod error;
pub mod payload;
pub mod transport;

#[cfg(test)]
mod test_util;

pub use client::{CrystalPay, DEFAULT_BASE_URL};
pub use crystalpay_types as types;
pub use error::CrystalPayError;
