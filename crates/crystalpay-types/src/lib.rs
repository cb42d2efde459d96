#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the CrystalPay payment API.
//!
//! This crate holds the plain data shapes exchanged with CrystalPay, with no
//! networking of its own. It is shared by the `crystalpay` client and the
//! `crystalpay-axum` webhook receiver.
//!
//! # Modules
//!
//! - [`config`] - `$VAR` / `${VAR}` resolution for secrets in config files
//! - [`proto`] - Typed results for every remote operation
//! - [`signature`] - SHA-1 request and callback signatures
//! - [`timestamp`] - Date-time values as CrystalPay formats them
//! - [`webhook`] - The inbound payment notification
//!
//! # Amounts
//!
//! Monetary values are [`rust_decimal::Decimal`]. They deserialize from JSON
//! numbers as well as numeric strings.

pub mod config;
pub mod proto;
pub mod signature;
pub mod timestamp;
pub mod webhook;
