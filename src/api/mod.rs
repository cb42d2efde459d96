//! Operation groups.
//!
//! Each group is a thin view over the client's [`RequestExecutor`]: a method
//! builds a fresh payload holding exactly its declared fields, sends it to a
//! fixed endpoint, and validates the reply into a type from
//! [`crystalpay_types::proto`].
//!
//! | Group | Endpoints |
//! |-------|-----------|
//! | [`Checkout`] | `me/info`, `balance/info` |
//! | [`Payment`] | `method/list`, `method/edit` |
//! | [`Invoice`] | `invoice/create`, `invoice/info` |
//! | [`Payoff`] | `payoff/create`, `payoff/submit`, `payoff/cancel`, `payoff/info` |
//! | [`Ticker`] | `ticker/list`, `ticker/get` |
//! | [`History`] | `history/payments`, `history/payoffs`, `history/summary` |

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::CrystalPayError;
use crate::payload::RequestPayload;
use crate::transport::{Endpoint, RemoteResponse, RequestExecutor};

mod checkout;
mod history;
mod invoice;
mod payment;
mod payoff;
mod ticker;

pub use checkout::Checkout;
pub use history::History;
pub use invoice::{Invoice, NewInvoice};
pub use payment::Payment;
pub use payoff::{NewPayoff, Payoff};
pub use ticker::Ticker;

/// POSTs `payload` and validates the reply as `T`.
async fn call<T: DeserializeOwned>(
    executor: &RequestExecutor,
    endpoint: Endpoint,
    payload: RequestPayload,
) -> Result<T, CrystalPayError> {
    post(executor, endpoint, payload).await?.into_typed()
}

async fn post(
    executor: &RequestExecutor,
    endpoint: Endpoint,
    payload: RequestPayload,
) -> Result<RemoteResponse, CrystalPayError> {
    executor.execute(endpoint, Method::POST, payload).await
}
