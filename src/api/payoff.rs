use crystalpay_types::proto::{PayoffCreated, PayoffInfo, SubtractFrom};
use crystalpay_types::signature::{payoff_action_signature, payoff_create_signature};
use rust_decimal::Decimal;

use crate::api::call;
use crate::error::CrystalPayError;
use crate::payload::RequestPayload;
use crate::transport::{Endpoint, RequestExecutor};

/// Arguments of `payoff/create`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayoff {
    /// See [`NewPayoff::signed`] for the usual way to compute it.
    pub signature: String,
    pub method: String,
    pub amount: Decimal,
    pub wallet: String,
    pub subtract_from: SubtractFrom,
    pub amount_currency: Option<String>,
    pub callback_url: Option<String>,
    pub extra: Option<String>,
}

impl NewPayoff {
    pub fn new(
        signature: impl Into<String>,
        method: impl Into<String>,
        amount: Decimal,
        wallet: impl Into<String>,
        subtract_from: SubtractFrom,
    ) -> Self {
        Self {
            signature: signature.into(),
            method: method.into(),
            amount,
            wallet: wallet.into(),
            subtract_from,
            amount_currency: None,
            callback_url: None,
            extra: None,
        }
    }

    /// Like [`NewPayoff::new`], signing with `sha1("{amount}:{method}:{wallet}:{salt}")`.
    pub fn signed(
        salt: &str,
        method: impl Into<String>,
        amount: Decimal,
        wallet: impl Into<String>,
        subtract_from: SubtractFrom,
    ) -> Self {
        let method = method.into();
        let wallet = wallet.into();
        let signature = payoff_create_signature(amount.normalize(), &method, &wallet, salt);
        Self::new(signature, method, amount, wallet, subtract_from)
    }

    pub fn amount_currency(mut self, currency: impl Into<String>) -> Self {
        self.amount_currency = Some(currency.into());
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn payload(&self) -> RequestPayload {
        RequestPayload::new()
            .with("signature", self.signature.as_str())
            .with("method", self.method.as_str())
            .with_amount("amount", self.amount)
            .with("wallet", self.wallet.as_str())
            .with("subtract_from", self.subtract_from.as_str())
            .with("amount_currency", self.amount_currency.clone())
            .with("callback_url", self.callback_url.clone())
            .with("extra", self.extra.clone())
    }
}

/// Withdrawals: create, then submit or cancel.
#[derive(Clone, Copy, Debug)]
pub struct Payoff<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Payoff<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// `payoff/create`: quotes a withdrawal. Nothing is sent until [`Payoff::submit`].
    pub async fn create(&self, payoff: &NewPayoff) -> Result<PayoffCreated, CrystalPayError> {
        call(self.executor, Endpoint::PayoffCreate, payoff.payload()).await
    }

    /// `payoff/submit`: confirms a created payoff.
    pub async fn submit(&self, signature: &str, id: &str) -> Result<PayoffInfo, CrystalPayError> {
        call(self.executor, Endpoint::PayoffSubmit, action(signature, id)).await
    }

    /// `payoff/cancel`: drops a created payoff.
    pub async fn cancel(&self, signature: &str, id: &str) -> Result<PayoffInfo, CrystalPayError> {
        call(self.executor, Endpoint::PayoffCancel, action(signature, id)).await
    }

    /// `payoff/info`: current state of a payoff.
    pub async fn get(&self, id: &str) -> Result<PayoffInfo, CrystalPayError> {
        let payload = RequestPayload::new().with("id", id);
        call(self.executor, Endpoint::PayoffInfo, payload).await
    }

    /// Submits with the signature derived from `salt`.
    pub async fn submit_with_salt(&self, salt: &str, id: &str) -> Result<PayoffInfo, CrystalPayError> {
        self.submit(&payoff_action_signature(id, salt), id).await
    }

    /// Cancels with the signature derived from `salt`.
    pub async fn cancel_with_salt(&self, salt: &str, id: &str) -> Result<PayoffInfo, CrystalPayError> {
        self.cancel(&payoff_action_signature(id, salt), id).await
    }
}

fn action(signature: &str, id: &str) -> RequestPayload {
    RequestPayload::new()
        .with("signature", signature)
        .with("id", id)
}
