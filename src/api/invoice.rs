use crystalpay_types::proto::{InvoiceCreated, InvoiceInfo, InvoiceType};
use rust_decimal::Decimal;

use crate::api::call;
use crate::error::CrystalPayError;
use crate::payload::RequestPayload;
use crate::transport::{Endpoint, RequestExecutor};

/// Arguments of `invoice/create`.
///
/// `amount` and `lifetime` are required; `kind` defaults to
/// [`InvoiceType::Purchase`]; every other field is optional and sent as
/// `null` when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub amount: Decimal,
    /// How long the payment link stays valid.
    pub lifetime: u32,
    pub kind: InvoiceType,
    /// Currency `amount` is expressed in, e.g. `USD`. CrystalPay converts it.
    pub amount_currency: Option<String>,
    /// Restricts the payment page to one method code.
    pub required_method: Option<String>,
    pub description: Option<String>,
    pub redirect_url: Option<String>,
    pub callback_url: Option<String>,
    /// Opaque merchant data echoed back in the callback.
    pub extra: Option<String>,
    pub payer_details: Option<String>,
}

impl NewInvoice {
    pub fn new(amount: Decimal, lifetime: u32) -> Self {
        Self {
            amount,
            lifetime,
            kind: InvoiceType::default(),
            amount_currency: None,
            required_method: None,
            description: None,
            redirect_url: None,
            callback_url: None,
            extra: None,
            payer_details: None,
        }
    }

    pub fn kind(mut self, kind: InvoiceType) -> Self {
        self.kind = kind;
        self
    }

    pub fn amount_currency(mut self, currency: impl Into<String>) -> Self {
        self.amount_currency = Some(currency.into());
        self
    }

    pub fn required_method(mut self, method: impl Into<String>) -> Self {
        self.required_method = Some(method.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
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

    pub fn payer_details(mut self, details: impl Into<String>) -> Self {
        self.payer_details = Some(details.into());
        self
    }

    pub fn payload(&self) -> RequestPayload {
        RequestPayload::new()
            .with_amount("amount", self.amount)
            .with("lifetime", self.lifetime)
            .with("type", self.kind.as_str())
            .with("amount_currency", self.amount_currency.clone())
            .with("required_method", self.required_method.clone())
            .with("description", self.description.clone())
            .with("redirect_url", self.redirect_url.clone())
            .with("callback_url", self.callback_url.clone())
            .with("extra", self.extra.clone())
            .with("payer_details", self.payer_details.clone())
    }
}

/// Invoice creation and lookup.
#[derive(Clone, Copy, Debug)]
pub struct Invoice<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Invoice<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// `invoice/create`: issues a payment link.
    pub async fn create(&self, invoice: &NewInvoice) -> Result<InvoiceCreated, CrystalPayError> {
        call(self.executor, Endpoint::InvoiceCreate, invoice.payload()).await
    }

    /// `invoice/info`: current state of an invoice.
    pub async fn get(&self, id: &str) -> Result<InvoiceInfo, CrystalPayError> {
        let payload = RequestPayload::new().with("id", id);
        call(self.executor, Endpoint::InvoiceInfo, payload).await
    }
}
