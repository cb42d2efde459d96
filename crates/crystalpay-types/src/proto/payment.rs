//! Payment methods configured on the cash register.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings of one payment method as returned by `method/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub name: String,
    pub enabled: bool,
    /// Extra commission the cash register adds on top, in percent.
    pub extra_commission_percent: Decimal,
    pub minimal_status_level: i64,
    pub currency: String,
    /// Service commission, in percent.
    pub commission_percent: Decimal,
    /// Fixed service commission.
    pub commission: Decimal,
}

/// Result of `method/list`, keyed by method code (e.g. `CRYSTALPAY`, `BITCOIN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethods {
    pub methods: BTreeMap<String, PaymentMethod>,
}

impl PaymentMethods {
    pub fn get(&self, code: &str) -> Option<&PaymentMethod> {
        self.methods.get(code)
    }

    /// Codes of the methods currently enabled, in lexical order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.methods
            .iter()
            .filter(|(_, method)| method.enabled)
            .map(|(code, _)| code.as_str())
    }
}
