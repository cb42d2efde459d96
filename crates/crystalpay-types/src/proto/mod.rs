//! Typed results of CrystalPay API operations.
//!
//! Every CrystalPay response is a JSON object carrying `error: bool` and
//! `errors: [string]` next to the operation's own fields. The envelope is
//! checked by the client before these types are validated, so the structs
//! below hold only the operation-specific fields.
//!
//! # Key Types
//!
//! - [`checkout`] - Cash register info and balances (`me/info`, `balance/info`)
//! - [`payment`] - Payment methods (`method/list`)
//! - [`invoice`] - Invoices (`invoice/create`, `invoice/info`)
//! - [`payoff`] - Withdrawals (`payoff/create`, `payoff/submit`, `payoff/cancel`, `payoff/info`)
//! - [`ticker`] - Exchange rates (`ticker/list`, `ticker/get`)
//! - [`history`] - Paged history and totals (`history/payments`, `history/payoffs`, `history/summary`)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod checkout;
pub mod history;
pub mod invoice;
pub mod payment;
pub mod payoff;
pub mod ticker;

pub use checkout::*;
pub use history::*;
pub use invoice::*;
pub use payment::*;
pub use payoff::*;
pub use ticker::*;

/// An amount together with the currency it is denominated in.
///
/// ```json
/// { "amount": 0.0015, "currency": "BTC" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub amount: Decimal,
    pub currency: String,
}

/// Kind of invoice: a sale to a customer, or a top-up of the cash register itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Purchase,
    Topup,
}

impl InvoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceType::Purchase => "purchase",
            InvoiceType::Topup => "topup",
        }
    }
}

impl Display for InvoiceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a payoff commission is taken from.
///
/// - `Balance`: the commission is charged on top, from the remaining balance
/// - `Amount`: the commission is subtracted from the payoff amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtractFrom {
    Balance,
    Amount,
}

impl SubtractFrom {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubtractFrom::Balance => "balance",
            SubtractFrom::Amount => "amount",
        }
    }
}

impl Display for SubtractFrom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
