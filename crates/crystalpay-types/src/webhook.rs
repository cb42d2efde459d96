//! The notification CrystalPay POSTs to an invoice's `callback_url`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::signature::callback_signature;
use crate::timestamp::Timestamp;

/// Invoice state that marks a completed payment.
///
/// The spelling is CrystalPay's.
pub const PAYED_STATE: &str = "payed";

/// A payment notification.
///
/// Every field is required; a body missing any of them is rejected.
///
/// # Example
///
/// ```json
/// {
///   "signature": "3f2b...", "id": "123456789_abcdefghij", "url": "https://pay.crystalpay.io/?i=...",
///   "state": "payed", "type": "purchase", "method": "BITCOIN", "required_method": "",
///   "currency": "BTC", "service_commission": 0, "extra_commission": 0,
///   "amount": 100, "pay_amount": 100, "remaining_amount": 0, "balance_amount": 100,
///   "description": "", "redirect_url": "https://example.com/thanks",
///   "callback_url": "https://example.com/payment-webhook", "extra": "order-42",
///   "created_at": "2024-03-01 12:00:00", "expired_at": "2024-03-01 13:00:00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// `sha1("{id}:{salt}")`, see [`PaymentEvent::verify_signature`].
    pub signature: String,
    pub id: String,
    pub url: String,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub method: String,
    pub required_method: String,
    pub currency: String,
    pub service_commission: Decimal,
    pub extra_commission: Decimal,
    pub amount: Decimal,
    pub pay_amount: Decimal,
    pub remaining_amount: Decimal,
    pub balance_amount: Decimal,
    pub description: String,
    pub redirect_url: String,
    pub callback_url: String,
    pub extra: String,
    pub created_at: Timestamp,
    pub expired_at: Timestamp,
}

impl PaymentEvent {
    pub fn is_payed(&self) -> bool {
        self.state == PAYED_STATE
    }

    /// Checks `signature` against the cash register's salt.
    pub fn verify_signature(&self, salt: &str) -> bool {
        callback_signature(&self.id, salt).eq_ignore_ascii_case(&self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample(state: &str) -> Value {
        json!({
            "signature": callback_signature("123456789_abcdefghij", "salt"),
            "id": "123456789_abcdefghij",
            "url": "https://pay.crystalpay.io/?i=123456789_abcdefghij",
            "state": state,
            "type": "purchase",
            "method": "BITCOIN",
            "required_method": "",
            "currency": "BTC",
            "service_commission": 0,
            "extra_commission": 0,
            "amount": 100,
            "pay_amount": 100,
            "remaining_amount": 0,
            "balance_amount": 100,
            "description": "",
            "redirect_url": "https://example.com/thanks",
            "callback_url": "https://example.com/payment-webhook",
            "extra": "order-42",
            "created_at": "2024-03-01 12:00:00",
            "expired_at": "2024-03-01 13:00:00"
        })
    }

    #[test]
    fn test_payed_event() {
        let event: PaymentEvent = serde_json::from_value(sample("payed")).unwrap();
        assert!(event.is_payed());
        assert!(event.verify_signature("salt"));
        assert!(!event.verify_signature("other-salt"));
    }

    #[test]
    fn test_other_state_is_not_payed() {
        let event: PaymentEvent = serde_json::from_value(sample("created")).unwrap();
        assert!(!event.is_payed());
    }

    #[test]
    fn test_every_field_is_required() {
        let mut body = sample("payed");
        body.as_object_mut().unwrap().remove("extra");
        let err = serde_json::from_value::<PaymentEvent>(body).unwrap_err();
        assert!(err.to_string().contains("extra"));
    }
}
