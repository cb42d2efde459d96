//! Invoices: payment links issued to customers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::proto::InvoiceType;
use crate::timestamp::Timestamp;

/// Result of `invoice/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCreated {
    pub id: String,
    /// Payment page to send the customer to.
    pub url: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: InvoiceType,
}

/// Result of `invoice/info`.
///
/// `state` is kept as a string: CrystalPay adds states over time and `payed`
/// is the only one with fixed meaning here (see [`InvoiceInfo::is_payed`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInfo {
    pub id: String,
    pub url: String,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: InvoiceType,
    pub method: Option<String>,
    pub required_method: Option<String>,
    pub currency: String,
    pub service_commission: Decimal,
    pub extra_commission: Decimal,
    pub amount: Decimal,
    pub pay_amount: Decimal,
    pub remaining_amount: Decimal,
    pub balance_amount: Decimal,
    pub description: Option<String>,
    pub redirect_url: String,
    pub callback_url: Option<String>,
    pub extra: Option<String>,
    pub created_at: Timestamp,
    pub expired_at: Timestamp,
}

impl InvoiceInfo {
    pub fn is_payed(&self) -> bool {
        self.state == crate::webhook::PAYED_STATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_invoice_created() {
        let created: InvoiceCreated = serde_json::from_value(json!({
            "id": "123456789_abcdefghij",
            "url": "https://pay.crystalpay.io/?i=123456789_abcdefghij",
            "amount": 100,
            "type": "purchase"
        }))
        .unwrap();
        assert_eq!(created.kind, InvoiceType::Purchase);
        assert_eq!(created.amount, dec!(100));
    }

    #[test]
    fn test_invoice_info_with_nulls() {
        let info: InvoiceInfo = serde_json::from_value(json!({
            "id": "123456789_abcdefghij",
            "url": "https://pay.crystalpay.io/?i=123456789_abcdefghij",
            "state": "notpayed",
            "type": "topup",
            "method": null,
            "required_method": null,
            "currency": "RUB",
            "service_commission": 0,
            "extra_commission": 0,
            "amount": 100,
            "pay_amount": 100,
            "remaining_amount": 100,
            "balance_amount": 100,
            "description": null,
            "redirect_url": "https://pay.crystalpay.io/",
            "callback_url": null,
            "extra": null,
            "created_at": "2024-03-01 12:00:00",
            "expired_at": "2024-03-01 13:00:00"
        }))
        .unwrap();
        assert_eq!(info.kind, InvoiceType::Topup);
        assert!(!info.is_payed());
        assert!(info.created_at < info.expired_at);
    }

    #[test]
    fn test_unknown_invoice_type_is_rejected() {
        let result = serde_json::from_value::<InvoiceCreated>(json!({
            "id": "x", "url": "y", "amount": 1, "type": "donation"
        }));
        assert!(result.is_err());
    }
}
