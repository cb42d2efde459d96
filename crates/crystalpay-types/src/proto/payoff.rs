//! Payoffs: withdrawals from the cash register balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::proto::SubtractFrom;
use crate::timestamp::Timestamp;

/// Result of `payoff/create`. The payoff must then be submitted or cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCreated {
    pub id: String,
    pub method: String,
    pub commission: Decimal,
    pub amount: Decimal,
    /// The amount converted to RUB, the cash register's accounting currency.
    pub rub_amount: Decimal,
    /// What the recipient wallet will receive.
    pub receive_amount: Decimal,
    /// What will be taken from the balance.
    pub deduction_amount: Decimal,
    pub subtract_from: SubtractFrom,
    pub currency: String,
}

/// Result of `payoff/submit`, `payoff/cancel` and `payoff/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffInfo {
    pub id: String,
    pub state: String,
    pub method: String,
    pub currency: String,
    pub commission: Decimal,
    pub amount: Decimal,
    pub rub_amount: Decimal,
    pub receive_amount: Decimal,
    pub deduction_amount: Decimal,
    pub subtract_from: SubtractFrom,
    pub wallet: String,
    pub message: Option<String>,
    pub callback_url: Option<String>,
    pub extra: Option<String>,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payoff_info() {
        let info: PayoffInfo = serde_json::from_value(json!({
            "id": "p_1",
            "state": "processing",
            "method": "BITCOIN",
            "currency": "BTC",
            "commission": 0.0001,
            "amount": 0.01,
            "rub_amount": 25000,
            "receive_amount": 0.01,
            "deduction_amount": 0.0101,
            "subtract_from": "balance",
            "wallet": "bc1qexample",
            "message": null,
            "callback_url": null,
            "extra": "order-77",
            "created_at": "2024-03-01 12:00:00"
        }))
        .unwrap();
        assert_eq!(info.subtract_from, SubtractFrom::Balance);
        assert_eq!(info.extra.as_deref(), Some("order-77"));
    }

    #[test]
    fn test_mistyped_amount_is_rejected() {
        let result = serde_json::from_value::<PayoffCreated>(json!({
            "id": "p_1",
            "method": "BITCOIN",
            "commission": 0,
            "amount": true,
            "rub_amount": 0,
            "receive_amount": 0,
            "deduction_amount": 0,
            "subtract_from": "amount",
            "currency": "BTC"
        }));
        assert!(result.is_err());
    }
}
