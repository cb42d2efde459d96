//! Cash register ("checkout") information and balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::proto::CurrencyAmount;
use crate::timestamp::Timestamp;

/// Result of `me/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutInfo {
    /// Numeric cash register identifier.
    pub id: i64,
    pub name: String,
    /// Merchant status level; gates which payment methods are available.
    pub status_level: Decimal,
    pub created_at: Timestamp,
}

/// Result of `balance/info`, keyed by payment method code (e.g. `BITCOIN`, `LZTMARKET`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutBalance {
    pub balances: BTreeMap<String, CurrencyAmount>,
}

impl CheckoutBalance {
    /// Balance held under a payment method code, if the register has that account.
    pub fn get(&self, method: &str) -> Option<&CurrencyAmount> {
        self.balances.get(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_checkout_info_from_wire() {
        let info: CheckoutInfo = serde_json::from_value(json!({
            "id": 1234,
            "name": "my-shop",
            "status_level": 2,
            "created_at": "2023-05-08 14:36:55"
        }))
        .unwrap();
        assert_eq!(info.id, 1234);
        assert_eq!(info.status_level, dec!(2));
        assert_eq!(info.created_at.to_string(), "2023-05-08 14:36:55");
    }

    #[test]
    fn test_balances_accept_unknown_methods() {
        let balance: CheckoutBalance = serde_json::from_value(json!({
            "balances": {
                "BITCOIN": { "amount": 0.0015, "currency": "BTC" },
                "SOMETHINGNEW": { "amount": "12.5", "currency": "XYZ" }
            }
        }))
        .unwrap();
        assert_eq!(balance.get("BITCOIN").unwrap().amount, dec!(0.0015));
        assert_eq!(balance.get("SOMETHINGNEW").unwrap().amount, dec!(12.5));
        assert!(balance.get("TRON").is_none());
    }

    #[test]
    fn test_mistyped_created_at_is_rejected() {
        let result = serde_json::from_value::<CheckoutInfo>(json!({
            "id": 1,
            "name": "x",
            "status_level": 1,
            "created_at": 1683556615
        }));
        assert!(result.is_err());
    }
}
