//! Paged payment and payoff history, and all-time totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// One row of `history/payments` or `history/payoffs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub state: String,
    pub method: Option<String>,
    pub currency: String,
    pub amount: Decimal,
    pub created_at: Timestamp,
    /// Payoffs never expire, so this is absent for them.
    #[serde(default)]
    pub expired_at: Option<Timestamp>,
}

/// Result of `history/payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentHistory {
    pub payments: Vec<HistoryEntry>,
}

/// Result of `history/payoffs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffHistory {
    pub payoffs: Vec<HistoryEntry>,
}

/// Totals for one direction. Counts may arrive as floats, e.g. `10.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryTotals {
    pub payed_amount: Decimal,
    pub total_count: Decimal,
    pub payed_count: Decimal,
}

/// Result of `history/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub incoming: HistoryTotals,
    pub outgoing: HistoryTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_payoff_rows_without_expiry() {
        let history: PayoffHistory = serde_json::from_value(json!({
            "payoffs": [{
                "id": "p_1",
                "state": "payed",
                "method": "TRON",
                "currency": "TRX",
                "amount": 10,
                "created_at": "2024-03-01 12:00:00"
            }]
        }))
        .unwrap();
        assert_eq!(history.payoffs.len(), 1);
        assert!(history.payoffs[0].expired_at.is_none());
    }

    #[test]
    fn test_summary() {
        let summary: HistorySummary = serde_json::from_value(json!({
            "incoming": { "payed_amount": 1500.5, "total_count": 10, "payed_count": 7 },
            "outgoing": { "payed_amount": 0, "total_count": 0, "payed_count": 0 }
        }))
        .unwrap();
        assert_eq!(summary.incoming.payed_count, dec!(7));
        assert_eq!(summary.outgoing.total_count, Decimal::ZERO);
    }

    #[test]
    fn test_summary_counts_as_floats() {
        let summary: HistorySummary = serde_json::from_value(json!({
            "incoming": { "payed_amount": 10, "total_count": 10.0, "payed_count": 3.0 },
            "outgoing": { "payed_amount": 0, "total_count": 0, "payed_count": 0 }
        }))
        .unwrap();
        assert_eq!(summary.incoming.total_count, dec!(10));
        assert_eq!(summary.incoming.payed_count, dec!(3));
    }
}
