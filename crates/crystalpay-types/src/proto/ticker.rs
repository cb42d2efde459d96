//! Exchange rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of `ticker/list`: the currency codes CrystalPay quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tickers {
    pub tickers: Vec<String>,
}

/// Result of `ticker/get`: rates of each currency against `base_currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRates {
    pub base_currency: String,
    pub currencies: BTreeMap<String, Decimal>,
}

impl TickerRates {
    pub fn rate(&self, currency: &str) -> Option<Decimal> {
        self.currencies.get(currency).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_rates() {
        let rates: TickerRates = serde_json::from_value(json!({
            "base_currency": "RUB",
            "currencies": { "BTC": 6000000, "USDT": 92.35 }
        }))
        .unwrap();
        assert_eq!(rates.rate("USDT"), Some(dec!(92.35)));
        assert_eq!(rates.rate("ETH"), None);
    }
}
