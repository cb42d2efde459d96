use crystalpay_types::proto::{HistorySummary, PaymentHistory, PayoffHistory};

use crate::api::call;
use crate::error::CrystalPayError;
use crate::payload::RequestPayload;
use crate::transport::{Endpoint, RequestExecutor};

/// Paged payment and payoff history.
#[derive(Clone, Copy, Debug)]
pub struct History<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> History<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// `history/payments`: one page of incoming invoices, `items` per page.
    pub async fn payments(&self, page: u32, items: u32) -> Result<PaymentHistory, CrystalPayError> {
        call(self.executor, Endpoint::HistoryPayments, page_payload(page, items)).await
    }

    /// `history/payoffs`: one page of withdrawals, `items` per page.
    pub async fn payoffs(&self, page: u32, items: u32) -> Result<PayoffHistory, CrystalPayError> {
        call(self.executor, Endpoint::HistoryPayoffs, page_payload(page, items)).await
    }

    /// `history/summary`: all-time incoming and outgoing totals.
    pub async fn summary(&self) -> Result<HistorySummary, CrystalPayError> {
        call(self.executor, Endpoint::HistorySummary, RequestPayload::new()).await
    }
}

fn page_payload(page: u32, items: u32) -> RequestPayload {
    RequestPayload::new().with("page", page).with("items", items)
}

#[cfg(test)]
mod tests {
    use crate::test_util::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_payments_sends_page_fields() {
        let mock_server = MockServer::start().await;
        respond_ok(
            &mock_server,
            "history/payments",
            json!({ "payments": [{
                "id": "inv_1",
                "state": "payed",
                "method": "BITCOIN",
                "currency": "BTC",
                "amount": 100,
                "created_at": "2024-03-01 12:00:00",
                "expired_at": "2024-03-01 13:00:00"
            }] }),
        )
        .await;

        let history = mock_client(&mock_server).history().payments(2, 25).await.unwrap();
        assert_eq!(history.payments[0].id, "inv_1");
        assert_eq!(
            last_request_body(&mock_server).await,
            json!({ "page": 2, "items": 25, "auth_login": "login", "auth_secret": "secret" })
        );
    }

    #[tokio::test]
    async fn test_payoffs_use_their_own_endpoint() {
        let mock_server = MockServer::start().await;
        respond_ok(&mock_server, "history/payoffs", json!({ "payoffs": [] })).await;

        let history = mock_client(&mock_server).history().payoffs(1, 10).await.unwrap();
        assert!(history.payoffs.is_empty());
    }

    #[tokio::test]
    async fn test_summary() {
        let mock_server = MockServer::start().await;
        respond_ok(
            &mock_server,
            "history/summary",
            json!({
                "incoming": { "payed_amount": 1500.5, "total_count": 10, "payed_count": 7 },
                "outgoing": { "payed_amount": 200, "total_count": 2, "payed_count": 2 }
            }),
        )
        .await;

        let summary = mock_client(&mock_server).history().summary().await.unwrap();
        assert_eq!(summary.outgoing.payed_count, dec!(2));
    }
}
