use crystalpay_types::proto::{CheckoutBalance, CheckoutInfo};

use crate::api::call;
use crate::error::CrystalPayError;
use crate::payload::RequestPayload;
use crate::transport::{Endpoint, RequestExecutor};

/// Cash register information and balances.
#[derive(Clone, Copy, Debug)]
pub struct Checkout<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Checkout<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// `me/info`: the cash register this client authenticates as.
    pub async fn me(&self) -> Result<CheckoutInfo, CrystalPayError> {
        call(self.executor, Endpoint::MeInfo, RequestPayload::new()).await
    }

    /// `balance/info`: balances per payment method.
    ///
    /// `hide_empty` leaves out zero balances.
    pub async fn balance(&self, hide_empty: bool) -> Result<CheckoutBalance, CrystalPayError> {
        let payload = RequestPayload::new().with("hide_empty", hide_empty);
        call(self.executor, Endpoint::BalanceInfo, payload).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_me() {
        let mock_server = MockServer::start().await;
        respond_ok(
            &mock_server,
            "me/info",
            json!({ "id": 42, "name": "shop", "status_level": 1, "created_at": "2023-05-08 14:36:55" }),
        )
        .await;

        let info = mock_client(&mock_server).checkout().me().await.unwrap();
        assert_eq!(info.id, 42);
        assert_eq!(info.name, "shop");
        assert_eq!(
            last_request_fields(&mock_server).await,
            sorted(&["auth_login", "auth_secret"])
        );
    }

    #[tokio::test]
    async fn test_balance_then_me_does_not_leak_hide_empty() {
        let mock_server = MockServer::start().await;
        respond_ok(
            &mock_server,
            "balance/info",
            json!({ "balances": { "LZTMARKET": { "amount": 150.5, "currency": "RUB" } } }),
        )
        .await;
        respond_ok(
            &mock_server,
            "me/info",
            json!({ "id": 1, "name": "shop", "status_level": 0, "created_at": "2023-05-08 14:36:55" }),
        )
        .await;

        let client = mock_client(&mock_server);
        let checkout = client.checkout();
        let balance = checkout.balance(true).await.unwrap();
        assert_eq!(balance.get("LZTMARKET").unwrap().amount, dec!(150.5));
        assert_eq!(last_request_body(&mock_server).await["hide_empty"], true);

        checkout.me().await.unwrap();
        assert_eq!(
            last_request_fields(&mock_server).await,
            sorted(&["auth_login", "auth_secret"])
        );
    }
}
