use crystalpay_types::proto::PaymentMethods;
use rust_decimal::Decimal;

use crate::api::{call, post};
use crate::error::CrystalPayError;
use crate::payload::RequestPayload;
use crate::transport::{Endpoint, RemoteResponse, RequestExecutor};

/// Payment method settings.
#[derive(Clone, Copy, Debug)]
pub struct Payment<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Payment<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// `method/list`: every payment method and its commission settings.
    pub async fn methods(&self) -> Result<PaymentMethods, CrystalPayError> {
        call(self.executor, Endpoint::MethodList, RequestPayload::new()).await
    }

    /// `method/edit`: changes one method's extra commission and availability.
    ///
    /// `method` is a method code such as `LZTMARKET` or `BITCOIN`. The reply
    /// carries no result fields; it is returned as the checked envelope.
    pub async fn edit(
        &self,
        method: &str,
        extra_commission_percent: Decimal,
        enabled: bool,
    ) -> Result<RemoteResponse, CrystalPayError> {
        let payload = RequestPayload::new()
            .with("method", method)
            .with_amount("extra_commission_percent", extra_commission_percent)
            .with("enabled", enabled);
        post(self.executor, Endpoint::MethodEdit, payload).await
    }
}

#[cfg(test)]
mod tests {
    use crate::CrystalPayError;
    use crate::test_util::*;
    use crate::transport::Endpoint;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_edit_sends_declared_fields() {
        let mock_server = MockServer::start().await;
        respond_ok(&mock_server, "method/edit", json!({})).await;

        let reply = mock_client(&mock_server)
            .payment()
            .edit("BITCOIN", dec!(2.5), false)
            .await
            .unwrap();
        assert_eq!(reply.endpoint(), Endpoint::MethodEdit);
        assert!(reply.errors().is_empty());
        assert_eq!(
            reply.into_body(),
            json!({ "error": false, "errors": [] }).as_object().unwrap().clone()
        );

        let body = last_request_body(&mock_server).await;
        assert_eq!(
            body,
            json!({
                "method": "BITCOIN",
                "extra_commission_percent": 2.5,
                "enabled": false,
                "auth_login": "login",
                "auth_secret": "secret"
            })
        );
    }

    #[tokio::test]
    async fn test_edit_surfaces_remote_errors() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/method/edit/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": true,
                "errors": ["Method not found"]
            })))
            .mount(&mock_server)
            .await;

        let err = mock_client(&mock_server)
            .payment()
            .edit("NOPE", dec!(0), true)
            .await
            .unwrap_err();
        assert!(matches!(err, CrystalPayError::Remote { context: "method/edit", .. }));
        assert_eq!(err.remote_errors().unwrap(), &["Method not found".to_string()]);
    }

    #[tokio::test]
    async fn test_methods() {
        let mock_server = MockServer::start().await;
        respond_ok(
            &mock_server,
            "method/list",
            json!({ "methods": { "CRYSTALPAY": {
                "name": "CrystalPAY P2P",
                "enabled": true,
                "extra_commission_percent": 0,
                "minimal_status_level": 0,
                "currency": "RUB",
                "commission_percent": 0,
                "commission": 0
            } } }),
        )
        .await;

        let methods = mock_client(&mock_server).payment().methods().await.unwrap();
        assert_eq!(methods.enabled().collect::<Vec<_>>(), vec!["CRYSTALPAY"]);
    }
}
