use async_trait::async_trait;
use crystalpay::CrystalPay;
use crystalpay_axum::{CallbackResult, PaymentCallback};
use crystalpay_types::webhook::PaymentEvent;
use std::sync::Arc;

/// Confirms each paid notification against `invoice/info`.
///
/// The notification body is only trusted once the API reports the same
/// invoice as paid.
pub struct ConfirmPayment {
    client: CrystalPay,
}

impl ConfirmPayment {
    pub fn new(client: CrystalPay) -> Self {
        Self { client }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invoice {id} is {state} according to the API")]
struct NotPaid {
    id: String,
    state: String,
}

#[async_trait]
impl PaymentCallback for ConfirmPayment {
    async fn on_payment(&self, event: Arc<PaymentEvent>) -> CallbackResult {
        tracing::info!(
            id = %event.id,
            amount = %event.amount,
            currency = %event.currency,
            method = %event.method,
            extra = %event.extra,
            "Payment received"
        );

        let invoice = self.client.invoice().get(&event.id).await?;
        if !invoice.is_payed() {
            return Err(NotPaid {
                id: invoice.id,
                state: invoice.state,
            }
            .into());
        }

        tracing::info!(id = %invoice.id, "Payment confirmed");
        Ok(())
    }
}
