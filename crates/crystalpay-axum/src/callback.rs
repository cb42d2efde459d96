//! Handlers invoked for completed payments.

use async_trait::async_trait;
use crystalpay_types::webhook::PaymentEvent;
use std::future::Future;
use std::sync::Arc;

pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

pub type CallbackResult = Result<(), CallbackError>;

/// Something to run when CrystalPay reports a completed payment.
///
/// Implemented for async closures taking the shared event:
///
/// ```rust
/// use crystalpay_axum::{CallbackResult, WebhookDispatcher};
/// use crystalpay_types::webhook::PaymentEvent;
/// use std::sync::Arc;
///
/// let dispatcher = WebhookDispatcher::new();
/// dispatcher.register(|event: Arc<PaymentEvent>| async move {
///     println!("invoice {} paid {} {}", event.id, event.amount, event.currency);
///     CallbackResult::Ok(())
/// });
/// ```
#[async_trait]
pub trait PaymentCallback: Send + Sync {
    async fn on_payment(&self, event: Arc<PaymentEvent>) -> CallbackResult;
}

#[async_trait]
impl<F, Fut> PaymentCallback for F
where
    F: Fn(Arc<PaymentEvent>) -> Fut + Send + Sync,
    Fut: Future<Output = CallbackResult> + Send + 'static,
{
    async fn on_payment(&self, event: Arc<PaymentEvent>) -> CallbackResult {
        (self)(event).await
    }
}
