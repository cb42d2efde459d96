use crystalpay_types::proto::{TickerRates, Tickers};

use crate::api::call;
use crate::error::CrystalPayError;
use crate::payload::RequestPayload;
use crate::transport::{Endpoint, RequestExecutor};

/// Exchange rates.
#[derive(Clone, Copy, Debug)]
pub struct Ticker<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Ticker<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// `ticker/list`: quoted currency codes.
    pub async fn list(&self) -> Result<Tickers, CrystalPayError> {
        call(self.executor, Endpoint::TickerList, RequestPayload::new()).await
    }

    /// `ticker/get`: current rates.
    pub async fn get(&self) -> Result<TickerRates, CrystalPayError> {
        call(self.executor, Endpoint::TickerGet, RequestPayload::new()).await
    }
}
