//! The [`CrystalPay`] client and its operation groups.
//!
//! ```rust,no_run
//! use crystalpay::CrystalPay;
//! use crystalpay::api::NewInvoice;
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> Result<(), crystalpay::CrystalPayError> {
//! let client = CrystalPay::new("my-cash-register", "secret");
//! let invoice = client
//!     .invoice()
//!     .create(&NewInvoice::new(Decimal::from(100), 3600).description("Order #42"))
//!     .await?;
//! println!("pay at {}", invoice.url);
//! # Ok(())
//! # }
//! ```

use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

use crate::api::{Checkout, History, Invoice, Payment, Payoff, Ticker};
use crate::error::CrystalPayError;
use crate::payload::Credentials;
use crate::transport::RequestExecutor;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.crystalpay.io/v2/";

static DEFAULT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("valid default base URL"));

/// A CrystalPay API client bound to one cash register.
///
/// Credentials are fixed at construction. The `with_*` methods return an
/// adjusted copy and leave `self` untouched. Operation groups are borrowed
/// views over the same executor and cost nothing to create.
#[derive(Clone, Debug)]
pub struct CrystalPay {
    executor: RequestExecutor,
}

impl CrystalPay {
    pub fn new(login: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::new(login, secret))
    }

    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            executor: RequestExecutor::new(DEFAULT_URL.clone(), credentials),
        }
    }

    /// Points the client at another API root, e.g. a staging proxy.
    ///
    /// A trailing slash is added if missing so that endpoint paths are joined below it.
    pub fn with_base_url(&self, base_url: &str) -> Result<Self, CrystalPayError> {
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let url = Url::parse(&normalized).map_err(|source| CrystalPayError::UrlParse {
            context: "Failed to parse base url",
            source,
        })?;
        Ok(Self {
            executor: self.executor.with_base_url(url),
        })
    }

    /// Sets a timeout for every future request.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            executor: self.executor.with_timeout(timeout),
        }
    }

    /// Uses a preconfigured `reqwest` client (proxies, TLS roots, user agent).
    pub fn with_http_client(&self, client: reqwest::Client) -> Self {
        Self {
            executor: self.executor.with_http_client(client),
        }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub fn credentials(&self) -> &Credentials {
        self.executor.credentials()
    }

    /// SHA-1 hex digest of `input`, as required for payoff signatures.
    pub fn signature(input: &str) -> String {
        crystalpay_types::signature::signature(input)
    }

    pub fn checkout(&self) -> Checkout<'_> {
        Checkout::new(&self.executor)
    }

    pub fn payment(&self) -> Payment<'_> {
        Payment::new(&self.executor)
    }

    pub fn invoice(&self) -> Invoice<'_> {
        Invoice::new(&self.executor)
    }

    pub fn payoff(&self) -> Payoff<'_> {
        Payoff::new(&self.executor)
    }

    pub fn ticker(&self) -> Ticker<'_> {
        Ticker::new(&self.executor)
    }

    pub fn history(&self) -> History<'_> {
        History::new(&self.executor)
    }
}
