//! The request executor: one authenticated JSON call to the CrystalPay API.
//!
//! [`RequestExecutor::execute`] turns an [`Endpoint`] and a per-call
//! [`RequestPayload`] into a single HTTP request to `<base-url>/<endpoint>/`,
//! then checks CrystalPay's response envelope:
//!
//! - a body that is not a JSON object, or lacks a boolean `error`, is
//!   [`CrystalPayError::MalformedResponse`];
//! - `error: true` is [`CrystalPayError::Remote`] with the `errors` list verbatim;
//! - anything else is returned as a [`RemoteResponse`] for the operation to validate.
//!
//! CrystalPay reports failures in the body, so the HTTP status is only kept
//! for error context. There are no retries and no caching.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use std::time::Duration;
use url::Url;

use crate::error::CrystalPayError;
use crate::payload::{Credentials, RequestPayload};

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

/// CrystalPay API operations, by endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    MeInfo,
    BalanceInfo,
    MethodList,
    MethodEdit,
    InvoiceCreate,
    InvoiceInfo,
    PayoffCreate,
    PayoffSubmit,
    PayoffCancel,
    PayoffInfo,
    TickerList,
    TickerGet,
    HistoryPayments,
    HistoryPayoffs,
    HistorySummary,
}

impl Endpoint {
    /// Path relative to the API base, without slashes, e.g. `"invoice/create"`.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::MeInfo => "me/info",
            Endpoint::BalanceInfo => "balance/info",
            Endpoint::MethodList => "method/list",
            Endpoint::MethodEdit => "method/edit",
            Endpoint::InvoiceCreate => "invoice/create",
            Endpoint::InvoiceInfo => "invoice/info",
            Endpoint::PayoffCreate => "payoff/create",
            Endpoint::PayoffSubmit => "payoff/submit",
            Endpoint::PayoffCancel => "payoff/cancel",
            Endpoint::PayoffInfo => "payoff/info",
            Endpoint::TickerList => "ticker/list",
            Endpoint::TickerGet => "ticker/get",
            Endpoint::HistoryPayments => "history/payments",
            Endpoint::HistoryPayoffs => "history/payoffs",
            Endpoint::HistorySummary => "history/summary",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A successful CrystalPay reply: `error` was `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    endpoint: Endpoint,
    errors: Vec<String>,
    body: Map<String, Value>,
}

impl RemoteResponse {
    /// Checks the CrystalPay envelope of a raw reply body.
    pub fn from_body(
        endpoint: Endpoint,
        status: StatusCode,
        bytes: &[u8],
    ) -> Result<Self, CrystalPayError> {
        let context = endpoint.path();
        let malformed = |reason: String| CrystalPayError::MalformedResponse {
            context,
            status,
            reason,
        };

        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| malformed(format!("body is not JSON: {e}")))?;
        let Value::Object(body) = value else {
            return Err(malformed("body is not a JSON object".to_string()));
        };
        let is_error = match body.get("error") {
            Some(Value::Bool(is_error)) => *is_error,
            Some(other) => return Err(malformed(format!("`error` is not a boolean: {other}"))),
            None => return Err(malformed("missing `error` field".to_string())),
        };
        let errors = match body.get("errors") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| malformed("`errors` contains a non-string".to_string()))?,
            None if !is_error => Vec::new(),
            Some(_) | None => {
                return Err(malformed("`errors` is missing or not a list".to_string()));
            }
        };

        if is_error {
            return Err(CrystalPayError::Remote { context, errors });
        }
        Ok(Self {
            endpoint,
            errors,
            body,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Messages attached to a successful reply. Normally empty.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The full parsed body, envelope fields included.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn into_body(self) -> Map<String, Value> {
        self.body
    }

    /// Validates the body into an operation's typed result.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, CrystalPayError> {
        let context = self.endpoint.path();
        serde_json::from_value(Value::Object(self.body))
            .map_err(|source| CrystalPayError::Validation { context, source })
    }
}

/// Sends authenticated requests to one CrystalPay API base URL.
///
/// The underlying `reqwest` connection pool is shared between clones. Each
/// call builds its body from its own payload plus the credentials.
#[derive(Clone, Debug)]
pub struct RequestExecutor {
    base_url: Url,
    client: Client,
    credentials: Credentials,
    timeout: Option<Duration>,
}

impl RequestExecutor {
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url,
            client: Client::new(),
            credentials,
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn with_base_url(&self, base_url: Url) -> Self {
        let mut this = self.clone();
        this.base_url = base_url;
        this
    }

    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut this = self.clone();
        this.timeout = Some(timeout);
        this
    }

    pub fn with_http_client(&self, client: Client) -> Self {
        let mut this = self.clone();
        this.client = client;
        this
    }

    /// Full URL of an endpoint, with the trailing slash CrystalPay expects.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, CrystalPayError> {
        self.base_url
            .join(&format!("{}/", endpoint.path()))
            .map_err(|source| CrystalPayError::UrlParse {
                context: endpoint.path(),
                source,
            })
    }

    /// Performs exactly one request and checks the response envelope.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "crystalpay.request",
            skip_all,
            fields(
                endpoint = %endpoint,
                timeout = ?self.timeout,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty,
            )
        )
    )]
    pub async fn execute(
        &self,
        endpoint: Endpoint,
        method: Method,
        payload: RequestPayload,
    ) -> Result<RemoteResponse, CrystalPayError> {
        let result = self.send(endpoint, method, payload).await;
        record_result_on_span(&result);
        result
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        method: Method,
        payload: RequestPayload,
    ) -> Result<RemoteResponse, CrystalPayError> {
        let context = endpoint.path();
        let url = self.endpoint_url(endpoint)?;
        let body = payload.authenticated(&self.credentials);

        let mut req = self.client.request(method, url).json(&body);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let http_response = req
            .send()
            .await
            .map_err(|e| CrystalPayError::from_reqwest(context, e))?;
        let status = http_response.status();
        let bytes = http_response
            .bytes()
            .await
            .map_err(|e| CrystalPayError::from_reqwest(context, e))?;

        RemoteResponse::from_body(endpoint, status, &bytes)
    }
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::WARN, error = %err, "CrystalPay request failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
