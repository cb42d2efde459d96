//! Errors surfaced by CrystalPay remote calls.
//!
//! Every variant carries a `context`: the endpoint path the failure happened on
//! (e.g. `"invoice/create"`), or the setup step for [`CrystalPayError::UrlParse`].
//! Nothing here is retried by the client.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CrystalPayError {
    /// The service answered `error: true`. `errors` is its message list, verbatim and in order.
    #[error("CrystalPay rejected {context}: {}", .errors.join("; "))]
    Remote {
        context: &'static str,
        errors: Vec<String>,
    },
    /// The reply is not a CrystalPay envelope: not JSON, or no boolean `error` field.
    #[error("Malformed response from {context} (HTTP {status}): {reason}")]
    MalformedResponse {
        context: &'static str,
        status: StatusCode,
        reason: String,
    },
    /// The reply is a successful envelope but does not have the operation's shape.
    #[error("Unexpected response shape from {context}: {source}")]
    Validation {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The configured request timeout elapsed.
    #[error("Request timed out: {context}: {source}")]
    Timeout {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error: {context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        context: &'static str,
        #[source]
        source: url::ParseError,
    },
}

impl CrystalPayError {
    /// Messages reported by the service, if this is a [`CrystalPayError::Remote`] error.
    pub fn remote_errors(&self) -> Option<&[String]> {
        match self {
            CrystalPayError::Remote { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Maps a `reqwest` failure, splitting out timeouts.
    pub(crate) fn from_reqwest(context: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            CrystalPayError::Timeout { context, source }
        } else {
            CrystalPayError::Transport { context, source }
        }
    }
}
