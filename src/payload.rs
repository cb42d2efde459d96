//! Request bodies.
//!
//! A [`RequestPayload`] is built from scratch for every call and owned by it.
//! Operation groups add their declared fields; the executor adds the
//! credentials when it sends the request.

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use std::sync::Arc;

pub const AUTH_LOGIN_FIELD: &str = "auth_login";
pub const AUTH_SECRET_FIELD: &str = "auth_secret";

/// Cash register login and secret.
///
/// Cloning is cheap; the strings are shared. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: Arc<str>,
    secret: Arc<str>,
}

impl Credentials {
    pub fn new(login: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            login: Arc::from(login.into()),
            secret: Arc::from(secret.into()),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Fields of one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestPayload(Map<String, Value>);

impl RequestPayload {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Adds a field. `None` is sent as JSON `null`.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// Adds a monetary field as a JSON number.
    pub fn with_amount(self, field: &str, amount: Decimal) -> Self {
        self.with(field, amount_value(amount))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the payload and returns the request body stamped with `credentials`.
    ///
    /// Credential fields always win over same-named operation fields.
    pub fn authenticated(self, credentials: &Credentials) -> Value {
        let mut body = self.0;
        body.insert(AUTH_LOGIN_FIELD.to_string(), Value::from(credentials.login()));
        body.insert(AUTH_SECRET_FIELD.to_string(), Value::from(credentials.secret()));
        Value::Object(body)
    }
}

/// Decimal as a JSON number, without trailing zeros.
///
/// Numbers are sent only when they print back to the same digits. Anything a
/// JSON number would round, e.g. more than 15 significant digits, is sent as a
/// string so the value matches what payoff signatures were computed over.
fn amount_value(amount: Decimal) -> Value {
    let text = amount.normalize().to_string();
    match Number::from_str(&text) {
        Ok(number) if number.to_string() == text => Value::Number(number),
        _ => Value::String(text),
    }
}
