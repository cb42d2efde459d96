//! Configuration helpers shared by CrystalPay binaries.
//!
//! Secrets such as `auth_secret` or the callback salt should not live in a
//! checked-in config file. [`LiteralOrEnv`] lets a config value be written
//! either literally or as a reference to an environment variable:
//!
//! ```json
//! {
//!   "auth_login": "my-cash-register",
//!   "auth_secret": "$CRYSTALPAY_SECRET",
//!   "salt": "${CRYSTALPAY_SALT}"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::str::FromStr;

/// A config value resolved from a literal or from `$VAR` / `${VAR}` at deserialization time.
#[derive(Clone, PartialEq, Eq)]
pub struct LiteralOrEnv<T>(T);

impl<T> LiteralOrEnv<T> {
    pub fn from_literal(value: T) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Returns the variable name when `raw` is written as `$VAR` or `${VAR}`.
fn env_reference(raw: &str) -> Option<&str> {
    if let Some(braced) = raw.strip_prefix("${") {
        return braced.strip_suffix('}').filter(|name| !name.is_empty());
    }
    let name = raw.strip_prefix('$')?;
    let is_identifier = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_identifier.then_some(name)
}

impl<T> Deref for LiteralOrEnv<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Values are usually secrets, so only the wrapper is shown.
impl<T> Debug for LiteralOrEnv<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("LiteralOrEnv(<redacted>)")
    }
}

impl<'de, T> Deserialize<'de> for LiteralOrEnv<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let value = match env_reference(&raw) {
            Some(name) => std::env::var(name).map_err(|_| {
                serde::de::Error::custom(format!(
                    "environment variable '{name}' is not set (referenced as '{raw}')"
                ))
            })?,
            None => raw,
        };
        value
            .parse::<T>()
            .map(LiteralOrEnv)
            .map_err(|e| serde::de::Error::custom(format!("failed to parse value: {e}")))
    }
}

impl<T: Serialize> Serialize for LiteralOrEnv<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
