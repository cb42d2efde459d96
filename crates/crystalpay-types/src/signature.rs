//! SHA-1 signatures required by the CrystalPay API.
//!
//! CrystalPay authenticates payoff requests and its own callback notifications
//! with a lowercase hex SHA-1 digest over a `:`-joined string that ends with
//! the cash register's salt. SHA-1 is mandated by the service; the digest must
//! match `sha1(input).hexdigest()` byte for byte.
//!
//! ```
//! use crystalpay_types::signature::signature;
//!
//! assert_eq!(signature("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

use sha1::{Digest, Sha1};
use std::fmt::Display;

/// Length of a hex-encoded SHA-1 digest.
pub const SIGNATURE_LEN: usize = 40;

/// Returns the lowercase hex SHA-1 digest of `input`.
pub fn signature(input: &str) -> String {
    let digest = Sha1::digest(input.as_bytes());
    hex::encode(digest)
}

/// Signature for `payoff/create`: `sha1("{amount}:{method}:{wallet}:{salt}")`.
pub fn payoff_create_signature(
    amount: impl Display,
    method: &str,
    wallet: &str,
    salt: &str,
) -> String {
    signature(&format!("{amount}:{method}:{wallet}:{salt}"))
}

/// Signature for `payoff/submit` and `payoff/cancel`: `sha1("{id}:{salt}")`.
pub fn payoff_action_signature(id: &str, salt: &str) -> String {
    signature(&format!("{id}:{salt}"))
}

/// Signature CrystalPay puts on callback notifications: `sha1("{id}:{salt}")`.
pub fn callback_signature(id: &str, salt: &str) -> String {
    signature(&format!("{id}:{salt}"))
}
