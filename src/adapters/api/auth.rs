//! Futures Web API Authentication — MD5 Request Signing
//!
//! Signs private futures requests with the scheme the web front-end uses:
//!
//! ```text
//! salt      = md5_hex(key + timestamp)[7..]
//! signature = md5_hex(timestamp + canonical_body + salt)
//! ```
//!
//! The digest choice and the offset-7 slice are fixed by the exchange.
//! The server rejects any deviation, so neither is configurable.

use std::sync::Arc;

use anyhow::{Context, Result};
use md5::{Digest, Md5};
use serde::Serialize;

use super::canonical::to_canonical_json;
use crate::ports::clock::{Clock, SystemClock};

/// Number of leading hex characters dropped from the key digest.
const SALT_OFFSET: usize = 7;

/// Timestamp + signature pair sent as `x-mxc-nonce` / `x-mxc-sign`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureResult {
    /// Unix epoch milliseconds, base-10.
    pub timestamp: String,
    /// 32-char lowercase hex MD5.
    pub signature: String,
}

/// A serialized body together with its signature.
///
/// `payload` is the exact string that was hashed; it must be sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedBody {
    /// Canonical JSON body.
    pub payload: String,
    /// Signature over `payload`.
    pub signature: SignatureResult,
}

/// Request signer bound to a clock.
///
/// Holds no credentials: the key is passed per call.
#[derive(Clone)]
pub struct MexcSigner {
    clock: Arc<dyn Clock>,
}

impl MexcSigner {
    /// Signer reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Signer reading the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Serialize `body` canonically and sign it.
    ///
    /// # Errors
    /// Returns error only if `body` has no JSON representation.
    pub fn sign<T>(&self, key: &str, body: &T) -> Result<SignedBody>
    where
        T: Serialize + ?Sized,
    {
        let payload = to_canonical_json(body).context("Failed to serialize request body")?;
        let signature = self.sign_payload(key, &payload);
        Ok(SignedBody { payload, signature })
    }

    /// Sign an already-serialized body at the current clock reading.
    pub fn sign_payload(&self, key: &str, payload: &str) -> SignatureResult {
        let timestamp = self.clock.now_millis().to_string();
        sign_at(key, payload, &timestamp)
    }
}

impl Default for MexcSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MexcSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MexcSigner").finish_non_exhaustive()
    }
}

/// Sign `body` with the system clock.
///
/// # Errors
/// Returns error only if `body` has no JSON representation.
pub fn sign<T>(key: &str, body: &T) -> Result<SignatureResult>
where
    T: Serialize + ?Sized,
{
    MexcSigner::new().sign(key, body).map(|signed| signed.signature)
}

/// Pure signing core: fixed key, payload and timestamp.
pub fn sign_at(key: &str, payload: &str, timestamp: &str) -> SignatureResult {
    let salt = salt(key, timestamp);

    let mut hasher = Md5::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(payload.as_bytes());
    hasher.update(salt.as_bytes());

    SignatureResult {
        timestamp: timestamp.to_string(),
        signature: hex::encode(hasher.finalize()),
    }
}

/// Key-derived salt: hex MD5 of `key + timestamp` minus its first 7 chars.
pub(crate) fn salt(key: &str, timestamp: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(key.as_bytes());
    hasher.update(timestamp.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.split_off(SALT_OFFSET)
}
