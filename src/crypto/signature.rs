//! Signature check for `getUserInfo` results
//!
//! WeChat signs the cleartext `rawData` with `sha1(rawData + session_key)`
//! and hands the lowercase hex digest to the client as `signature`.

use sha1::{Digest, Sha1};

use crate::error::DecryptError;

/// Compute the signature WeChat attaches to `raw_data`
pub fn compute_signature(raw_data: &str, session_key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(raw_data.as_bytes());
    hasher.update(session_key.as_bytes());
    base16ct::lower::encode_string(&hasher.finalize())
}

/// Check `signature` against the one computed from `raw_data` and `session_key`
pub fn verify_signature(
    signature: &str,
    raw_data: &str,
    session_key: &str,
) -> Result<(), DecryptError> {
    let expected = compute_signature(raw_data, session_key);
    if constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
        Ok(())
    } else {
        Err(DecryptError::SignatureValidation)
    }
}

// Visits every byte regardless of where the first difference is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
