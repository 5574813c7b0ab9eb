use thiserror::Error;

/// Errors produced while decrypting WeChat user data
///
/// Every variant describes malformed input or a failed integrity check, so
/// none of them is worth retrying with the same arguments.
#[derive(Debug, Error)]
pub enum DecryptError {
    #[error("Invalid base64 in {field}: {source}")]
    Encoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Invalid key length: expected 16, got {len}")]
    InvalidKey { len: usize },

    #[error("Invalid IV length: expected 16, got {len}")]
    InvalidIv { len: usize },

    #[error("Invalid ciphertext length: {len} is not a positive multiple of 16")]
    InvalidCiphertextLength { len: usize },

    #[error("Invalid PKCS7 padding")]
    InvalidPadding,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Watermark appid mismatch: expected {expected}, got {actual}")]
    AppIdMismatch { expected: String, actual: String },

    #[error("Signature verification failed")]
    SignatureValidation,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DecryptError {
    /// Whether the input was well-formed but failed an integrity check
    ///
    /// Wrong keys and tampered ciphertext both surface as padding failures,
    /// so callers usually treat this whole class as untrusted input.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            DecryptError::InvalidPadding
                | DecryptError::SignatureValidation
                | DecryptError::AppIdMismatch { .. }
        )
    }
}

impl From<serde_json::Error> for DecryptError {
    fn from(err: serde_json::Error) -> Self {
        DecryptError::MalformedPayload(err.to_string())
    }
}
