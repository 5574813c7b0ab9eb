use serde::{Deserialize, Serialize};

/// Watermark from WeChat encrypted data
///
/// Every decrypted payload carries the AppID that requested the encryption
/// and the time it happened. Comparing the AppID against the configured one
/// binds the payload to this application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Watermark {
    /// Timestamp when data was encrypted
    pub timestamp: i64,
    /// AppID that encrypted the data
    pub appid: String,
}

impl Watermark {
    pub fn new(timestamp: i64, appid: impl Into<String>) -> Self {
        Self {
            timestamp,
            appid: appid.into(),
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn appid(&self) -> &str {
        &self.appid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watermark_parse() {
        let json = r#"{"appid":"wx4f4bc4dec97d474b","timestamp":1477314187}"#;
        let watermark: Watermark = serde_json::from_str(json).unwrap();
        assert_eq!(watermark.appid(), "wx4f4bc4dec97d474b");
        assert_eq!(watermark.timestamp(), 1477314187);
    }

    #[test]
    fn test_watermark_missing_appid() {
        let json = r#"{"timestamp":1477314187}"#;
        assert!(serde_json::from_str::<Watermark>(json).is_err());
    }
}
