use crate::error::DecryptError;
use crate::types::AppId;

use super::DataDecryptor;

#[must_use]
#[derive(Debug, Default)]
pub struct DataDecryptorBuilder {
    appid: Option<AppId>,
    verify_mobile_watermark: Option<bool>,
}

impl DataDecryptorBuilder {
    pub fn appid(mut self, appid: AppId) -> Self {
        self.appid = Some(appid);
        self
    }

    /// Also bind decrypted phone numbers to the configured AppID
    ///
    /// Off by default; `getUserInfo` payloads are always checked.
    pub fn verify_mobile_watermark(mut self, enabled: bool) -> Self {
        self.verify_mobile_watermark = Some(enabled);
        self
    }

    pub fn build(self) -> Result<DataDecryptor, DecryptError> {
        let appid = self
            .appid
            .ok_or_else(|| DecryptError::Config("appid is required".to_string()))?;
        let verify_mobile_watermark = self.verify_mobile_watermark.unwrap_or(false);

        Ok(DataDecryptor::new(appid, verify_mobile_watermark))
    }
}
