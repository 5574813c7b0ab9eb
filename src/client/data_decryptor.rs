//! Configured entry point for decrypting Mini Program user data

use crate::crypto;
use crate::error::DecryptError;
use crate::types::{
    AppId, DecryptedPayload, Mobile, PayloadKind, SessionKey, ShareInfo, UserInfo, Watermark,
};

use super::builder::DataDecryptorBuilder;

/// Decryptor bound to one Mini Program AppID
///
/// Holds only immutable configuration, so one instance can be cloned or
/// shared across threads and used for any number of sessions.
///
/// # Example
///
/// ```rust,ignore
/// use wechat_mp_decrypt::DataDecryptor;
/// use wechat_mp_decrypt::types::{AppId, SessionKey};
///
/// let decryptor = DataDecryptor::builder()
///     .appid(AppId::new("wx1234567890abcdef")?)
///     .build()?;
///
/// let session_key = SessionKey::new(login.session_key)?;
/// let info = decryptor.decrypt_user_info(
///     &session_key,
///     &raw_data,
///     &encrypted_data,
///     &signature,
///     &iv,
/// )?;
/// println!("OpenID: {}", info.open_id);
/// ```
#[derive(Debug, Clone)]
pub struct DataDecryptor {
    appid: AppId,
    verify_mobile_watermark: bool,
}

impl DataDecryptor {
    pub(crate) fn new(appid: AppId, verify_mobile_watermark: bool) -> Self {
        Self {
            appid,
            verify_mobile_watermark,
        }
    }

    pub fn builder() -> DataDecryptorBuilder {
        DataDecryptorBuilder::default()
    }

    pub fn appid(&self) -> &str {
        self.appid.as_str()
    }

    pub fn verifies_mobile_watermark(&self) -> bool {
        self.verify_mobile_watermark
    }

    /// Decrypt and parse user data as `kind`
    ///
    /// Watermarks are checked the same way as by the shape-specific methods.
    pub fn decrypt(
        &self,
        kind: PayloadKind,
        session_key: &SessionKey,
        encrypted_data: &str,
        iv: &str,
    ) -> Result<DecryptedPayload, DecryptError> {
        let payload = crypto::decrypt_payload(kind, session_key.as_str(), encrypted_data, iv)?;
        match &payload {
            DecryptedPayload::Mobile(mobile) if self.verify_mobile_watermark => {
                self.verify_watermark(mobile.watermark())?
            }
            DecryptedPayload::UserInfo(info) => self.verify_watermark(info.watermark())?,
            _ => {}
        }
        Ok(payload)
    }

    pub fn decrypt_mobile(
        &self,
        session_key: &SessionKey,
        encrypted_data: &str,
        iv: &str,
    ) -> Result<Mobile, DecryptError> {
        let mobile = crypto::decrypt_mobile(session_key.as_str(), encrypted_data, iv)?;
        if self.verify_mobile_watermark {
            self.verify_watermark(mobile.watermark())?;
        }
        Ok(mobile)
    }

    pub fn decrypt_share_info(
        &self,
        session_key: &SessionKey,
        encrypted_data: &str,
        iv: &str,
    ) -> Result<ShareInfo, DecryptError> {
        crypto::decrypt_share_info(session_key.as_str(), encrypted_data, iv)
    }

    pub fn decrypt_user_info(
        &self,
        session_key: &SessionKey,
        raw_data: &str,
        encrypted_data: &str,
        signature: &str,
        iv: &str,
    ) -> Result<UserInfo, DecryptError> {
        crypto::decrypt_user_info(
            session_key.as_str(),
            raw_data,
            encrypted_data,
            signature,
            iv,
            self.appid.as_str(),
        )
    }

    pub fn decrypt_watermarked_user_info(
        &self,
        session_key: &SessionKey,
        encrypted_data: &str,
        iv: &str,
    ) -> Result<UserInfo, DecryptError> {
        crypto::decrypt_watermarked_user_info(
            session_key.as_str(),
            encrypted_data,
            iv,
            self.appid.as_str(),
        )
    }

    pub fn verify_watermark(&self, watermark: &Watermark) -> Result<(), DecryptError> {
        crypto::verify_watermark(watermark, self.appid.as_str())
    }
}
