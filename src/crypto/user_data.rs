//! Decryption pipeline for WeChat encrypted user data
//!
//! Every operation runs `decode → decrypt → unpad → parse`; the full
//! `getUserInfo` path checks the `rawData` signature before anything else
//! and the watermark after parsing. The first failing stage ends the call.

use log::debug;
use zeroize::Zeroizing;

use super::aes::{decode_inputs, decrypt_blocks, DecodedInputs};
use super::pkcs7;
use super::signature::verify_signature;
use crate::error::DecryptError;
use crate::types::{DecryptedPayload, Mobile, PayloadKind, ShareInfo, UserInfo, Watermark};

/// Decode, decrypt and unpad, returning the raw plaintext bytes
///
/// # Arguments
/// * `session_key` - Base64 encoded session key from login
/// * `encrypted_data` - Base64 encoded encrypted data from client
/// * `iv` - Base64 encoded IV from client
pub fn decrypt_bytes(
    session_key: &str,
    encrypted_data: &str,
    iv: &str,
) -> Result<Zeroizing<Vec<u8>>, DecryptError> {
    let DecodedInputs {
        key,
        mut ciphertext,
        iv,
    } = decode_inputs(session_key, encrypted_data, iv)?;

    decrypt_blocks(&key, &iv, &mut ciphertext)?;
    let plaintext_len = pkcs7::unpad(&ciphertext)?.len();
    ciphertext.truncate(plaintext_len);

    debug!("[WechatDecrypt] decrypted {} bytes of user data", plaintext_len);
    Ok(ciphertext)
}

/// Decrypt and parse user data as the shape selected by `kind`
pub fn decrypt_payload(
    kind: PayloadKind,
    session_key: &str,
    encrypted_data: &str,
    iv: &str,
) -> Result<DecryptedPayload, DecryptError> {
    let plaintext = decrypt_bytes(session_key, encrypted_data, iv)?;
    let payload = DecryptedPayload::parse(kind, &plaintext)?;
    debug!("[WechatDecrypt] parsed {} payload", kind);
    Ok(payload)
}

/// Decrypt the result of `getPhoneNumber`
pub fn decrypt_mobile(
    session_key: &str,
    encrypted_data: &str,
    iv: &str,
) -> Result<Mobile, DecryptError> {
    decrypt_payload(PayloadKind::Mobile, session_key, encrypted_data, iv)?
        .into_mobile()
        .ok_or_else(|| unexpected_shape(PayloadKind::Mobile))
}

/// Decrypt the result of `getShareInfo`
pub fn decrypt_share_info(
    session_key: &str,
    encrypted_data: &str,
    iv: &str,
) -> Result<ShareInfo, DecryptError> {
    decrypt_payload(PayloadKind::ShareInfo, session_key, encrypted_data, iv)?
        .into_share_info()
        .ok_or_else(|| unexpected_shape(PayloadKind::ShareInfo))
}

/// Decrypt the result of `getUserInfo`
///
/// `signature` must equal `sha1(raw_data + session_key)` in lowercase hex,
/// otherwise the call fails before any decryption happens. The decrypted
/// watermark must name `expected_appid`.
///
/// # Arguments
/// * `session_key` - Base64 encoded session key from login
/// * `raw_data` - Cleartext user data string the signature covers
/// * `encrypted_data` - Base64 encoded encrypted data from client
/// * `signature` - Lowercase hex signature from client
/// * `iv` - Base64 encoded IV from client
/// * `expected_appid` - AppID the data must have been encrypted for
pub fn decrypt_user_info(
    session_key: &str,
    raw_data: &str,
    encrypted_data: &str,
    signature: &str,
    iv: &str,
    expected_appid: &str,
) -> Result<UserInfo, DecryptError> {
    verify_signature(signature, raw_data, session_key)?;
    debug!("[WechatDecrypt] rawData signature verified");
    decrypt_watermarked_user_info(session_key, encrypted_data, iv, expected_appid)
}

/// Decrypt the result of `getUserInfo` without a `rawData` signature
///
/// Only the watermark binds the result to `expected_appid`.
pub fn decrypt_watermarked_user_info(
    session_key: &str,
    encrypted_data: &str,
    iv: &str,
    expected_appid: &str,
) -> Result<UserInfo, DecryptError> {
    let info = decrypt_payload(PayloadKind::UserInfo, session_key, encrypted_data, iv)?
        .into_user_info()
        .ok_or_else(|| unexpected_shape(PayloadKind::UserInfo))?;

    verify_watermark(&info.watermark, expected_appid)?;
    Ok(info)
}

/// Verify watermark appid matches expected appid
pub fn verify_watermark(watermark: &Watermark, expected_appid: &str) -> Result<(), DecryptError> {
    if watermark.appid != expected_appid {
        return Err(DecryptError::AppIdMismatch {
            expected: expected_appid.to_string(),
            actual: watermark.appid.clone(),
        });
    }
    Ok(())
}

fn unexpected_shape(kind: PayloadKind) -> DecryptError {
    DecryptError::MalformedPayload(format!("payload is not a {}", kind))
}
