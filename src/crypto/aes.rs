//! AES-128-CBC primitives for WeChat encrypted user data

use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes128;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use cbc::{Decryptor, Encryptor};
use zeroize::Zeroizing;

use super::pkcs7;
use crate::error::DecryptError;

type Aes128CbcDecryptor = Decryptor<Aes128>;
type Aes128CbcEncryptor = Encryptor<Aes128>;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const KEY_SIZE: usize = 16;

/// Raw buffers decoded from the base64 inputs of a decrypt call
pub struct DecodedInputs {
    pub key: Zeroizing<Vec<u8>>,
    pub ciphertext: Zeroizing<Vec<u8>>,
    pub iv: Vec<u8>,
}

fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>, DecryptError> {
    BASE64
        .decode(value)
        .map_err(|source| DecryptError::Encoding { field, source })
}

/// Decode the three base64 inputs into raw byte buffers
///
/// Only the encoding is checked here; lengths are validated by
/// [`decrypt_blocks`].
pub fn decode_inputs(
    session_key: &str,
    encrypted_data: &str,
    iv: &str,
) -> Result<DecodedInputs, DecryptError> {
    let key = Zeroizing::new(decode_field("session_key", session_key)?);
    let ciphertext = Zeroizing::new(decode_field("encrypted_data", encrypted_data)?);
    let iv = decode_field("iv", iv)?;

    Ok(DecodedInputs {
        key,
        ciphertext,
        iv,
    })
}

fn check_key_and_iv(key: &[u8], iv: &[u8]) -> Result<(), DecryptError> {
    // AES-192/256 session keys do not exist in WeChat; reject them outright.
    if key.len() != KEY_SIZE {
        return Err(DecryptError::InvalidKey { len: key.len() });
    }
    if iv.len() != BLOCK_SIZE {
        return Err(DecryptError::InvalidIv { len: iv.len() });
    }
    Ok(())
}

/// Decrypt `buffer` in place with AES-128-CBC
///
/// Padding is left untouched; strip it with [`pkcs7::unpad`].
pub fn decrypt_blocks(key: &[u8], iv: &[u8], buffer: &mut [u8]) -> Result<(), DecryptError> {
    check_key_and_iv(key, iv)?;

    let len = buffer.len();
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(DecryptError::InvalidCiphertextLength { len });
    }

    let decryptor = Aes128CbcDecryptor::new_from_slices(key, iv)
        .map_err(|_| DecryptError::InvalidKey { len: key.len() })?;
    decryptor
        .decrypt_padded_mut::<NoPadding>(buffer)
        .map_err(|_| DecryptError::InvalidCiphertextLength { len })?;

    Ok(())
}

/// Encrypt `plaintext` the way a Mini Program client does
///
/// Applies PKCS7 padding, encrypts with AES-128-CBC and returns the base64
/// text that would arrive as `encryptedData`. Useful for fixtures and mock
/// servers.
pub fn encrypt_payload(
    session_key: &str,
    plaintext: &[u8],
    iv: &str,
) -> Result<String, DecryptError> {
    let key = Zeroizing::new(decode_field("session_key", session_key)?);
    let iv = decode_field("iv", iv)?;
    check_key_and_iv(&key, &iv)?;

    let mut buffer = Zeroizing::new(pkcs7::pad(plaintext, BLOCK_SIZE));
    let len = buffer.len();

    let encryptor = Aes128CbcEncryptor::new_from_slices(&key, &iv)
        .map_err(|_| DecryptError::InvalidKey { len: key.len() })?;
    let encrypted = encryptor
        .encrypt_padded_mut::<NoPadding>(&mut buffer, len)
        .map_err(|_| DecryptError::InvalidCiphertextLength { len })?;

    Ok(BASE64.encode(encrypted))
}
