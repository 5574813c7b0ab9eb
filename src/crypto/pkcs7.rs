//! PKCS7 padding

use crate::error::DecryptError;

/// Strip PKCS7 padding from decrypted bytes
///
/// The final byte `p` gives the padding length. The buffer is rejected when
/// `p` is zero, larger than the buffer, or when any of the last `p` bytes
/// differs from `p`.
pub fn unpad(data: &[u8]) -> Result<&[u8], DecryptError> {
    let Some(&last) = data.last() else {
        return Err(DecryptError::InvalidPadding);
    };

    let pad_len = last as usize;
    if pad_len == 0 || pad_len > data.len() {
        return Err(DecryptError::InvalidPadding);
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(DecryptError::InvalidPadding);
    }

    Ok(body)
}

/// Append PKCS7 padding up to the next multiple of `block_size`
///
/// A full block of padding is added when `data` is already aligned.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size > 0 && block_size <= u8::MAX as usize);

    let pad_len = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}
