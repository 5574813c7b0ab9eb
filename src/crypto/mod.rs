//! Cryptography utilities for WeChat Mini Program data decryption
//!
//! Provides utilities for decrypting user data received from WeChat Mini Program.
//!
//! ## Security
//!
//! The session key used for decryption should be handled securely and never
//! exposed to the client-side code. Raw key bytes and decrypted plaintext are
//! held in zeroizing buffers and wiped when dropped.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wechat_mp_decrypt::crypto;
//!
//! let session_key = "session_key_from_login";
//! let encrypted_data = "encrypted_data_from_miniprogram";
//! let iv = "iv_from_miniprogram";
//!
//! let mobile = crypto::decrypt_mobile(session_key, encrypted_data, iv)?;
//! println!("{}", mobile.phone_number);
//! ```

pub mod aes;
pub mod pkcs7;
pub mod signature;
pub mod user_data;

pub use self::aes::encrypt_payload;
pub use self::signature::{compute_signature, verify_signature};
pub use self::user_data::{
    decrypt_bytes, decrypt_mobile, decrypt_payload, decrypt_share_info, decrypt_user_info,
    decrypt_watermarked_user_info, verify_watermark,
};
pub use crate::types::Watermark;
