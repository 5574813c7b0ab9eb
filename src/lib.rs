//! WeChat Mini Program user data decryption for Rust
//!
//! Mini Program clients receive sensitive data (phone number, share group,
//! full profile) as `encryptedData` + `iv`, encrypted with AES-128-CBC under
//! the session key issued at login. This crate turns those base64 strings
//! back into typed structures. It performs no network I/O: the session key
//! and the encrypted strings are supplied by the caller.
//!
//! ## Supported payloads
//!
//! | Client API | Rust type | Checks |
//! |------------|-----------|--------|
//! | `getPhoneNumber` | [`types::Mobile`] | padding, shape, optional watermark |
//! | `getShareInfo` | [`types::ShareInfo`] | padding, shape |
//! | `getUserInfo` | [`types::UserInfo`] | signature, padding, shape, watermark |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wechat_mp_decrypt::{DataDecryptor, types::{AppId, SessionKey}};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let decryptor = DataDecryptor::builder()
//!         .appid(AppId::new("wx1234567890abcdef")?)
//!         .build()?;
//!
//!     let session_key = SessionKey::new("session_key_from_login")?;
//!     let mobile = decryptor.decrypt_mobile(&session_key, "encrypted_data", "iv")?;
//!     println!("Phone: {}", mobile.phone_number);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Decryptor configured with the Mini Program AppID
//! - [`crypto`] - Decryption pipeline and its primitives
//! - [`error`] - Error types
//! - [`types`] - AppID, session key, watermark and payload shapes
//!
//! ## Error Handling
//!
//! Every operation returns [`DecryptError`]. None of the variants is
//! transient:
//!
//! ```rust,ignore
//! use wechat_mp_decrypt::DecryptError;
//!
//! match result {
//!     Ok(info) => { /* trusted data */ }
//!     Err(e) if e.is_integrity_failure() => {
//!         eprintln!("untrusted input: {}", e);
//!     }
//!     Err(e) => {
//!         eprintln!("malformed input: {}", e);
//!     }
//! }
//! ```

pub mod client;
pub mod crypto;
pub mod error;
pub mod types;

pub use client::{DataDecryptor, DataDecryptorBuilder};
pub use error::DecryptError;
pub use types::{DecryptedPayload, PayloadKind};
