//! Configured decryptor
//!
//! This module contains the DataDecryptor and its builder.

mod data_decryptor;
pub use data_decryptor::DataDecryptor;

mod builder;
pub use builder::DataDecryptorBuilder;
