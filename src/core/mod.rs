//! Core cipher types and operations.
//!
//! - [`error`] - Error type shared by every operation
//! - [`encoding`] - Text encodings for ciphertext and signatures
//! - [`padding`] - Block padding for the symmetric cipher
//! - [`key`] - Key validation, IV derivation and PEM key resolution
//! - [`types`] - Option types for the asymmetric cipher
//! - [`provider`] - The seam to the underlying cryptographic primitives
//! - [`operations`] - The [`Aes`](operations::Aes) and [`Rsa`](operations::Rsa) facades

pub mod encoding;
pub mod error;
pub mod key;
pub mod operations;
pub mod padding;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{CipherError, CipherResult};
