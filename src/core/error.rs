//! Error types for cipher operations.
//!
//! Structural validation errors (key length, IV length, option names, key
//! files) carry the offending value so callers can report them precisely.
//! Errors raised on the cryptographic path are intentionally vague so they
//! cannot be used as a decryption oracle.

use core::convert::Infallible;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during encoding, padding, key handling or cipher
/// operations.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Symmetric keys must be 16, 24 or 32 bytes.
    #[error("Key length must be 16, 24, or 32 bytes; got {0}")]
    InvalidKeyLength(usize),

    /// An explicit IV must be exactly 16 bytes.
    #[error("IV length must be 16 bytes; got {0}")]
    InvalidIvLength(usize),

    /// The padding name or mode is unknown, or not legal for the
    /// requested direction.
    #[error("Unsupported padding: {0}")]
    UnsupportedPadding(String),

    /// The encoding name is unknown.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The signature algorithm is unknown or not supported.
    #[error("Unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A `.pem` key path was given but the file does not exist.
    #[error("Key file not found: {}", .0.display())]
    KeyFileNotFound(PathBuf),

    /// The key file exists but could not be read.
    #[error("Key file unreadable: {0}")]
    KeyFileUnreadable(#[source] std::io::Error),

    /// The key text could not be parsed as an RSA key.
    #[error("Invalid key material")]
    InvalidKeyMaterial,

    /// Encoded input is not valid hex or base64.
    #[error("Malformed encoded input")]
    MalformedEncodedInput,

    /// The cryptographic provider rejected the operation.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    ProviderFailure,

    /// The trailing padding run is inconsistent.
    /// Intentionally vague for security.
    #[error("Invalid padding")]
    PaddingValidationFailed,

    /// Decryption failed (wrong key, corrupted ciphertext, bad padding).
    /// Intentionally vague for security.
    #[error("Decryption failed")]
    DecryptionFailed,
}

impl CipherError {
    /// Returns `true` for errors raised by input validation, before any
    /// cryptographic work was attempted.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyLength(_)
                | Self::InvalidIvLength(_)
                | Self::UnsupportedPadding(_)
                | Self::UnsupportedEncoding(_)
                | Self::UnsupportedAlgorithm(_)
                | Self::KeyFileNotFound(_)
                | Self::KeyFileUnreadable(_)
        )
    }
}

impl From<Infallible> for CipherError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type alias for cipher operations.
pub type CipherResult<T> = Result<T, CipherError>;
