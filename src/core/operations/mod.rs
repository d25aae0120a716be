//! Cipher facades.
//!
//! - [`Aes`] - AES-CBC with explicit padding and encoding (`symmetric` feature)
//! - [`Rsa`] - RSA encryption and signatures over PEM keys (`asymmetric` feature)

#[cfg(feature = "symmetric")]
mod symmetric;

#[cfg(feature = "asymmetric")]
mod asymmetric;

#[cfg(feature = "symmetric")]
pub use symmetric::Aes;

#[cfg(feature = "asymmetric")]
pub use asymmetric::Rsa;

#[cfg(any(feature = "symmetric", feature = "asymmetric"))]
use crate::core::error::CipherError;

/// Merges every failure on the cryptographic path of a decryption into
/// [`CipherError::DecryptionFailed`].
#[cfg(any(feature = "symmetric", feature = "asymmetric"))]
pub(crate) fn collapse_decrypt_error(err: CipherError) -> CipherError {
    match err {
        CipherError::ProviderFailure | CipherError::PaddingValidationFailed => {
            CipherError::DecryptionFailed
        }
        other => other,
    }
}

#[cfg(all(test, any(feature = "symmetric", feature = "asymmetric")))]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_hides_crypto_path_errors() {
        assert!(matches!(
            collapse_decrypt_error(CipherError::ProviderFailure),
            CipherError::DecryptionFailed
        ));
        assert!(matches!(
            collapse_decrypt_error(CipherError::PaddingValidationFailed),
            CipherError::DecryptionFailed
        ));
    }

    #[test]
    fn test_collapse_keeps_other_errors() {
        assert!(matches!(
            collapse_decrypt_error(CipherError::MalformedEncodedInput),
            CipherError::MalformedEncodedInput
        ));
        assert!(matches!(
            collapse_decrypt_error(CipherError::InvalidKeyLength(7)),
            CipherError::InvalidKeyLength(7)
        ));
    }
}
