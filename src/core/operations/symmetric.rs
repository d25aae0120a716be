//! AES-CBC encryption with explicit block padding and text encoding.
//!
//! # Algorithm
//!
//! ```text
//! encrypt: check key length -> check IV -> derive IV if absent
//!          -> pad -> AES-CBC -> encode
//! decrypt: check key length -> check IV -> derive IV if absent
//!          -> decode -> AES-CBC -> unpad
//! ```
//!
//! The AES variant is selected by the key length (16, 24 or 32 bytes).
//! When no IV is supplied one is derived from the key, so the same key and
//! plaintext always produce the same ciphertext. Callers that need
//! semantic security must supply a fresh random IV per message.
//!
//! Every validation step runs before the provider is called.

use crate::core::encoding::Encoding;
use crate::core::error::{CipherError, CipherResult};
use crate::core::key::{derive_iv, validate_iv, validate_symmetric_key, IV_SIZE};
use crate::core::padding::BlockPadding;
use crate::core::provider::{BlockCipherProvider, CbcPadding, RustCrypto};

use super::collapse_decrypt_error;

/// Symmetric cipher over AES-CBC.
///
/// Stateless apart from its provider and provider-level padding, so one
/// value may be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use cryptkit::{Aes, BlockPadding, Encoding};
///
/// let aes = Aes::new();
/// let key = [7u8; 32];
///
/// let ct = aes.encrypt(b"hello world", &key, None, BlockPadding::Pkcs7, Encoding::Base64)?;
/// let pt = aes.decrypt(&ct, &key, None, BlockPadding::Pkcs7, Encoding::Base64)?;
/// assert_eq!(pt, b"hello world");
/// # Ok::<(), cryptkit::CipherError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Aes<P = RustCrypto> {
    provider: P,
    cbc_padding: CbcPadding,
}

impl Aes {
    /// Creates a cipher backed by the default provider.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_provider(RustCrypto)
    }
}

impl<P> Aes<P> {
    /// Creates a cipher backed by `provider`.
    #[must_use]
    pub const fn with_provider(provider: P) -> Self {
        Self {
            provider,
            cbc_padding: CbcPadding::Pkcs7,
        }
    }

    /// Sets the padding the provider applies underneath the explicit block
    /// padding.
    ///
    /// [`CbcPadding::Pkcs7`] (the default) produces ciphertexts that are
    /// byte-compatible with OpenSSL's `aes-*-cbc` in raw-data mode.
    /// [`CbcPadding::NoPadding`] produces one block less per message.
    #[must_use]
    pub fn cbc_padding(mut self, padding: CbcPadding) -> Self {
        self.cbc_padding = padding;
        self
    }

    /// Returns the provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: BlockCipherProvider> Aes<P> {
    /// Encrypts `plaintext` and encodes the ciphertext.
    ///
    /// # Arguments
    ///
    /// * `plaintext` - Bytes to encrypt (may be empty)
    /// * `key` - 16, 24 or 32 byte AES key
    /// * `iv` - Optional 16-byte IV; derived from the key when `None`
    /// * `padding` - Block padding, as a [`BlockPadding`] or a name
    /// * `encoding` - Text encoding of the result
    ///
    /// # Errors
    ///
    /// - `CipherError::UnsupportedPadding` if the padding name is unknown
    /// - `CipherError::InvalidKeyLength` if the key is not 16, 24 or 32 bytes
    /// - `CipherError::InvalidIvLength` if an IV is given with the wrong length
    /// - `CipherError::ProviderFailure` if the provider rejects the operation
    pub fn encrypt<B>(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        padding: B,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        B: TryInto<BlockPadding>,
        CipherError: From<B::Error>,
    {
        self.try_encrypt(plaintext, key, iv, padding, encoding)
            .map_err(|err| {
                tracing::debug!(operation = "aes_encrypt", error = ?err, "rejected");
                err
            })
    }

    fn try_encrypt<B>(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        padding: B,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        B: TryInto<BlockPadding>,
        CipherError: From<B::Error>,
    {
        let padding: BlockPadding = padding.try_into()?;
        let variant = validate_symmetric_key(key)?;
        let iv = resolve_iv(key, iv)?;

        let padded = padding.pad(plaintext);
        let ciphertext = self
            .provider
            .cbc_encrypt(variant, key, &iv, &padded, self.cbc_padding)?;

        tracing::trace!(
            operation = "aes_encrypt",
            cipher = variant.cipher_name(),
            %encoding,
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "encrypted"
        );
        Ok(encoding.encode(&ciphertext))
    }

    /// Decodes `text` and decrypts it.
    ///
    /// The inverse of [`Aes::encrypt`] when called with the same key, IV,
    /// padding, encoding and provider padding.
    ///
    /// # Errors
    ///
    /// - `CipherError::UnsupportedPadding` if the padding name is unknown
    /// - `CipherError::InvalidKeyLength` if the key is not 16, 24 or 32 bytes
    /// - `CipherError::InvalidIvLength` if an IV is given with the wrong length
    /// - `CipherError::MalformedEncodedInput` if `text` is not valid for
    ///   `encoding`
    /// - `CipherError::DecryptionFailed` for a wrong key, corrupted
    ///   ciphertext or bad padding, without saying which
    pub fn decrypt<B>(
        &self,
        text: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        padding: B,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        B: TryInto<BlockPadding>,
        CipherError: From<B::Error>,
    {
        self.try_decrypt(text, key, iv, padding, encoding)
            .map_err(|err| {
                tracing::debug!(operation = "aes_decrypt", error = ?err, "rejected");
                collapse_decrypt_error(err)
            })
    }

    fn try_decrypt<B>(
        &self,
        text: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        padding: B,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        B: TryInto<BlockPadding>,
        CipherError: From<B::Error>,
    {
        let padding: BlockPadding = padding.try_into()?;
        let variant = validate_symmetric_key(key)?;
        let iv = resolve_iv(key, iv)?;

        let ciphertext = encoding.decode(text)?;
        let padded = self
            .provider
            .cbc_decrypt(variant, key, &iv, &ciphertext, self.cbc_padding)?;
        let plaintext = padding.unpad(&padded)?;

        tracing::trace!(
            operation = "aes_decrypt",
            cipher = variant.cipher_name(),
            %encoding,
            ciphertext_len = ciphertext.len(),
            plaintext_len = plaintext.len(),
            "decrypted"
        );
        Ok(plaintext)
    }
}

/// Returns the caller's IV, or derives one from the key.
fn resolve_iv(key: &[u8], iv: Option<&[u8]>) -> CipherResult<[u8; IV_SIZE]> {
    Ok(validate_iv(iv)?.unwrap_or_else(|| derive_iv(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0u8; 32];

    #[test]
    fn test_known_answer_zero_key() -> CipherResult<()> {
        let ct = Aes::new().encrypt(b"hello world", &KEY, None, BlockPadding::Pkcs7, Encoding::Base64)?;
        assert_eq!(ct, b"VP2Th2a0qzyo0qNWJqbKS/cFKOzyqdV3wcYB/ltjVr8=");
        Ok(())
    }

    #[test]
    fn test_different_plaintexts_differ() -> CipherResult<()> {
        let aes = Aes::new();
        let hello = aes.encrypt(b"hello world", &KEY, None, BlockPadding::Pkcs7, Encoding::Base64)?;
        let other = aes.encrypt(b"hello worle", &KEY, None, BlockPadding::Pkcs7, Encoding::Base64)?;
        assert_ne!(hello, other);
        assert!(hello.iter().all(|b| b.is_ascii_alphanumeric() || b"+/=".contains(b)));
        Ok(())
    }

    #[test]
    fn test_roundtrip_all_key_sizes() -> CipherResult<()> {
        let aes = Aes::new();
        for len in [16, 24, 32] {
            let key = vec![0x42u8; len];
            let ct = aes.encrypt(b"attack at dawn", &key, None, "pkcs7", Encoding::Hex)?;
            let pt = aes.decrypt(&ct, &key, None, "PKCS7", Encoding::Hex)?;
            assert_eq!(pt, b"attack at dawn");
        }
        Ok(())
    }

    #[test]
    fn test_explicit_iv_changes_ciphertext() -> CipherResult<()> {
        let aes = Aes::new();
        let derived = aes.encrypt(b"same", &KEY, None, BlockPadding::Pkcs7, Encoding::None)?;
        let explicit = aes.encrypt(b"same", &KEY, Some(&[9u8; 16]), BlockPadding::Pkcs7, Encoding::None)?;
        assert_ne!(derived, explicit);

        let with_derived = aes.encrypt(b"same", &KEY, Some(&derive_iv(&KEY)), BlockPadding::Pkcs7, Encoding::None)?;
        assert_eq!(derived, with_derived);
        Ok(())
    }

    #[test]
    fn test_deterministic_without_iv() -> CipherResult<()> {
        let aes = Aes::new();
        let a = aes.encrypt(b"repeat", &KEY, None, BlockPadding::Pkcs7, Encoding::Base64)?;
        let b = aes.encrypt(b"repeat", &KEY, None, BlockPadding::Pkcs7, Encoding::Base64)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_ciphertext_lengths() -> CipherResult<()> {
        let aes = Aes::new();
        let lean = Aes::new().cbc_padding(CbcPadding::NoPadding);
        for (len, blocks) in [(0, 1), (15, 1), (16, 2), (17, 2)] {
            let pt = vec![0u8; len];
            let ct = lean.encrypt(&pt, &KEY, None, BlockPadding::Pkcs7, Encoding::None)?;
            assert_eq!(ct.len(), blocks * 16, "len {len}");
            let ct = aes.encrypt(&pt, &KEY, None, BlockPadding::Pkcs7, Encoding::None)?;
            assert_eq!(ct.len(), (blocks + 1) * 16, "len {len}");
        }
        Ok(())
    }

    #[test]
    fn test_no_padding_roundtrip() -> CipherResult<()> {
        let aes = Aes::new().cbc_padding(CbcPadding::NoPadding);
        let ct = aes.encrypt(b"", &KEY, None, BlockPadding::Pkcs7, Encoding::Base64)?;
        assert!(aes.decrypt(&ct, &KEY, None, BlockPadding::Pkcs7, Encoding::Base64)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_key_length() {
        let result = Aes::new().encrypt(b"x", &[0u8; 20], None, BlockPadding::Pkcs7, Encoding::Base64);
        assert!(matches!(result, Err(CipherError::InvalidKeyLength(20))));

        let result = Aes::new().decrypt(b"AAAA", &[0u8; 33], None, BlockPadding::Pkcs7, Encoding::Base64);
        assert!(matches!(result, Err(CipherError::InvalidKeyLength(33))));
    }

    #[test]
    fn test_invalid_iv_length() {
        let result = Aes::new().encrypt(b"x", &KEY, Some(&[0u8; 8]), BlockPadding::Pkcs7, Encoding::Base64);
        assert!(matches!(result, Err(CipherError::InvalidIvLength(8))));

        let result = Aes::new().encrypt(b"x", &KEY, Some(&[]), BlockPadding::Pkcs7, Encoding::Base64);
        assert!(matches!(result, Err(CipherError::InvalidIvLength(0))));
    }

    #[test]
    fn test_unknown_padding_name() {
        let result = Aes::new().encrypt(b"x", &KEY, None, "zero", Encoding::Base64);
        assert!(matches!(result, Err(CipherError::UnsupportedPadding(name)) if name == "zero"));
    }

    #[test]
    fn test_decrypt_malformed_text() {
        let result = Aes::new().decrypt(b"not base64!", &KEY, None, BlockPadding::Pkcs7, Encoding::Base64);
        assert!(matches!(result, Err(CipherError::MalformedEncodedInput)));

        let result = Aes::new().decrypt(b"zz", &KEY, None, BlockPadding::Pkcs7, Encoding::Hex);
        assert!(matches!(result, Err(CipherError::MalformedEncodedInput)));
    }

    #[test]
    fn test_decrypt_failures_are_uniform() -> CipherResult<()> {
        let aes = Aes::new();
        let ct = aes.encrypt(b"sensitive", &KEY, None, BlockPadding::Pkcs7, Encoding::None)?;

        // Wrong key.
        let result = aes.decrypt(&ct, &[1u8; 32], None, BlockPadding::Pkcs7, Encoding::None);
        assert!(matches!(result, Err(CipherError::DecryptionFailed)));

        // Truncated to a non-multiple of the block size.
        let result = aes.decrypt(&ct[..ct.len() - 1], &KEY, None, BlockPadding::Pkcs7, Encoding::None);
        assert!(matches!(result, Err(CipherError::DecryptionFailed)));

        // Empty ciphertext.
        let result = aes.decrypt(b"", &KEY, None, BlockPadding::Pkcs7, Encoding::None);
        assert!(matches!(result, Err(CipherError::DecryptionFailed)));
        Ok(())
    }

    #[test]
    fn test_inner_padding_failure_collapses() -> CipherResult<()> {
        // One block whose provider padding is valid but whose inner padding
        // ends in a zero byte.
        let mut block = [0x41u8; 16];
        block[15] = 0x00;
        let ct = RustCrypto.cbc_encrypt(
            crate::core::key::AesVariant::Aes256,
            &KEY,
            &derive_iv(&KEY),
            &block,
            CbcPadding::Pkcs7,
        )?;
        let result = Aes::new().decrypt(&ct, &KEY, None, BlockPadding::Pkcs7, Encoding::None);
        assert!(matches!(result, Err(CipherError::DecryptionFailed)));
        Ok(())
    }
}
