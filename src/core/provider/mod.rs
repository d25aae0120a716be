//! Cryptographic provider seam.
//!
//! The cipher facades never touch block-cipher or RSA arithmetic directly;
//! they call into a provider through these traits. [`RustCrypto`] is the
//! default provider and is built on the RustCrypto crates. Tests and
//! embedders can substitute their own implementation.
//!
//! The default provider mirrors OpenSSL's EVP behavior so ciphertexts
//! interoperate with existing OpenSSL-based producers:
//!
//! - AES-CBC applies its own PKCS#7 block padding unless
//!   [`CbcPadding::NoPadding`] is selected
//! - OAEP uses SHA-1 for both the label hash and MGF1
//! - SSLv23 padding writes the rollback marker on encryption and rejects
//!   it on decryption

use crate::core::error::CipherResult;
use crate::core::key::{AesVariant, IV_SIZE};
use crate::core::types::{EncryptionPadding, SignatureAlgorithm, SignaturePadding};

#[cfg(feature = "symmetric")]
mod block;

#[cfg(feature = "asymmetric")]
mod public_key;

/// Padding applied by the block-cipher provider itself, underneath any
/// padding the caller already added.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CbcPadding {
    /// PKCS#7 block padding (OpenSSL's default).
    #[default]
    Pkcs7,
    /// No provider padding; input must be block-aligned.
    NoPadding,
}

/// AES-CBC primitive.
pub trait BlockCipherProvider {
    /// Encrypts `data` with AES-CBC.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` if the primitive rejects the
    /// input.
    fn cbc_encrypt(
        &self,
        variant: AesVariant,
        key: &[u8],
        iv: &[u8; IV_SIZE],
        data: &[u8],
        padding: CbcPadding,
    ) -> CipherResult<Vec<u8>>;

    /// Decrypts `data` with AES-CBC.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` if the ciphertext is not
    /// block-aligned or its provider padding is invalid.
    fn cbc_decrypt(
        &self,
        variant: AesVariant,
        key: &[u8],
        iv: &[u8; IV_SIZE],
        data: &[u8],
        padding: CbcPadding,
    ) -> CipherResult<Vec<u8>>;
}

/// RSA key parsing, encryption and signature primitives.
pub trait RsaProvider {
    /// Parsed public key.
    type PublicKey;
    /// Parsed private key.
    type PrivateKey;

    /// Parses a PEM-encoded public key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyMaterial` if the text is not a
    /// supported public key.
    fn parse_public_key(&self, pem: &str) -> CipherResult<Self::PublicKey>;

    /// Parses a PEM-encoded private key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyMaterial` if the text is not a
    /// supported private key.
    fn parse_private_key(&self, pem: &str) -> CipherResult<Self::PrivateKey>;

    /// Size of the key's modulus in bytes.
    fn modulus_len(&self, key: &Self::PublicKey) -> usize;

    /// Encrypts with the public key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` if the message does not fit
    /// the padding mode.
    fn public_encrypt(
        &self,
        key: &Self::PublicKey,
        data: &[u8],
        padding: EncryptionPadding,
    ) -> CipherResult<Vec<u8>>;

    /// Decrypts with the private key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` on any decryption failure.
    fn private_decrypt(
        &self,
        key: &Self::PrivateKey,
        data: &[u8],
        padding: EncryptionPadding,
    ) -> CipherResult<Vec<u8>>;

    /// Encrypts with the private key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` if the message does not fit
    /// the padding mode.
    fn private_encrypt(
        &self,
        key: &Self::PrivateKey,
        data: &[u8],
        padding: SignaturePadding,
    ) -> CipherResult<Vec<u8>>;

    /// Decrypts with the public key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` on any decryption failure.
    fn public_decrypt(
        &self,
        key: &Self::PublicKey,
        data: &[u8],
        padding: SignaturePadding,
    ) -> CipherResult<Vec<u8>>;

    /// Hashes `message` and signs the digest.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` if signing fails.
    fn sign(
        &self,
        key: &Self::PrivateKey,
        message: &[u8],
        algorithm: SignatureAlgorithm,
    ) -> CipherResult<Vec<u8>>;

    /// Hashes `message` and checks `signature` against the digest.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::ProviderFailure` unless the signature matches.
    fn verify(
        &self,
        key: &Self::PublicKey,
        message: &[u8],
        signature: &[u8],
        algorithm: SignatureAlgorithm,
    ) -> CipherResult<()>;
}

/// Default provider backed by the RustCrypto crates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RustCrypto;
