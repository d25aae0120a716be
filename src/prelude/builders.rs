//! Builder patterns for cipher operations.
//!
//! Each builder carries the option arguments of its facade (padding,
//! encoding, digest) so call sites only pass keys and data.
//!
//! # Presets
//!
//! | Preset | Encoding | Padding | Digest |
//! |--------|----------|---------|--------|
//! | `AesBuilder::new()` | base64 | pkcs7 | |
//! | `AesBuilder::hex()` | hex | pkcs7 | |
//! | `AesBuilder::raw()` | none | pkcs7 | |
//! | `RsaBuilder::new()` | base64 | pkcs1 | sha256 |
//! | `RsaBuilder::oaep()` | base64 | oaep | sha256 |
//! | `RsaBuilder::hex()` | hex | pkcs1 | sha256 |
//!
//! # Example
//!
//! ```rust
//! use cryptkit::prelude::*;
//!
//! let key = [0x42u8; 24];
//! let iv = [0x24u8; 16];
//!
//! let ct = AesBuilder::raw()
//!     .cbc_padding(CbcPadding::NoPadding)
//!     .try_encrypt(b"sixteen byte msg", &key, Some(&iv))?;
//! assert_eq!(ct.len(), 32);
//! # Ok::<(), CipherError>(())
//! ```

use crate::core::encoding::Encoding;
use crate::core::padding::BlockPadding;
use crate::core::provider::CbcPadding;
use crate::core::types::{EncryptionPadding, SignatureAlgorithm, SignaturePadding};

#[cfg(any(feature = "symmetric", feature = "asymmetric"))]
use crate::core::error::CipherResult;

#[cfg(feature = "symmetric")]
use crate::core::operations::Aes;

#[cfg(feature = "asymmetric")]
use crate::core::operations::Rsa;

/// Builder for AES-CBC operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AesBuilder {
    padding: BlockPadding,
    encoding: Encoding,
    cbc_padding: CbcPadding,
}

impl Default for AesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AesBuilder {
    /// Base64 output with PKCS#7 padding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            padding: BlockPadding::Pkcs7,
            encoding: Encoding::Base64,
            cbc_padding: CbcPadding::Pkcs7,
        }
    }

    /// Lowercase hex output with PKCS#7 padding.
    #[must_use]
    pub const fn hex() -> Self {
        Self::new().encoding(Encoding::Hex)
    }

    /// Raw binary output with PKCS#7 padding.
    #[must_use]
    pub const fn raw() -> Self {
        Self::new().encoding(Encoding::None)
    }

    /// Sets the block padding.
    #[must_use]
    pub const fn padding(mut self, padding: BlockPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the text encoding.
    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the padding applied by the provider.
    #[must_use]
    pub const fn cbc_padding(mut self, cbc_padding: CbcPadding) -> Self {
        self.cbc_padding = cbc_padding;
        self
    }

    /// Returns the configured block padding.
    #[must_use]
    pub const fn get_padding(&self) -> BlockPadding {
        self.padding
    }

    /// Returns the configured encoding.
    #[must_use]
    pub const fn get_encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns the configured provider padding.
    #[must_use]
    pub const fn get_cbc_padding(&self) -> CbcPadding {
        self.cbc_padding
    }
}

#[cfg(feature = "symmetric")]
impl AesBuilder {
    /// Returns the configured cipher.
    #[must_use]
    pub fn build(&self) -> Aes {
        Aes::new().cbc_padding(self.cbc_padding)
    }

    /// Encrypts with the configured options.
    ///
    /// # Errors
    ///
    /// See [`Aes::encrypt`].
    pub fn try_encrypt(&self, plaintext: &[u8], key: &[u8], iv: Option<&[u8]>) -> CipherResult<Vec<u8>> {
        self.build()
            .encrypt(plaintext, key, iv, self.padding, self.encoding)
    }

    /// Decrypts with the configured options.
    ///
    /// # Errors
    ///
    /// See [`Aes::decrypt`].
    pub fn try_decrypt(&self, text: &[u8], key: &[u8], iv: Option<&[u8]>) -> CipherResult<Vec<u8>> {
        self.build()
            .decrypt(text, key, iv, self.padding, self.encoding)
    }
}

/// Builder for RSA operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaBuilder {
    encryption_padding: EncryptionPadding,
    signature_padding: SignaturePadding,
    algorithm: SignatureAlgorithm,
    encoding: Encoding,
}

impl Default for RsaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RsaBuilder {
    /// Base64 output, PKCS#1 v1.5 padding, SHA-256 signatures.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            encryption_padding: EncryptionPadding::Pkcs1,
            signature_padding: SignaturePadding::Pkcs1,
            algorithm: SignatureAlgorithm::Sha256,
            encoding: Encoding::Base64,
        }
    }

    /// Like [`RsaBuilder::new`] but encrypting with OAEP.
    #[must_use]
    pub const fn oaep() -> Self {
        Self::new().encryption_padding(EncryptionPadding::Oaep)
    }

    /// Like [`RsaBuilder::new`] but with lowercase hex output.
    #[must_use]
    pub const fn hex() -> Self {
        Self::new().encoding(Encoding::Hex)
    }

    /// Sets the padding for public encrypt / private decrypt.
    #[must_use]
    pub const fn encryption_padding(mut self, padding: EncryptionPadding) -> Self {
        self.encryption_padding = padding;
        self
    }

    /// Sets the padding for private encrypt / public decrypt.
    #[must_use]
    pub const fn signature_padding(mut self, padding: SignaturePadding) -> Self {
        self.signature_padding = padding;
        self
    }

    /// Sets the signature digest.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the text encoding.
    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Returns the configured encryption padding.
    #[must_use]
    pub const fn get_encryption_padding(&self) -> EncryptionPadding {
        self.encryption_padding
    }

    /// Returns the configured signature padding.
    #[must_use]
    pub const fn get_signature_padding(&self) -> SignaturePadding {
        self.signature_padding
    }

    /// Returns the configured digest.
    #[must_use]
    pub const fn get_algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// Returns the configured encoding.
    #[must_use]
    pub const fn get_encoding(&self) -> Encoding {
        self.encoding
    }
}

#[cfg(feature = "asymmetric")]
impl RsaBuilder {
    /// Encrypts with a public key.
    ///
    /// # Errors
    ///
    /// See [`Rsa::public_encrypt`].
    pub fn try_public_encrypt(&self, plaintext: &[u8], public_key: &str) -> CipherResult<Vec<u8>> {
        Rsa::new().public_encrypt(plaintext, public_key, self.encryption_padding, self.encoding)
    }

    /// Decrypts with a private key.
    ///
    /// # Errors
    ///
    /// See [`Rsa::private_decrypt`].
    pub fn try_private_decrypt(&self, text: &[u8], private_key: &str) -> CipherResult<Vec<u8>> {
        Rsa::new().private_decrypt(text, private_key, self.encryption_padding, self.encoding)
    }

    /// Encrypts with a private key.
    ///
    /// # Errors
    ///
    /// See [`Rsa::private_encrypt`].
    pub fn try_private_encrypt(&self, plaintext: &[u8], private_key: &str) -> CipherResult<Vec<u8>> {
        Rsa::new().private_encrypt(plaintext, private_key, self.signature_padding, self.encoding)
    }

    /// Decrypts with a public key.
    ///
    /// # Errors
    ///
    /// See [`Rsa::public_decrypt`].
    pub fn try_public_decrypt(&self, text: &[u8], public_key: &str) -> CipherResult<Vec<u8>> {
        Rsa::new().public_decrypt(text, public_key, self.signature_padding, self.encoding)
    }

    /// Signs `message`.
    ///
    /// # Errors
    ///
    /// See [`Rsa::sign`].
    pub fn try_sign(&self, message: &[u8], private_key: &str) -> CipherResult<Vec<u8>> {
        Rsa::new().sign(message, private_key, self.algorithm, self.encoding)
    }

    /// Checks a signature produced by [`RsaBuilder::try_sign`] with the same
    /// options.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &[u8], public_key: &str) -> bool {
        Rsa::new().verify(message, signature, public_key, self.algorithm, self.encoding)
    }
}
