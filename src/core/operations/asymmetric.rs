//! RSA encryption and PKCS#1 v1.5 signatures over PEM keys.
//!
//! Keys are passed as text. An argument ending in `.pem` is read from that
//! file; anything else is taken as a bare key body and wrapped in a PEM
//! envelope (`PUBLIC KEY` for public keys, `RSA PRIVATE KEY` for private
//! keys). Keys are resolved on every call and not cached.
//!
//! | Operation | Key | Legal padding |
//! |-----------|-----|---------------|
//! | [`Rsa::public_encrypt`] / [`Rsa::private_decrypt`] | public / private | pkcs1, sslv23, oaep, none |
//! | [`Rsa::private_encrypt`] / [`Rsa::public_decrypt`] | private / public | pkcs1, none |
//!
//! Padding is checked before the key is touched, so an illegal mode never
//! reaches the file system or the provider.

use crate::core::encoding::Encoding;
use crate::core::error::{CipherError, CipherResult};
use crate::core::key::{resolve_private_key, resolve_public_key};
use crate::core::provider::{RsaProvider, RustCrypto};
use crate::core::types::{EncryptionPadding, SignatureAlgorithm, SignaturePadding};

use super::collapse_decrypt_error;

/// Asymmetric cipher over RSA.
///
/// # Example
///
/// ```rust,no_run
/// use cryptkit::{Encoding, EncryptionPadding, Rsa, SignatureAlgorithm};
///
/// let rsa = Rsa::new();
///
/// let ct = rsa.public_encrypt(b"hello", "keys/public.pem", EncryptionPadding::Oaep, Encoding::Base64)?;
/// let pt = rsa.private_decrypt(&ct, "keys/private.pem", EncryptionPadding::Oaep, Encoding::Base64)?;
/// assert_eq!(pt, b"hello");
///
/// let sig = rsa.sign(b"message", "keys/private.pem", SignatureAlgorithm::Sha256, Encoding::Base64)?;
/// assert!(rsa.verify(b"message", &sig, "keys/public.pem", SignatureAlgorithm::Sha256, Encoding::Base64));
/// # Ok::<(), cryptkit::CipherError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Rsa<P = RustCrypto> {
    provider: P,
}

impl Rsa {
    /// Creates a cipher backed by the default provider.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_provider(RustCrypto)
    }
}

impl<P> Rsa<P> {
    /// Creates a cipher backed by `provider`.
    #[must_use]
    pub const fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: RsaProvider> Rsa<P> {
    /// Encrypts `plaintext` with a public key.
    ///
    /// # Arguments
    ///
    /// * `plaintext` - Bytes to encrypt; must fit the padding mode
    /// * `public_key` - Inline key body or path to a `.pem` file
    /// * `padding` - An [`EncryptionPadding`], [`RsaPadding`](crate::RsaPadding),
    ///   name or numeric constant
    /// * `encoding` - Text encoding of the result
    ///
    /// # Errors
    ///
    /// - `CipherError::UnsupportedPadding` if the padding is unknown
    /// - `CipherError::KeyFileNotFound` / `CipherError::KeyFileUnreadable`
    /// - `CipherError::InvalidKeyMaterial` if the key cannot be parsed
    /// - `CipherError::ProviderFailure` if the message does not fit
    pub fn public_encrypt<E>(
        &self,
        plaintext: &[u8],
        public_key: &str,
        padding: E,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        E: TryInto<EncryptionPadding>,
        CipherError: From<E::Error>,
    {
        let result = (|| -> CipherResult<Vec<u8>> {
            let padding: EncryptionPadding = padding.try_into()?;
            let key = self.public_key(public_key)?;
            let ciphertext = self.provider.public_encrypt(&key, plaintext, padding)?;
            tracing::trace!(operation = "rsa_public_encrypt", %padding, %encoding, "encrypted");
            Ok(encoding.encode(&ciphertext))
        })();
        result.map_err(|err| rejected("rsa_public_encrypt", err))
    }

    /// Decodes `text` and decrypts it with a private key.
    ///
    /// # Errors
    ///
    /// - `CipherError::UnsupportedPadding` if the padding is unknown
    /// - `CipherError::KeyFileNotFound` / `CipherError::KeyFileUnreadable`
    /// - `CipherError::InvalidKeyMaterial` if the key cannot be parsed
    /// - `CipherError::MalformedEncodedInput` if `text` is not valid for
    ///   `encoding`
    /// - `CipherError::DecryptionFailed` for any failure of the decryption
    ///   itself
    pub fn private_decrypt<E>(
        &self,
        text: &[u8],
        private_key: &str,
        padding: E,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        E: TryInto<EncryptionPadding>,
        CipherError: From<E::Error>,
    {
        let result = (|| -> CipherResult<Vec<u8>> {
            let padding: EncryptionPadding = padding.try_into()?;
            let key = self.private_key(private_key)?;
            let ciphertext = encoding.decode(text)?;
            let plaintext = self.provider.private_decrypt(&key, &ciphertext, padding)?;
            tracing::trace!(operation = "rsa_private_decrypt", %padding, %encoding, "decrypted");
            Ok(plaintext)
        })();
        result.map_err(|err| collapse_decrypt_error(rejected("rsa_private_decrypt", err)))
    }

    /// Encrypts `plaintext` with a private key, so that anyone holding the
    /// public key can recover it.
    ///
    /// # Errors
    ///
    /// - `CipherError::UnsupportedPadding` if the padding is unknown, or is
    ///   OAEP or SSLv23
    /// - `CipherError::KeyFileNotFound` / `CipherError::KeyFileUnreadable`
    /// - `CipherError::InvalidKeyMaterial` if the key cannot be parsed
    /// - `CipherError::ProviderFailure` if the message does not fit
    pub fn private_encrypt<S>(
        &self,
        plaintext: &[u8],
        private_key: &str,
        padding: S,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        S: TryInto<SignaturePadding>,
        CipherError: From<S::Error>,
    {
        let result = (|| -> CipherResult<Vec<u8>> {
            let padding: SignaturePadding = padding.try_into()?;
            let key = self.private_key(private_key)?;
            let ciphertext = self.provider.private_encrypt(&key, plaintext, padding)?;
            tracing::trace!(operation = "rsa_private_encrypt", %padding, %encoding, "encrypted");
            Ok(encoding.encode(&ciphertext))
        })();
        result.map_err(|err| rejected("rsa_private_encrypt", err))
    }

    /// Decodes `text` and decrypts it with a public key.
    ///
    /// # Errors
    ///
    /// - `CipherError::UnsupportedPadding` if the padding is unknown, or is
    ///   OAEP or SSLv23
    /// - `CipherError::KeyFileNotFound` / `CipherError::KeyFileUnreadable`
    /// - `CipherError::InvalidKeyMaterial` if the key cannot be parsed
    /// - `CipherError::MalformedEncodedInput` if `text` is not valid for
    ///   `encoding`
    /// - `CipherError::DecryptionFailed` for any failure of the decryption
    ///   itself
    pub fn public_decrypt<S>(
        &self,
        text: &[u8],
        public_key: &str,
        padding: S,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        S: TryInto<SignaturePadding>,
        CipherError: From<S::Error>,
    {
        let result = (|| -> CipherResult<Vec<u8>> {
            let padding: SignaturePadding = padding.try_into()?;
            let key = self.public_key(public_key)?;
            let ciphertext = encoding.decode(text)?;
            let plaintext = self.provider.public_decrypt(&key, &ciphertext, padding)?;
            tracing::trace!(operation = "rsa_public_decrypt", %padding, %encoding, "decrypted");
            Ok(plaintext)
        })();
        result.map_err(|err| collapse_decrypt_error(rejected("rsa_public_decrypt", err)))
    }

    /// Signs `message` with PKCS#1 v1.5 over the chosen digest.
    ///
    /// # Errors
    ///
    /// - `CipherError::UnsupportedAlgorithm` if the algorithm is unknown
    /// - `CipherError::KeyFileNotFound` / `CipherError::KeyFileUnreadable`
    /// - `CipherError::InvalidKeyMaterial` if the key cannot be parsed
    /// - `CipherError::ProviderFailure` if signing fails
    pub fn sign<A>(
        &self,
        message: &[u8],
        private_key: &str,
        algorithm: A,
        encoding: Encoding,
    ) -> CipherResult<Vec<u8>>
    where
        A: TryInto<SignatureAlgorithm>,
        CipherError: From<A::Error>,
    {
        let result = (|| -> CipherResult<Vec<u8>> {
            let algorithm: SignatureAlgorithm = algorithm.try_into()?;
            let key = self.private_key(private_key)?;
            let signature = self.provider.sign(&key, message, algorithm)?;
            tracing::trace!(operation = "rsa_sign", %algorithm, %encoding, "signed");
            Ok(encoding.encode(&signature))
        })();
        result.map_err(|err| rejected("rsa_sign", err))
    }

    /// Checks `signature` over `message`.
    ///
    /// Never fails: a bad signature, undecodable signature text, unknown
    /// algorithm, or unusable key all yield `false`. The reason is logged at
    /// debug level.
    #[must_use]
    pub fn verify<A>(
        &self,
        message: &[u8],
        signature: &[u8],
        public_key: &str,
        algorithm: A,
        encoding: Encoding,
    ) -> bool
    where
        A: TryInto<SignatureAlgorithm>,
        CipherError: From<A::Error>,
    {
        let result = (|| -> CipherResult<()> {
            let algorithm: SignatureAlgorithm = algorithm.try_into()?;
            let key = self.public_key(public_key)?;
            match encoding.decode(signature) {
                Ok(signature) => self.provider.verify(&key, message, &signature, algorithm),
                Err(err) => {
                    // Spend the same work as a real check before reporting.
                    let blank = vec![0u8; self.provider.modulus_len(&key)];
                    let _ = self.provider.verify(&key, message, &blank, algorithm);
                    Err(err)
                }
            }
        })();

        match result {
            Ok(()) => {
                tracing::trace!(operation = "rsa_verify", "valid");
                true
            }
            Err(err) => {
                rejected("rsa_verify", err);
                false
            }
        }
    }

    fn public_key(&self, input: &str) -> CipherResult<P::PublicKey> {
        let pem = resolve_public_key(input)?;
        self.provider.parse_public_key(&pem)
    }

    fn private_key(&self, input: &str) -> CipherResult<P::PrivateKey> {
        let pem = resolve_private_key(input)?;
        self.provider.parse_private_key(&pem)
    }
}

fn rejected(operation: &'static str, err: CipherError) -> CipherError {
    tracing::debug!(operation, error = ?err, "rejected");
    err
}
