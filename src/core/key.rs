//! Key material validation and resolution.
//!
//! Symmetric keys select their AES variant by length. Asymmetric keys are
//! given either as inline key text (a PEM body without header and footer)
//! or as a path to a PEM file; the two are told apart by the `.pem` suffix
//! alone, never by looking at the content.

use core::fmt::{self, Display};
use std::path::Path;

use zeroize::Zeroizing;

use crate::core::error::{CipherError, CipherResult};

/// Size of an AES-CBC initialization vector in bytes.
pub const IV_SIZE: usize = 16;

/// Column width of PEM bodies.
pub const PEM_LINE_WIDTH: usize = 64;

/// Suffix that marks an asymmetric key argument as a file path.
pub const PEM_FILE_SUFFIX: &str = ".pem";

/// PEM label for inline public keys (SubjectPublicKeyInfo).
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// PEM label for inline private keys (PKCS#1).
pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// AES variant selected by key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesVariant {
    /// 16-byte key.
    Aes128,
    /// 24-byte key.
    Aes192,
    /// 32-byte key.
    Aes256,
}

impl AesVariant {
    /// Key size in bits.
    #[must_use]
    pub const fn bits(&self) -> usize {
        match self {
            Self::Aes128 => 128,
            Self::Aes192 => 192,
            Self::Aes256 => 256,
        }
    }

    /// Key size in bytes.
    #[must_use]
    pub const fn key_len(&self) -> usize {
        self.bits() / 8
    }

    /// Cipher/mode identifier, e.g. `aes-256-cbc`.
    #[must_use]
    pub const fn cipher_name(&self) -> &'static str {
        match self {
            Self::Aes128 => "aes-128-cbc",
            Self::Aes192 => "aes-192-cbc",
            Self::Aes256 => "aes-256-cbc",
        }
    }
}

impl TryFrom<usize> for AesVariant {
    type Error = CipherError;

    fn try_from(key_len: usize) -> Result<Self, Self::Error> {
        match key_len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(CipherError::InvalidKeyLength(other)),
        }
    }
}

impl Display for AesVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cipher_name())
    }
}

/// Validates a symmetric key and returns the variant its length selects.
///
/// # Errors
///
/// Returns `CipherError::InvalidKeyLength` unless the key is 16, 24 or 32
/// bytes long.
pub fn validate_symmetric_key(key: &[u8]) -> CipherResult<AesVariant> {
    AesVariant::try_from(key.len())
}

/// Returns the cipher/mode identifier for a symmetric key.
///
/// # Errors
///
/// Returns `CipherError::InvalidKeyLength` for unsupported key lengths.
pub fn algorithm_for(key: &[u8]) -> CipherResult<&'static str> {
    validate_symmetric_key(key).map(|variant| variant.cipher_name())
}

/// Validates an optional IV.
///
/// # Errors
///
/// Returns `CipherError::InvalidIvLength` if an IV is given and is not
/// exactly 16 bytes (an empty slice counts as given).
pub fn validate_iv(iv: Option<&[u8]>) -> CipherResult<Option<[u8; IV_SIZE]>> {
    iv.map(|iv| {
        <[u8; IV_SIZE]>::try_from(iv).map_err(|_| CipherError::InvalidIvLength(iv.len()))
    })
    .transpose()
}

/// Derives the fallback IV from the key: the first 16 characters of the
/// lowercase hex MD5 digest, taken as ASCII bytes.
///
/// The result is a pure function of the key, so every message encrypted
/// under the same key without an explicit IV shares it. Pass a random IV
/// wherever IV unpredictability matters.
#[cfg(feature = "symmetric")]
#[must_use]
pub fn derive_iv(key: &[u8]) -> [u8; IV_SIZE] {
    use md5::{Digest, Md5};

    let digest = Md5::digest(key);
    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(hex::encode(&digest[..IV_SIZE / 2]).as_bytes());
    iv
}

/// Where asymmetric key material comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource<'a> {
    /// Key text without PEM header and footer.
    Inline(&'a str),
    /// Path to a PEM-encoded key file.
    File(&'a Path),
}

impl<'a> From<&'a str> for KeySource<'a> {
    fn from(input: &'a str) -> Self {
        if input.ends_with(PEM_FILE_SUFFIX) {
            Self::File(Path::new(input))
        } else {
            Self::Inline(input)
        }
    }
}

/// Wraps a bare key body in a PEM envelope with the given label.
///
/// The body is hard-wrapped at 64 columns. Existing line breaks are kept
/// and restart the column count. No trailing newline is emitted.
#[must_use]
pub fn pem_envelope(body: &str, label: &str) -> String {
    let mut pem = String::with_capacity(body.len() + body.len() / PEM_LINE_WIDTH + 2 * label.len() + 40);
    pem.push_str("-----BEGIN ");
    pem.push_str(label);
    pem.push_str("-----\n");

    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            pem.push('\n');
        }
        let mut column = 0;
        for ch in line.chars() {
            if column == PEM_LINE_WIDTH {
                pem.push('\n');
                column = 0;
            }
            pem.push(ch);
            column += 1;
        }
    }

    pem.push_str("\n-----END ");
    pem.push_str(label);
    pem.push_str("-----");
    pem
}

/// Resolves a public key argument into PEM text.
///
/// # Errors
///
/// Returns `CipherError::KeyFileNotFound` or `CipherError::KeyFileUnreadable`
/// when a `.pem` path cannot be loaded.
pub fn resolve_public_key(input: &str) -> CipherResult<String> {
    match KeySource::from(input) {
        KeySource::Inline(body) => Ok(pem_envelope(body, PUBLIC_KEY_LABEL)),
        KeySource::File(path) => read_key_file(path).map(|pem| pem.as_str().to_owned()),
    }
}

/// Resolves a private key argument into PEM text, zeroized on drop.
///
/// # Errors
///
/// Returns `CipherError::KeyFileNotFound` or `CipherError::KeyFileUnreadable`
/// when a `.pem` path cannot be loaded.
pub fn resolve_private_key(input: &str) -> CipherResult<Zeroizing<String>> {
    match KeySource::from(input) {
        KeySource::Inline(body) => Ok(Zeroizing::new(pem_envelope(body, PRIVATE_KEY_LABEL))),
        KeySource::File(path) => read_key_file(path),
    }
}

/// Reads a whole key file. The handle is closed before returning.
fn read_key_file(path: &Path) -> CipherResult<Zeroizing<String>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "key file not found");
        return Err(CipherError::KeyFileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(CipherError::KeyFileUnreadable)
}
