//! Symmetric and asymmetric encryption with pluggable text encodings.
//!
//! `cryptkit` is a thin, strongly typed layer over AES-CBC and RSA. It
//! validates keys, IVs and padding choices up front, applies explicit block
//! padding, and encodes its binary output as hex, base64 or raw bytes. The
//! primitives themselves come from a [`provider`](core::provider); the
//! default one is built on the RustCrypto crates and produces output
//! byte-compatible with OpenSSL.
//!
//! # Quick Start
//!
//! ```rust
//! use cryptkit::{Aes, BlockPadding, Encoding};
//!
//! let aes = Aes::new();
//! let key = [0u8; 32];
//!
//! let ct = aes.encrypt(b"hello world", &key, None, BlockPadding::Pkcs7, Encoding::Base64)?;
//! assert_eq!(ct, b"VP2Th2a0qzyo0qNWJqbKS/cFKOzyqdV3wcYB/ltjVr8=");
//!
//! let pt = aes.decrypt(&ct, &key, None, BlockPadding::Pkcs7, Encoding::Base64)?;
//! assert_eq!(pt, b"hello world");
//! # Ok::<(), cryptkit::CipherError>(())
//! ```
//!
//! # Operations
//!
//! | Facade | Operation | Key |
//! |--------|-----------|-----|
//! | [`Aes`] | `encrypt` / `decrypt` | 16, 24 or 32 raw bytes |
//! | [`Rsa`] | `public_encrypt` / `private_decrypt` | PEM public / private |
//! | [`Rsa`] | `private_encrypt` / `public_decrypt` | PEM private / public |
//! | [`Rsa`] | `sign` / `verify` | PEM private / public |
//!
//! # Encodings
//!
//! | [`Encoding`] | Output |
//! |--------------|--------|
//! | `Base64` | Standard alphabet with `=` padding (default) |
//! | `Hex` | Lowercase; decoding accepts either case |
//! | `None` | Raw bytes, passed through unchanged |
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! cryptkit = "0.1"                                                       # AES and RSA
//! cryptkit = { version = "0.1", default-features = false, features = ["symmetric"] }  # AES only
//! cryptkit = { version = "0.1", features = ["prelude"] }                 # plus builders
//! ```
//!
//! # Security
//!
//! - Without an explicit IV, AES derives one from the key, so equal
//!   plaintexts under one key give equal ciphertexts. Pass a random IV
//!   when that matters.
//! - Decryption failures are reported as a single
//!   [`CipherError::DecryptionFailed`] regardless of cause
//! - Private key text is zeroized on drop
//! - Signature verification returns `bool` and never fails
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::encoding::Encoding;
pub use core::error::{CipherError, CipherResult};
pub use core::key::{AesVariant, KeySource};
pub use core::padding::{BlockPadding, BLOCK_SIZE};
pub use core::provider::{BlockCipherProvider, CbcPadding, RsaProvider, RustCrypto};
pub use core::types::{
    EncryptionPadding, RsaPadding, SignatureAlgorithm, SignaturePadding, NO_PADDING,
    PKCS1_OAEP_PADDING, PKCS1_PADDING, SSLV23_PADDING,
};

#[cfg(feature = "symmetric")]
pub use core::operations::Aes;

#[cfg(feature = "asymmetric")]
pub use core::operations::Rsa;
