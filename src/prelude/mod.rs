//! Ergonomic layer for cipher operations.
//!
//! Re-exports the everyday types together with builders that carry
//! option presets, so a call site only names what differs from the
//! defaults.
//!
//! # Usage
//!
//! ```rust
//! use cryptkit::prelude::*;
//!
//! let ct = AesBuilder::hex().try_encrypt(b"hello", &[1u8; 16], None)?;
//! let pt = AesBuilder::hex().try_decrypt(&ct, &[1u8; 16], None)?;
//! assert_eq!(pt, b"hello");
//! # Ok::<(), CipherError>(())
//! ```

mod builders;

pub use builders::{AesBuilder, RsaBuilder};

pub use crate::core::encoding::Encoding;
pub use crate::core::error::{CipherError, CipherResult};
pub use crate::core::padding::BlockPadding;
pub use crate::core::provider::CbcPadding;
pub use crate::core::types::{
    EncryptionPadding, RsaPadding, SignatureAlgorithm, SignaturePadding,
};

#[cfg(feature = "symmetric")]
pub use crate::core::operations::Aes;

#[cfg(feature = "asymmetric")]
pub use crate::core::operations::Rsa;
