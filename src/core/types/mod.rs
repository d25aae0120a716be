//! Option types for asymmetric operations.
//!
//! - [`RsaPadding`] - Any RSA padding mode, from a name or numeric constant
//! - [`EncryptionPadding`] - Modes legal for public encrypt / private decrypt
//! - [`SignaturePadding`] - Modes legal for private encrypt / public decrypt
//! - [`SignatureAlgorithm`] - Digest used for signing and verification

mod rsa_padding;
mod signature;

pub use rsa_padding::{
    EncryptionPadding, RsaPadding, SignaturePadding, NO_PADDING, PKCS1_OAEP_PADDING,
    PKCS1_PADDING, SSLV23_PADDING,
};
pub use signature::SignatureAlgorithm;
