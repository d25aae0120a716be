//! Fuzz target for RSA public-key decryption of arbitrary blocks.

#![no_main]

use cryptkit::{CipherError, Encoding, Rsa, SignaturePadding};
use libfuzzer_sys::fuzz_target;

const ALICE_PUBLIC: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../tests/vectors/keys/alice_public.pem"
);

fuzz_target!(|data: &[u8]| {
    let rsa = Rsa::new();
    for padding in [SignaturePadding::Pkcs1, SignaturePadding::None] {
        let result = rsa.public_decrypt(data, ALICE_PUBLIC, padding, Encoding::None);
        if let Err(err) = result {
            assert!(matches!(err, CipherError::DecryptionFailed));
        }
    }
});
