//! Fuzz target for signature verification.
//!
//! Verification is total: it returns `false` for every malformed input and
//! must never panic.

#![no_main]

use cryptkit::{Encoding, Rsa, SignatureAlgorithm};
use libfuzzer_sys::fuzz_target;

const ALICE_PUBLIC: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../tests/vectors/keys/alice_public.pem"
);

#[derive(Debug, arbitrary::Arbitrary)]
struct VerifyFuzzInput {
    message: Vec<u8>,
    signature: Vec<u8>,
    algorithm: u8,
    encoding: u8,
}

fuzz_target!(|input: VerifyFuzzInput| {
    let algorithm = match input.algorithm % 5 {
        0 => SignatureAlgorithm::Sha1,
        1 => SignatureAlgorithm::Sha224,
        2 => SignatureAlgorithm::Sha256,
        3 => SignatureAlgorithm::Sha384,
        _ => SignatureAlgorithm::Sha512,
    };
    let encoding = match input.encoding % 3 {
        0 => Encoding::None,
        1 => Encoding::Hex,
        _ => Encoding::Base64,
    };

    let valid = Rsa::new().verify(&input.message, &input.signature, ALICE_PUBLIC, algorithm, encoding);
    assert!(!valid, "forged a signature");
});
