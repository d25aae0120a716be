//! Fuzz target for AES-CBC decryption of attacker-controlled text.

#![no_main]

use cryptkit::{Aes, BlockPadding, CbcPadding, CipherError, Encoding};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct AesFuzzInput {
    /// Selects a 16, 24 or 32 byte key
    key_size: u8,
    key: [u8; 32],
    iv: Option<[u8; 16]>,
    raw_provider: bool,
    hex: bool,
    text: Vec<u8>,
}

fuzz_target!(|input: AesFuzzInput| {
    let key = &input.key[..16 + 8 * usize::from(input.key_size % 3)];
    let cbc_padding = if input.raw_provider {
        CbcPadding::NoPadding
    } else {
        CbcPadding::Pkcs7
    };
    let encoding = if input.hex { Encoding::Hex } else { Encoding::Base64 };

    let result = Aes::new().cbc_padding(cbc_padding).decrypt(
        &input.text,
        key,
        input.iv.as_ref().map(|iv| iv.as_slice()),
        BlockPadding::Pkcs7,
        encoding,
    );

    // Only two failure kinds may surface once the key and IV are valid
    if let Err(err) = result {
        assert!(matches!(
            err,
            CipherError::MalformedEncodedInput | CipherError::DecryptionFailed
        ));
    }
});
