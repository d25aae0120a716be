//! Property tests for the encoding, padding and symmetric cipher layers.

#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

use cryptkit::{BlockPadding, Encoding, BLOCK_SIZE};
use proptest::prelude::*;

fn any_encoding() -> impl Strategy<Value = Encoding> {
    prop_oneof![Just(Encoding::None), Just(Encoding::Hex), Just(Encoding::Base64)]
}

proptest! {
    #[test]
    fn encoding_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..512), encoding in any_encoding()) {
        let encoded = encoding.encode(&bytes);
        prop_assert_eq!(encoding.decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn hex_output_is_lowercase(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = Encoding::Hex.encode(&bytes);
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert!(encoded.iter().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b)));
    }

    #[test]
    fn pad_unpad_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let padded = BlockPadding::Pkcs7.pad(&data);
        prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
        let added = padded.len() - data.len();
        prop_assert!((1..=BLOCK_SIZE).contains(&added));
        prop_assert!(padded[data.len()..].iter().all(|&b| usize::from(b) == added));
        prop_assert_eq!(BlockPadding::Pkcs7.unpad(&padded).unwrap(), data);
    }

    #[test]
    fn unpad_never_panics(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        let _ = BlockPadding::Pkcs7.unpad(&data);
    }
}

#[cfg(feature = "symmetric")]
mod aes_properties {
    use super::*;
    use cryptkit::{Aes, CbcPadding, CipherError};

    fn any_key() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            proptest::collection::vec(any::<u8>(), 16),
            proptest::collection::vec(any::<u8>(), 24),
            proptest::collection::vec(any::<u8>(), 32),
        ]
    }

    fn any_cbc_padding() -> impl Strategy<Value = CbcPadding> {
        prop_oneof![Just(CbcPadding::Pkcs7), Just(CbcPadding::NoPadding)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn aes_roundtrip(
            plaintext in proptest::collection::vec(any::<u8>(), 0..1000),
            key in any_key(),
            iv in proptest::option::of(proptest::array::uniform16(any::<u8>())),
            encoding in any_encoding(),
            cbc_padding in any_cbc_padding(),
        ) {
            let aes = Aes::new().cbc_padding(cbc_padding);
            let iv = iv.as_ref().map(|iv| iv.as_slice());
            let ct = aes.encrypt(&plaintext, &key, iv, BlockPadding::Pkcs7, encoding).unwrap();
            prop_assert_eq!(aes.decrypt(&ct, &key, iv, BlockPadding::Pkcs7, encoding).unwrap(), plaintext);
        }

        #[test]
        fn aes_ciphertext_length(plaintext in proptest::collection::vec(any::<u8>(), 0..200), key in any_key()) {
            let ct = Aes::new()
                .cbc_padding(CbcPadding::NoPadding)
                .encrypt(&plaintext, &key, None, BlockPadding::Pkcs7, Encoding::None)
                .unwrap();
            prop_assert_eq!(ct.len(), (plaintext.len() / BLOCK_SIZE + 1) * BLOCK_SIZE);
        }

        #[test]
        fn aes_rejects_bad_key_lengths(len in 0usize..64, plaintext in proptest::collection::vec(any::<u8>(), 0..32)) {
            prop_assume!(![16, 24, 32].contains(&len));
            let key = vec![0u8; len];
            let result = Aes::new().encrypt(&plaintext, &key, None, BlockPadding::Pkcs7, Encoding::Base64);
            prop_assert!(matches!(result, Err(CipherError::InvalidKeyLength(got)) if got == len));
        }

        #[test]
        fn aes_decrypt_garbage_never_panics(text in proptest::collection::vec(any::<u8>(), 0..96), key in any_key()) {
            match Aes::new().decrypt(&text, &key, None, BlockPadding::Pkcs7, Encoding::None) {
                Ok(_) | Err(CipherError::DecryptionFailed) => {}
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }
        }
    }
}
