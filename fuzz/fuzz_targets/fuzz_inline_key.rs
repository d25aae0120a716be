#![no_main]

use cryptkit::{Encoding, EncryptionPadding, Rsa};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary inline key text must be rejected cleanly
    if data.ends_with(".pem") {
        return;
    }
    let _ = Rsa::new().public_encrypt(b"x", data, EncryptionPadding::Pkcs1, Encoding::None);
    let _ = Rsa::new().sign(b"x", data, 7, Encoding::None);
});
