#![no_main]

use cryptkit::Encoding;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text must never panic
    let _ = Encoding::Hex.decode(data);
    let _ = Encoding::Base64.decode(data);

    if let Ok(decoded) = Encoding::Base64.decode(data) {
        assert_eq!(Encoding::Base64.encode(&decoded), data);
    }
});
