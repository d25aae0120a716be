#![no_main]

use cryptkit::BlockPadding;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(stripped) = BlockPadding::Pkcs7.unpad(data) {
        let n = usize::from(data[data.len() - 1]);
        assert_eq!(stripped.len() + n, data.len());
        assert!(data[stripped.len()..].iter().all(|&b| usize::from(b) == n));
    }
});
