#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and one-shot decode must never panic
    let _ = zentga::ImageInfo::from_bytes(data);
    let _ = zentga::decode_tga(data, enough::Unstoppable);
});
