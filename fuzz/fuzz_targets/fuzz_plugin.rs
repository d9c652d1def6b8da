#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::{ImageDecoderPlugin, TgaDecoder};

fuzz_target!(|data: &[u8]| {
    // Drive the decoder the way an image host does; a decoded frame must
    // match the advertised size.
    let mut decoder = TgaDecoder::new(data);
    if !decoder.sniff() {
        return;
    }
    let Ok((width, height)) = decoder.size() else {
        panic!("size unavailable after successful sniff");
    };
    if let Ok(frame) = decoder.frame(0) {
        assert_eq!(frame.image.width(), width);
        assert_eq!(frame.image.height(), height);
    }
    decoder.set_volatile();
    let _ = decoder.purge();
    let _ = decoder.set_nonvolatile();
});
