#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn tga_header(width: u16, height: u16, bpp: u8, data_type: u8) -> Vec<u8> {
    let mut h = vec![0u8; 18];
    h[2] = data_type;
    h[12..14].copy_from_slice(&width.to_le_bytes());
    h[14..16].copy_from_slice(&height.to_le_bytes());
    h[16] = bpp;
    h
}

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_plugin"] {
        fs::create_dir_all(dir).unwrap();

        // 24-bit 2x2
        let mut rgb = tga_header(2, 2, 24, 2);
        rgb.extend_from_slice(b"\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80");
        fs::write(format!("{dir}/rgb24_2x2.tga"), rgb).unwrap();

        // 32-bit 1x1 with a 2-byte image ID
        let mut rgba = tga_header(1, 1, 32, 2);
        rgba[0] = 2;
        rgba.extend_from_slice(b"ID\x10\x20\x30\x40");
        fs::write(format!("{dir}/rgba32_id.tga"), rgba).unwrap();

        // RLE header (recognized, not decodable)
        let mut rle = tga_header(1, 1, 24, 10);
        rle.extend_from_slice(&[0x80, 1, 2, 3]);
        fs::write(format!("{dir}/rle24.tga"), rle).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/short_header.bin"), &tga_header(1, 1, 24, 2)[..10]).unwrap();
        fs::write(format!("{dir}/no_payload.tga"), tga_header(4, 4, 32, 2)).unwrap();
    }

    println!("Generated seed corpora in fuzz/corpus/");
}
