//! Forward-only little-endian reader over a byte slice.
//!
//! Reads do not check bounds against the remaining input. Callers validate
//! lengths up front (see `TgaHeader::read`); an out-of-range read panics.

use crate::pixel::Pixel;

pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Bytes left after the current offset.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub(crate) fn rewind(&mut self) {
        self.pos = 0;
    }

    pub(crate) fn skip(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn read_u8(&mut self) -> u8 {
        let b = self.data[self.pos];
        self.pos += 1;
        b
    }

    pub(crate) fn read_i8(&mut self) -> i8 {
        self.read_u8() as i8
    }

    pub(crate) fn read_u16(&mut self) -> u16 {
        let lo = u16::from(self.read_u8());
        let hi = u16::from(self.read_u8());
        lo | hi << 8
    }

    /// Combines two sign-extended bytes, so a negative low byte also sets
    /// every bit of the high byte. This is not `i16::from_le_bytes` for such
    /// inputs; existing files depend on the combination as written.
    pub(crate) fn read_i16(&mut self) -> i16 {
        let lo = i16::from(self.read_i8());
        let hi = i16::from(self.read_i8());
        lo | hi << 8
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn read_u32(&mut self) -> u32 {
        let lo = u32::from(self.read_u16());
        let hi = u32::from(self.read_u16());
        lo | hi << 16
    }

    /// Same limb combination as [`ByteCursor::read_i16`], one level up.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn read_i32(&mut self) -> i32 {
        let lo = i32::from(self.read_i16());
        let hi = i32::from(self.read_i16());
        lo | hi << 16
    }

    /// Read one B, G, R[, A] tuple. 24-bit pixels get an opaque alpha.
    ///
    /// # Panics
    ///
    /// Panics for any depth other than 24 or 32; the decoder rejects those
    /// before reading pixels.
    pub(crate) fn read_pixel(&mut self, bits_per_pixel: u8) -> Pixel {
        let blue = self.read_u8();
        let green = self.read_u8();
        let red = self.read_u8();
        let alpha = match bits_per_pixel {
            24 => 0xFF,
            32 => self.read_u8(),
            other => unreachable!("pixel read at unsupported depth {other}"),
        };
        Pixel::new(blue, green, red, alpha)
    }
}
