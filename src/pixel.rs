/// One decoded pixel.
///
/// Channels are kept in blue, green, red, alpha order so that
/// [`Pixel::to_word`] yields the same value as reading the four bytes
/// as a little-endian `u32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const fn new(blue: u8, green: u8, red: u8, alpha: u8) -> Self {
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }

    /// Pack into a 32-bit word: blue in the low byte, alpha in the high byte.
    pub const fn to_word(self) -> u32 {
        u32::from_le_bytes([self.blue, self.green, self.red, self.alpha])
    }

    /// Unpack a word produced by [`Pixel::to_word`].
    pub const fn from_word(word: u32) -> Self {
        let [blue, green, red, alpha] = word.to_le_bytes();
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }
}

/// Pixel memory layout of exported byte buffers.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 4 channels, 8-bit BGRA.
    Bgra8,
    /// 4 channels, 8-bit BGRX (opaque; 4th byte is padding, not alpha).
    Bgrx8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgra8 | Self::Bgrx8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Bgra8 | Self::Bgrx8 => 4,
        }
    }

    /// Whether the fourth channel carries alpha.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Bgra8)
    }

    /// Whether this layout has the same memory representation as `other`.
    ///
    /// `Bgra8` and `Bgrx8` are compatible (same 4-byte B,G,R,X/A layout).
    pub fn is_memory_compatible(&self, other: PixelLayout) -> bool {
        if *self == other {
            return true;
        }
        matches!(
            (*self, other),
            (Self::Bgra8, Self::Bgrx8) | (Self::Bgrx8, Self::Bgra8)
        )
    }
}

/// Typed pixels a [`crate::DecodeOutput`] can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy {
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}
