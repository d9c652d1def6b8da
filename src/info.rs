use crate::error::TgaError;
use crate::pixel::PixelLayout;
use crate::tga::TgaDataType;

/// Image metadata from a header-only probe.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u8,
    pub data_type: TgaDataType,
    /// Output layout a decode would produce, or `None` for depths this
    /// crate does not decode.
    pub native_layout: Option<PixelLayout>,
}

impl ImageInfo {
    /// Parse and structurally validate the header without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        crate::tga::probe_header(data)
    }
}

pub(crate) fn native_layout(bits_per_pixel: u8) -> Option<PixelLayout> {
    match bits_per_pixel {
        24 => Some(PixelLayout::Bgrx8),
        32 => Some(PixelLayout::Bgra8),
        _ => None,
    }
}
