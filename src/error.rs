use alloc::string::String;
use enough::StopReason;

use crate::tga::TgaDataType;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    /// Input is shorter than the fixed 18-byte header.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Fewer payload bytes remain than the header's dimensions and depth require.
    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    /// Bits per pixel outside the structurally meaningful range 8..=32.
    #[error("invalid bits per pixel: {0}")]
    InvalidBitDepth(u8),

    #[error("invalid color map type: {0}")]
    InvalidColorMapType(u8),

    #[error("unsupported bits per pixel: {0} (only 24 and 32 are decodable)")]
    UnsupportedBitDepth(u8),

    #[error("unsupported data type: {0:?} (only uncompressed RGB is decodable)")]
    UnsupportedDataType(TgaDataType),

    #[error("frame index {0} out of range (TGA has a single frame)")]
    FrameIndexOutOfRange(usize),

    #[error("header has not been parsed")]
    HeaderNotParsed,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("failed to allocate {bytes} bytes for bitmap")]
    AllocationFailed { bytes: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl TgaError {
    /// Whether this error means the buffer is not a structurally valid TGA file,
    /// as opposed to a recognized file this decoder cannot render.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TgaError::UnexpectedEof
                | TgaError::Truncated { .. }
                | TgaError::InvalidBitDepth(_)
                | TgaError::DimensionsTooLarge { .. }
        )
    }
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
