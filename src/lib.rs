//! # zentga
//!
//! Truevision TGA (Targa) image decoder.
//!
//! ## Supported Formats
//!
//! - Uncompressed true-color (data type 2), 24-bit BGR and 32-bit BGRA
//!
//! Color-mapped, black-and-white and run-length encoded images are
//! recognized by the header parser and rejected at decode time with
//! [`TgaError::UnsupportedDataType`].
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Color map (palette) resolution
//! - Animation (TGA is single-frame)
//!
//! ## Usage
//!
//! One-shot decode to bytes:
//!
//! ```no_run
//! use zentga::{DecodeRequest, ImageInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {} bpp", info.width, info.height, info.bits_per_pixel);
//!
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), (decoded.width * decoded.height * 4) as usize);
//! # Ok::<(), zentga::TgaError>(())
//! ```
//!
//! Frame-oriented decode, as a plugin host drives it:
//!
//! ```no_run
//! use zentga::{ImageDecoderPlugin, TgaDecoder};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//! let mut decoder = TgaDecoder::new(data);
//! if decoder.sniff() {
//!     let (w, h) = decoder.size()?;
//!     let frame = decoder.frame(0)?;
//!     assert_eq!((frame.image.width(), frame.image.height()), (w, h));
//! }
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod logging;

mod bitmap;
mod error;
mod info;
mod limits;
mod pixel;
mod plugin;

pub mod tga;

mod decode;

// Re-exports
pub use bitmap::{Bitmap, BitmapFormat};
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::TgaError;
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{Pixel, PixelLayout};
pub use plugin::{ImageDecoderPlugin, ImageFrameDescriptor};
pub use tga::{DecoderState, TgaDataType, TgaDecoder, TgaHeader};

/// Decode a TGA file to B, G, R, A/X bytes.
pub fn decode_tga(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    DecodeRequest::new(data).decode(stop)
}
