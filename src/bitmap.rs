//! Destination bitmap written by the decoder.
//!
//! Pixels are stored as packed 32-bit words, one `Vec<u32>` row-major
//! buffer per bitmap. See [`Pixel::to_word`] for the packing.

use alloc::vec::Vec;

use crate::error::TgaError;
use crate::logging::trace;
use crate::pixel::{Pixel, PixelLayout};

/// Pixel format of a [`Bitmap`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitmapFormat {
    /// Opaque: the high byte of each word is not meaningful as alpha.
    Bgrx8888,
    /// Blue, green, red, alpha.
    Bgra8888,
}

impl BitmapFormat {
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Bgra8888)
    }

    /// Byte layout of [`Bitmap::to_bytes`] for this format.
    pub fn layout(self) -> PixelLayout {
        match self {
            Self::Bgrx8888 => PixelLayout::Bgrx8,
            Self::Bgra8888 => PixelLayout::Bgra8,
        }
    }
}

/// An allocated image buffer with memory-pressure controls.
///
/// A bitmap marked volatile may have its pixel memory reclaimed with
/// [`Bitmap::purge`]. [`Bitmap::set_nonvolatile`] restores the backing store
/// and reports whether the contents were lost in between.
#[derive(Clone, Debug)]
pub struct Bitmap {
    format: BitmapFormat,
    width: u32,
    height: u32,
    data: Vec<u32>,
    volatile: bool,
    purged: bool,
}

impl Bitmap {
    /// Allocate a zero-filled bitmap.
    ///
    /// Fails with [`TgaError::DimensionsTooLarge`] when the pixel count
    /// overflows, or [`TgaError::AllocationFailed`] when memory is unavailable.
    pub fn try_create(format: BitmapFormat, width: u32, height: u32) -> Result<Self, TgaError> {
        let data = allocate_words(width, height)?;
        Ok(Self {
            format,
            width,
            height,
            data,
            volatile: false,
            purged: false,
        })
    }

    pub fn format(&self) -> BitmapFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the pixel buffer in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * 4
    }

    /// Packed words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or the bitmap is currently purged.
    pub fn scanline(&self, y: u32) -> &[u32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Mutable packed words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or the bitmap is currently purged.
    pub fn scanline_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.data[start..start + w]
    }

    /// The pixel at column `x` of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`, `y >= height`, or the bitmap is currently purged.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        Pixel::from_word(self.scanline(y)[x as usize])
    }

    /// All packed words, row-major.
    pub fn words(&self) -> &[u32] {
        &self.data
    }

    /// Copy out as bytes in B, G, R, A/X order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    pub fn is_volatile(&self) -> bool {
        self.volatile
    }

    /// Allow the pixel memory to be reclaimed.
    pub fn set_volatile(&mut self) {
        trace!("bitmap {}x{} marked volatile", self.width, self.height);
        self.volatile = true;
    }

    /// Reclaim the pixel memory of a volatile bitmap.
    ///
    /// Returns false, and does nothing, if the bitmap is not volatile.
    pub fn purge(&mut self) -> bool {
        if !self.volatile {
            return false;
        }
        trace!("bitmap {}x{} purged", self.width, self.height);
        self.data = Vec::new();
        self.purged = true;
        true
    }

    /// Pin the pixel memory again.
    ///
    /// Returns `Ok(true)` if the contents were purged while volatile; the
    /// buffer is then zero-filled and must be redrawn by the caller.
    pub fn set_nonvolatile(&mut self) -> Result<bool, TgaError> {
        let was_purged = self.purged;
        if was_purged {
            self.data = allocate_words(self.width, self.height)?;
            self.purged = false;
        }
        self.volatile = false;
        trace!(
            "bitmap {}x{} marked non-volatile (purged: {was_purged})",
            self.width,
            self.height
        );
        Ok(was_purged)
    }

    /// Typed pixel copy.
    #[cfg(feature = "rgb")]
    pub fn to_bgra_pixels(&self) -> Vec<rgb::alt::BGRA8> {
        self.data
            .iter()
            .map(|&w| {
                let px = Pixel::from_word(w);
                rgb::alt::BGRA8 {
                    b: px.blue,
                    g: px.green,
                    r: px.red,
                    a: px.alpha,
                }
            })
            .collect()
    }

    /// Copy into an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::alt::BGRA8> {
        imgref::ImgVec::new(
            self.to_bgra_pixels(),
            self.width as usize,
            self.height as usize,
        )
    }
}

fn allocate_words(width: u32, height: u32) -> Result<Vec<u32>, TgaError> {
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;
    let mut data = Vec::new();
    data.try_reserve_exact(count)
        .map_err(|_| TgaError::AllocationFailed {
            bytes: count.saturating_mul(4),
        })?;
    data.resize(count, 0);
    Ok(data)
}
