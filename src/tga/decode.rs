//! Pixel payload decoding.

use enough::Stop;

use super::cursor::ByteCursor;
use super::header::{TgaDataType, TgaHeader};
use crate::bitmap::{Bitmap, BitmapFormat};
use crate::error::TgaError;
use crate::limits::Limits;
use crate::logging::{trace, warn};

/// Check the parts of a structurally valid header that decide whether this
/// decoder can render it, and pick the destination format.
pub(crate) fn check_decodable(header: &TgaHeader) -> Result<BitmapFormat, TgaError> {
    if header.color_map_type > 1 {
        warn!("TGA color map type {} is invalid", header.color_map_type);
        return Err(TgaError::InvalidColorMapType(header.color_map_type));
    }

    let format = match header.bits_per_pixel {
        24 => BitmapFormat::Bgrx8888,
        32 => BitmapFormat::Bgra8888,
        other => {
            // TODO: 15/16-bit direct color and 8-bit grayscale.
            warn!("TGA depth {other} is not supported");
            return Err(TgaError::UnsupportedBitDepth(other));
        }
    };

    match header.data_type {
        TgaDataType::UncompressedRgb => Ok(format),
        other => {
            warn!("TGA data type {other:?} is not supported");
            Err(TgaError::UnsupportedDataType(other))
        }
    }
}

/// Decode the single frame. `cursor` must sit right after the header.
pub(crate) fn decode_frame(
    header: &TgaHeader,
    cursor: &mut ByteCursor<'_>,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Bitmap, TgaError> {
    let format = check_decodable(header)?;
    let width = u32::from(header.width);
    let height = u32::from(header.height);

    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(width as usize * height as usize * 4)?;
    }
    stop.check()?;

    let mut bitmap = Bitmap::try_create(format, width, height)?;
    cursor.skip(header.preamble_len());

    trace!("decoding {width}x{height} uncompressed TGA at offset {}", cursor.position());
    decode_uncompressed_rgb(header.bits_per_pixel, cursor, &mut bitmap, stop)?;
    trace!("finished TGA frame at offset {}", cursor.position());

    Ok(bitmap)
}

/// Rows in stored order, row 0 first; columns left to right.
fn decode_uncompressed_rgb(
    bits_per_pixel: u8,
    cursor: &mut ByteCursor<'_>,
    bitmap: &mut Bitmap,
    stop: &dyn Stop,
) -> Result<(), TgaError> {
    for row in 0..bitmap.height() {
        if row % 16 == 0 {
            stop.check()?;
        }
        for word in bitmap.scanline_mut(row) {
            *word = cursor.read_pixel(bits_per_pixel).to_word();
        }
    }
    Ok(())
}
