//! TGA file header: 18 bytes, little-endian, unpadded.

use super::cursor::ByteCursor;
use crate::error::TgaError;
use crate::logging::debug;

/// Size of the fixed header record.
pub const HEADER_LEN: usize = 18;

/// Pixel encoding scheme (header byte 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TgaDataType {
    None,
    UncompressedColorMapped,
    UncompressedRgb,
    UncompressedBlackAndWhite,
    RunLengthEncodedColorMapped,
    RunLengthEncodedRgb,
    CompressedBlackAndWhite,
    CompressedColorMapped,
    CompressedColorMappedFourPass,
    /// A code outside the Truevision table.
    Unknown(u8),
}

impl TgaDataType {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Self::None,
            1 => Self::UncompressedColorMapped,
            2 => Self::UncompressedRgb,
            3 => Self::UncompressedBlackAndWhite,
            9 => Self::RunLengthEncodedColorMapped,
            10 => Self::RunLengthEncodedRgb,
            11 => Self::CompressedBlackAndWhite,
            32 => Self::CompressedColorMapped,
            33 => Self::CompressedColorMappedFourPass,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::UncompressedColorMapped => 1,
            Self::UncompressedRgb => 2,
            Self::UncompressedBlackAndWhite => 3,
            Self::RunLengthEncodedColorMapped => 9,
            Self::RunLengthEncodedRgb => 10,
            Self::CompressedBlackAndWhite => 11,
            Self::CompressedColorMapped => 32,
            Self::CompressedColorMappedFourPass => 33,
            Self::Unknown(code) => code,
        }
    }
}

/// Parsed TGA header.
///
/// Fields are in on-disk order. The signed fields go through
/// the cursor's limb-combining signed reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub data_type: TgaDataType,
    pub color_map_origin: i16,
    pub color_map_length: i16,
    pub color_map_depth: u8,
    pub x_origin: i16,
    pub y_origin: i16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Read the header at the cursor and validate it against the bytes that
    /// follow.
    ///
    /// Only structural problems are reported here: a short buffer, a payload
    /// too small for the declared dimensions, or a depth outside 8..=32.
    /// Color map type and data type are checked when a frame is decoded.
    pub(crate) fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TgaError> {
        if cursor.remaining() < HEADER_LEN {
            debug!("rejecting TGA: {} bytes is shorter than header", cursor.remaining());
            return Err(TgaError::UnexpectedEof);
        }

        let header = Self {
            id_length: cursor.read_u8(),
            color_map_type: cursor.read_u8(),
            data_type: TgaDataType::from_u8(cursor.read_u8()),
            color_map_origin: cursor.read_i16(),
            color_map_length: cursor.read_i16(),
            color_map_depth: cursor.read_u8(),
            x_origin: cursor.read_i16(),
            y_origin: cursor.read_i16(),
            width: cursor.read_u16(),
            height: cursor.read_u16(),
            bits_per_pixel: cursor.read_u8(),
            image_descriptor: cursor.read_u8(),
        };

        let bytes_remaining = cursor.data().len() - cursor.position();
        let needed = header.required_trailing_bytes()?;
        if bytes_remaining < needed {
            debug!("rejecting TGA: need {needed} bytes after header, have {bytes_remaining}");
            return Err(TgaError::Truncated {
                needed,
                actual: bytes_remaining,
            });
        }

        if !(8..=32).contains(&header.bits_per_pixel) {
            debug!("rejecting TGA: {} bits per pixel", header.bits_per_pixel);
            return Err(TgaError::InvalidBitDepth(header.bits_per_pixel));
        }

        debug!(
            "TGA header: {}x{} {} bpp, {:?}, color map type {}",
            header.width,
            header.height,
            header.bits_per_pixel,
            header.data_type,
            header.color_map_type
        );
        Ok(header)
    }

    /// Whole bytes per pixel, rounded down.
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel / 8)
    }

    /// Alpha channel bits declared in the image descriptor (bits 0-3).
    pub fn alpha_bits(&self) -> u8 {
        self.image_descriptor & 0x0F
    }

    /// Whether the descriptor declares the first stored row as the top row
    /// (bit 5). Decoding writes rows in stored order regardless.
    pub fn is_top_down(&self) -> bool {
        self.image_descriptor & 0x20 != 0
    }

    /// Bytes between the end of the header and the first pixel: the image ID
    /// block, plus the color map table when one is present.
    pub fn preamble_len(&self) -> usize {
        let mut len = usize::from(self.id_length);
        if self.color_map_type == 1 {
            let entries = usize::try_from(self.color_map_length).unwrap_or(0);
            len += entries * usize::from(self.color_map_depth).div_ceil(8);
        }
        len
    }

    /// Pixel payload size in bytes.
    pub fn payload_len(&self) -> Result<usize, TgaError> {
        usize::from(self.width)
            .checked_mul(usize::from(self.height))
            .and_then(|wh| wh.checked_mul(self.bytes_per_pixel()))
            .ok_or(TgaError::DimensionsTooLarge {
                width: u32::from(self.width),
                height: u32::from(self.height),
            })
    }

    fn required_trailing_bytes(&self) -> Result<usize, TgaError> {
        self.payload_len()?
            .checked_add(self.preamble_len())
            .ok_or(TgaError::DimensionsTooLarge {
                width: u32::from(self.width),
                height: u32::from(self.height),
            })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn header_bytes(width: u16, height: u16, bpp: u8) -> Vec<u8> {
        let mut h = alloc::vec![0u8; HEADER_LEN];
        h[2] = 2;
        h[12..14].copy_from_slice(&width.to_le_bytes());
        h[14..16].copy_from_slice(&height.to_le_bytes());
        h[16] = bpp;
        h
    }

    #[test]
    fn fields_in_order() {
        let data = [
            3, 1, 10, // id, map type, data type
            0x05, 0x00, 0x10, 0x00, 24, // map origin, length, depth
            0x02, 0x00, 0x04, 0x00, // x, y origin
            0x01, 0x02, 0x02, 0x00, // width 0x0201, height 2
            8, 0x28, // bpp, descriptor
        ];
        let mut bytes = data.to_vec();
        bytes.resize(HEADER_LEN + 3 + 16 * 3 + 0x0201 * 2, 0);
        let mut c = ByteCursor::new(&bytes);
        let h = TgaHeader::read(&mut c).unwrap();
        assert_eq!(h.id_length, 3);
        assert_eq!(h.color_map_type, 1);
        assert_eq!(h.data_type, TgaDataType::RunLengthEncodedRgb);
        assert_eq!(h.color_map_origin, 5);
        assert_eq!(h.color_map_length, 16);
        assert_eq!(h.color_map_depth, 24);
        assert_eq!(h.x_origin, 2);
        assert_eq!(h.y_origin, 4);
        assert_eq!(h.width, 513);
        assert_eq!(h.height, 2);
        assert_eq!(h.bits_per_pixel, 8);
        assert_eq!(h.alpha_bits(), 8);
        assert!(h.is_top_down());
        assert_eq!(h.preamble_len(), 3 + 48);
        assert_eq!(c.position(), HEADER_LEN);
    }

    #[test]
    fn short_buffer_is_eof() {
        let bytes = header_bytes(1, 1, 24);
        let mut c = ByteCursor::new(&bytes[..17]);
        match TgaHeader::read(&mut c) {
            Err(TgaError::UnexpectedEof) => {}
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn truncated_payload() {
        let mut bytes = header_bytes(2, 2, 24);
        bytes.resize(HEADER_LEN + 11, 0);
        let mut c = ByteCursor::new(&bytes);
        match TgaHeader::read(&mut c) {
            Err(TgaError::Truncated { needed: 12, actual: 11 }) => {}
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn depth_outside_range() {
        let bytes = header_bytes(4, 4, 4);
        let mut c = ByteCursor::new(&bytes);
        match TgaHeader::read(&mut c) {
            Err(TgaError::InvalidBitDepth(4)) => {}
            other => panic!("expected InvalidBitDepth, got {other:?}"),
        }

        let mut bytes = header_bytes(1, 1, 40);
        bytes.resize(HEADER_LEN + 5, 0);
        let mut c = ByteCursor::new(&bytes);
        assert!(matches!(
            TgaHeader::read(&mut c),
            Err(TgaError::InvalidBitDepth(40))
        ));
    }

    #[test]
    fn id_block_counts_toward_required_bytes() {
        let mut bytes = header_bytes(1, 1, 24);
        bytes[0] = 4;
        bytes.resize(HEADER_LEN + 6, 0);
        let mut c = ByteCursor::new(&bytes);
        assert!(matches!(
            TgaHeader::read(&mut c),
            Err(TgaError::Truncated { needed: 7, actual: 6 })
        ));
    }

    #[test]
    fn data_type_codes() {
        for code in [0u8, 1, 2, 3, 9, 10, 11, 32, 33, 77] {
            assert_eq!(TgaDataType::from_u8(code).code(), code);
        }
        assert_eq!(TgaDataType::from_u8(77), TgaDataType::Unknown(77));
    }
}
