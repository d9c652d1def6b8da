//! Truevision TGA decoder.
//!
//! [`TgaDecoder`] is the stateful, frame-oriented decoder. It moves through
//! three states: [`DecoderState::Unparsed`], [`DecoderState::HeaderParsed`]
//! after a successful probe, and [`DecoderState::FrameDecoded`] once the
//! bitmap has been filled. A failed header parse leaves it `Unparsed`.
//!
//! Only uncompressed true-color images at 24 or 32 bits per pixel decode.
//! Other variants are recognized by the header parser and rejected with a
//! descriptive error when a frame is requested.

mod cursor;
mod decode;
mod header;

pub use header::{HEADER_LEN, TgaDataType, TgaHeader};

use enough::{Stop, Unstoppable};

use self::cursor::ByteCursor;
use crate::bitmap::Bitmap;
use crate::decode::DecodeOutput;
use crate::error::TgaError;
use crate::info::{ImageInfo, native_layout};
use crate::limits::Limits;
use crate::logging::trace;
use crate::plugin::{ImageDecoderPlugin, ImageFrameDescriptor};

/// Lifecycle position of a [`TgaDecoder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecoderState {
    Unparsed,
    HeaderParsed,
    FrameDecoded,
}

/// Decoder over one TGA file held in memory.
///
/// The input is borrowed for the decoder's lifetime and never modified, so
/// several decoders may share one buffer. A single decoder is not meant for
/// concurrent use.
pub struct TgaDecoder<'a> {
    cursor: ByteCursor<'a>,
    header: Option<TgaHeader>,
    bitmap: Option<Bitmap>,
    limits: Option<Limits>,
    state: DecoderState,
}

impl<'a> TgaDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            header: None,
            bitmap: None,
            limits: None,
            state: DecoderState::Unparsed,
        }
    }

    /// Create a decoder that refuses frames exceeding `limits`.
    pub fn with_limits(data: &'a [u8], limits: Limits) -> Self {
        Self {
            limits: Some(limits),
            ..Self::new(data)
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// The whole input buffer.
    pub fn data(&self) -> &'a [u8] {
        self.cursor.data()
    }

    /// Parse and structurally validate the header, starting from offset 0.
    ///
    /// Calling this again re-reads the same bytes and yields the same header.
    pub fn parse_header(&mut self) -> Result<&TgaHeader, TgaError> {
        self.cursor.rewind();
        self.header = None;
        self.bitmap = None;
        self.state = DecoderState::Unparsed;

        let header = TgaHeader::read(&mut self.cursor)?;
        self.state = DecoderState::HeaderParsed;
        Ok(self.header.insert(header))
    }

    /// Whether the buffer looks like a TGA file this crate can read the
    /// header of. Stores the parsed header as a side effect.
    pub fn probe(&mut self) -> bool {
        self.parse_header().is_ok()
    }

    /// The parsed header, if [`TgaDecoder::probe`] or
    /// [`TgaDecoder::parse_header`] has succeeded.
    pub fn header(&self) -> Option<&TgaHeader> {
        self.header.as_ref()
    }

    /// Image width and height. Requires a parsed header.
    pub fn dimensions(&self) -> Result<(u32, u32), TgaError> {
        let header = self.header.as_ref().ok_or(TgaError::HeaderNotParsed)?;
        Ok((u32::from(header.width), u32::from(header.height)))
    }

    /// Decode frame `index` (only 0 exists), checking `stop` between rows.
    ///
    /// The header is parsed first if that has not happened yet. Calling this
    /// again decodes the payload again into a fresh bitmap.
    pub fn decode_frame(&mut self, index: usize, stop: &dyn Stop) -> Result<&Bitmap, TgaError> {
        if index != 0 {
            return Err(TgaError::FrameIndexOutOfRange(index));
        }
        let header = match self.header {
            Some(header) => header,
            None => *self.parse_header()?,
        };

        self.cursor.rewind();
        self.cursor.skip(HEADER_LEN);
        self.bitmap = None;
        self.state = DecoderState::HeaderParsed;

        let bitmap = decode::decode_frame(&header, &mut self.cursor, self.limits.as_ref(), stop)?;
        self.state = DecoderState::FrameDecoded;
        Ok(self.bitmap.insert(bitmap))
    }

    /// The decoded bitmap, once a frame has been decoded.
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    /// Give up the decoder and keep its bitmap.
    pub fn into_bitmap(self) -> Option<Bitmap> {
        self.bitmap
    }

    /// Mark the bitmap's memory as reclaimable. No-op before a frame exists.
    pub fn set_volatile(&mut self) {
        if let Some(bitmap) = self.bitmap.as_mut() {
            bitmap.set_volatile();
        }
    }

    /// Pin the bitmap's memory again and report whether it was purged.
    /// Returns `Ok(false)` when no bitmap has been allocated.
    pub fn set_nonvolatile(&mut self) -> Result<bool, TgaError> {
        match self.bitmap.as_mut() {
            Some(bitmap) => bitmap.set_nonvolatile(),
            None => Ok(false),
        }
    }

    /// Reclaim the bitmap's memory if it is volatile. Returns whether
    /// anything was released.
    pub fn purge(&mut self) -> bool {
        self.bitmap.as_mut().is_some_and(Bitmap::purge)
    }
}

impl ImageDecoderPlugin for TgaDecoder<'_> {
    type Error = TgaError;

    fn sniff(&mut self) -> bool {
        self.probe()
    }

    fn size(&self) -> Result<(u32, u32), TgaError> {
        self.dimensions()
    }

    fn is_animated(&self) -> bool {
        false
    }

    fn loop_count(&self) -> usize {
        0
    }

    fn frame_count(&self) -> usize {
        1
    }

    fn frame(&mut self, index: usize) -> Result<ImageFrameDescriptor<'_>, TgaError> {
        trace!("TGA frame {index} requested");
        let image = self.decode_frame(index, &Unstoppable)?;
        Ok(ImageFrameDescriptor { image, duration: 0 })
    }

    fn set_volatile(&mut self) {
        TgaDecoder::set_volatile(self);
    }

    fn set_nonvolatile(&mut self) -> Result<bool, TgaError> {
        TgaDecoder::set_nonvolatile(self)
    }
}

/// Header-only probe.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, TgaError> {
    let mut cursor = ByteCursor::new(data);
    let header = TgaHeader::read(&mut cursor)?;
    Ok(ImageInfo {
        width: u32::from(header.width),
        height: u32::from(header.height),
        bits_per_pixel: header.bits_per_pixel,
        data_type: header.data_type,
        native_layout: native_layout(header.bits_per_pixel),
    })
}

/// Decode the single frame to bytes (called from DecodeRequest).
pub(crate) fn decode_to_output(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    let mut decoder = match limits {
        Some(limits) => TgaDecoder::with_limits(data, limits.clone()),
        None => TgaDecoder::new(data),
    };
    let bitmap = decoder.decode_frame(0, stop)?;
    Ok(DecodeOutput::from_bitmap(bitmap))
}
