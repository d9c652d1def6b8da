//! Interface exposed to a multi-format image decoding host.

use crate::bitmap::Bitmap;

/// One decoded frame.
#[derive(Clone, Copy, Debug)]
pub struct ImageFrameDescriptor<'a> {
    pub image: &'a Bitmap,
    /// Display duration in milliseconds; 0 for still images.
    pub duration: u32,
}

/// A decoder the host can sniff, size and pull frames from.
///
/// The host calls [`ImageDecoderPlugin::sniff`] first. Size queries are only
/// meaningful after a successful sniff.
pub trait ImageDecoderPlugin {
    type Error;

    /// Whether the input is plausibly in this plugin's format.
    fn sniff(&mut self) -> bool;

    fn size(&self) -> Result<(u32, u32), Self::Error>;

    fn is_animated(&self) -> bool;

    /// Number of times an animation repeats; 0 means forever or not animated.
    fn loop_count(&self) -> usize;

    fn frame_count(&self) -> usize;

    fn frame(&mut self, index: usize) -> Result<ImageFrameDescriptor<'_>, Self::Error>;

    /// Allow the decoded bitmap's memory to be reclaimed under pressure.
    fn set_volatile(&mut self);

    /// Pin the decoded bitmap again. Returns whether its contents were purged.
    fn set_nonvolatile(&mut self) -> Result<bool, Self::Error>;
}
