//! Error taxonomy for animation construction.
//!
//! Contract violations during playback (asking for a tick before the start
//! tick) are not represented here: they panic, see
//! [`Animation::frame`](super::Animation::frame).

use thiserror::Error;

/// Everything that can make constructing an [`Animation`](super::Animation) fail.
///
/// Construction is all-or-nothing: when one of these is returned, every frame
/// decoded up to that point has already been released.
#[derive(Debug, Error)]
pub enum AnimationError {
    /// Storage for the requested number of frames could not be reserved.
    #[error("failed to allocate storage for {0} frames")]
    AllocationFailure(usize),

    /// The `image` decoder could not open or decode a frame file.
    #[error("failed to decode frame '{filename}': {source}")]
    Decode {
        filename: String,
        #[source]
        source: image::ImageError,
    },

    /// A custom [`FrameDecoder`](super::FrameDecoder) refused a frame file.
    #[error("decoder rejected frame '{filename}': {reason}")]
    DecoderRejected { filename: String, reason: String },

    /// The format tag is not one a decoder knows how to handle.
    #[error("unsupported frame format '{0}'")]
    UnsupportedFormat(String),

    #[error("invalid filename pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("an animation needs at least one frame")]
    NoFrames,

    #[error("ticks per frame must be at least 1")]
    InvalidTicksPerFrame,
}
