//! Frame decoders.
//!
//! A decoder turns one file name into one owned, in-memory frame. The format
//! tag picks which codec is used; [`ImageDecoder`] forces the `image` crate to
//! read the file as BMP or PNG regardless of its extension.

use std::fmt;
use std::str::FromStr;

use image::{DynamicImage, ImageError, ImageReader};
use serde::{Deserialize, Serialize};

use super::error::AnimationError;

/// On-disk format of every frame of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameFormat {
    /// Windows raster bitmap.
    Bmp,
    Png,
}

impl FrameFormat {
    /// Codec used by the `image` crate for this format.
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            FrameFormat::Bmp => image::ImageFormat::Bmp,
            FrameFormat::Png => image::ImageFormat::Png,
        }
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameFormat::Bmp => f.write_str("bmp"),
            FrameFormat::Png => f.write_str("png"),
        }
    }
}

impl FromStr for FrameFormat {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bmp" | "bitmap" => Ok(FrameFormat::Bmp),
            "png" => Ok(FrameFormat::Png),
            other => Err(AnimationError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Produces owned frames from file names.
///
/// Releasing a frame is dropping it, so implementations only need to hand
/// out owned values.
pub trait FrameDecoder {
    type Frame;

    /// Whether this decoder can handle `format` at all.
    ///
    /// Checked once before any file is touched.
    fn supports(&self, format: FrameFormat) -> bool {
        let _ = format;
        true
    }

    fn decode(&self, format: FrameFormat, filename: &str)
    -> Result<Self::Frame, AnimationError>;
}

/// Default decoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl FrameDecoder for ImageDecoder {
    type Frame = DynamicImage;

    fn decode(&self, format: FrameFormat, filename: &str) -> Result<DynamicImage, AnimationError> {
        let decode_error = |source: ImageError| AnimationError::Decode {
            filename: filename.to_string(),
            source,
        };

        let mut reader =
            ImageReader::open(filename).map_err(|e| decode_error(ImageError::IoError(e)))?;
        reader.set_format(format.image_format());
        reader.decode().map_err(decode_error)
    }
}
