//! Frame-sequence animations.
//!
//! An [`Animation`] owns an ordered, non-empty list of decoded frames and maps
//! an integer tick to the frame that should be visible at that tick. Frames
//! are produced by a [`FrameDecoder`]; the default [`ImageDecoder`] reads BMP
//! and PNG files through the `image` crate.
//!
//! # Construction
//!
//! - [`Animation::from_files`] – explicit list of file names
//! - [`Animation::from_iter_files`] / [`AnimationBuilder`] – file names collected
//!   from any iterator or added one at a time
//! - [`Animation::from_pattern`] – printf-style pattern such as `run_%02d.png`,
//!   expanded with frame numbers starting at 1
//!
//! Each has a `_with` variant taking an explicit decoder. Construction is
//! all-or-nothing: if one frame fails to decode, the frames decoded before it
//! are released and the error is returned.
//!
//! # Timing
//!
//! ```rust,ignore
//! let mut anim = Animation::from_pattern(FrameFormat::Png, 4, 8, "run_%d.png")?;
//! let first = anim.begin(now);
//! let current = anim.frame(now + 10); // frame index (10 / 4) % 7 == 2
//! ```
//!
//! With the default [`FrameWrap::SkipLast`] the sequence wraps after
//! `frame_count - 1` frames, so the last frame is never shown. Use
//! [`FrameWrap::All`] for a loop over every frame.

mod decoder;
mod error;
mod pattern;

use std::fmt;
use std::str::FromStr;

use image::DynamicImage;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub use decoder::{FrameDecoder, FrameFormat, ImageDecoder};
pub use error::AnimationError;
pub use pattern::{FilenamePattern, MAX_FILENAME_LEN};

/// How the frame index wraps around once the sequence is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameWrap {
    /// Wrap after `frame_count - 1` frames. The final frame is never selected
    /// unless it is the only one.
    #[default]
    SkipLast,
    /// Cycle through every frame.
    All,
}

impl FrameWrap {
    /// Number of distinct frame indices visited in one cycle.
    fn span(self, frame_count: usize) -> usize {
        match self {
            FrameWrap::SkipLast => frame_count.saturating_sub(1).max(1),
            FrameWrap::All => frame_count.max(1),
        }
    }
}

impl fmt::Display for FrameWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameWrap::SkipLast => f.write_str("skip-last"),
            FrameWrap::All => f.write_str("all"),
        }
    }
}

impl FromStr for FrameWrap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip-last" | "skip_last" => Ok(FrameWrap::SkipLast),
            "all" => Ok(FrameWrap::All),
            other => Err(format!(
                "unknown wrap mode '{}', expected 'skip-last' or 'all'",
                other
            )),
        }
    }
}

/// An ordered sequence of decoded frames plus its playback clock.
#[derive(Debug, Clone)]
pub struct Animation<F = DynamicImage> {
    frames: Vec<F>,
    sources: Vec<String>,
    ticks_per_frame: u32,
    start_tick: i64,
    format: FrameFormat,
    wrap: FrameWrap,
}

impl Animation<DynamicImage> {
    /// Decode `filenames` in order with the [`ImageDecoder`].
    pub fn from_files<S: AsRef<str>>(
        format: FrameFormat,
        ticks_per_frame: u32,
        filenames: &[S],
    ) -> Result<Self, AnimationError> {
        Self::from_files_with(&ImageDecoder, format, ticks_per_frame, filenames)
    }

    /// Collect file names from an iterator, then decode them in order.
    pub fn from_iter_files<I>(
        format: FrameFormat,
        ticks_per_frame: u32,
        filenames: I,
    ) -> Result<Self, AnimationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_iter_files_with(&ImageDecoder, format, ticks_per_frame, filenames)
    }

    /// Expand `pattern` for frames `1..=num_frames` and decode the results.
    pub fn from_pattern(
        format: FrameFormat,
        ticks_per_frame: u32,
        num_frames: u32,
        pattern: &str,
    ) -> Result<Self, AnimationError> {
        Self::from_pattern_with(&ImageDecoder, format, ticks_per_frame, num_frames, pattern)
    }

    pub fn builder(format: FrameFormat, ticks_per_frame: u32) -> AnimationBuilder {
        AnimationBuilder::new(format, ticks_per_frame)
    }
}

impl<F> Animation<F> {
    /// Decode `filenames` in order with `decoder`.
    ///
    /// Fails without touching any file if the decoder does not support
    /// `format`, if `ticks_per_frame` is zero, or if `filenames` is empty.
    /// If a frame fails to decode, every frame decoded before it is dropped
    /// before the error is returned.
    pub fn from_files_with<D, S>(
        decoder: &D,
        format: FrameFormat,
        ticks_per_frame: u32,
        filenames: &[S],
    ) -> Result<Self, AnimationError>
    where
        D: FrameDecoder<Frame = F>,
        S: AsRef<str>,
    {
        validate(decoder, format, ticks_per_frame)?;
        if filenames.is_empty() {
            return Err(AnimationError::NoFrames);
        }

        let count = filenames.len();
        let mut frames = Vec::new();
        let mut sources = Vec::new();
        frames
            .try_reserve_exact(count)
            .and_then(|_| sources.try_reserve_exact(count))
            .map_err(|_| AnimationError::AllocationFailure(count))?;

        for (index, filename) in filenames.iter().enumerate() {
            let filename = filename.as_ref();
            match decoder.decode(format, filename) {
                Ok(frame) => {
                    debug!("Decoded frame {}/{}: {}", index + 1, count, filename);
                    frames.push(frame);
                    sources.push(filename.to_string());
                }
                Err(e) => {
                    warn!(
                        "Failed to decode frame {}/{}, releasing {} decoded frames: {}",
                        index + 1,
                        count,
                        frames.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!(
            "Loaded {} animation: {} frames, {} ticks per frame",
            format, count, ticks_per_frame
        );

        Ok(Self {
            frames,
            sources,
            ticks_per_frame,
            start_tick: 0,
            format,
            wrap: FrameWrap::default(),
        })
    }

    /// Collect file names from an iterator into a temporary list and decode
    /// them with `decoder`.
    pub fn from_iter_files_with<D, I>(
        decoder: &D,
        format: FrameFormat,
        ticks_per_frame: u32,
        filenames: I,
    ) -> Result<Self, AnimationError>
    where
        D: FrameDecoder<Frame = F>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let filenames: Vec<I::Item> = filenames.into_iter().collect();
        Self::from_files_with(decoder, format, ticks_per_frame, &filenames)
    }

    /// Expand `pattern` for frames `1..=num_frames` and decode the results
    /// with `decoder`.
    pub fn from_pattern_with<D>(
        decoder: &D,
        format: FrameFormat,
        ticks_per_frame: u32,
        num_frames: u32,
        pattern: &str,
    ) -> Result<Self, AnimationError>
    where
        D: FrameDecoder<Frame = F>,
    {
        validate(decoder, format, ticks_per_frame)?;
        if num_frames == 0 {
            return Err(AnimationError::NoFrames);
        }
        let filenames = FilenamePattern::parse(pattern)?.expand(num_frames)?;
        Self::from_files_with(decoder, format, ticks_per_frame, &filenames)
    }

    /// Release `handle`'s animation and leave `None` behind.
    ///
    /// Returns the number of frames released; `0` when the handle was
    /// already empty.
    pub fn destroy(handle: &mut Option<Self>) -> usize {
        let Some(animation) = handle.take() else {
            return 0;
        };
        let released = animation.frames.len();
        drop(animation);
        debug!("Released animation with {} frames", released);
        released
    }

    pub fn with_wrap(mut self, wrap: FrameWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Start playback at `tick` and return the frame visible at that tick.
    pub fn begin(&mut self, tick: i64) -> &F {
        self.start_tick = tick;
        self.frame(tick)
    }

    /// Frame visible at `tick`.
    ///
    /// # Panics
    ///
    /// Panics if `tick` is earlier than the start tick.
    pub fn frame(&self, tick: i64) -> &F {
        &self.frames[self.frame_index(tick)]
    }

    /// Like [`frame`](Self::frame), but `None` for a tick before the start tick.
    pub fn checked_frame(&self, tick: i64) -> Option<&F> {
        self.checked_index_since(self.start_tick, tick)
            .map(|index| &self.frames[index])
    }

    /// Index of the frame visible at `tick`.
    ///
    /// # Panics
    ///
    /// Panics if `tick` is earlier than the start tick.
    pub fn frame_index(&self, tick: i64) -> usize {
        self.index_since(self.start_tick, tick)
    }

    /// Index of the frame visible at `tick` for playback that began at
    /// `start`, ignoring this animation's own start tick.
    ///
    /// # Panics
    ///
    /// Panics if `tick < start`.
    pub fn index_since(&self, start: i64, tick: i64) -> usize {
        assert!(
            tick >= start,
            "tick {} is earlier than the animation start tick {}",
            tick,
            start
        );
        self.wrapped_index(tick.abs_diff(start))
    }

    pub fn checked_index_since(&self, start: i64, tick: i64) -> Option<usize> {
        (tick >= start).then(|| self.wrapped_index(tick.abs_diff(start)))
    }

    fn wrapped_index(&self, elapsed_ticks: u64) -> usize {
        let elapsed_frames = elapsed_ticks / u64::from(self.ticks_per_frame);
        let span = self.wrap.span(self.frames.len()) as u64;
        (elapsed_frames % span) as usize
    }

    /// Ticks until the selected frame index repeats.
    pub fn cycle_ticks(&self) -> u64 {
        self.wrap.span(self.frames.len()) as u64 * u64::from(self.ticks_per_frame)
    }

    #[inline]
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }

    /// File name frame `index` was decoded from.
    #[inline]
    pub fn source(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(|s| s.as_str())
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    #[inline]
    pub fn start_tick(&self) -> i64 {
        self.start_tick
    }

    #[inline]
    pub fn format(&self) -> FrameFormat {
        self.format
    }

    #[inline]
    pub fn wrap(&self) -> FrameWrap {
        self.wrap
    }
}

fn validate<D: FrameDecoder>(
    decoder: &D,
    format: FrameFormat,
    ticks_per_frame: u32,
) -> Result<(), AnimationError> {
    if !decoder.supports(format) {
        return Err(AnimationError::UnsupportedFormat(format.to_string()));
    }
    if ticks_per_frame == 0 {
        return Err(AnimationError::InvalidTicksPerFrame);
    }
    Ok(())
}

/// Collects frame file names one at a time before building an [`Animation`].
#[derive(Debug, Clone)]
pub struct AnimationBuilder {
    format: FrameFormat,
    ticks_per_frame: u32,
    wrap: FrameWrap,
    filenames: Vec<String>,
}

impl AnimationBuilder {
    pub fn new(format: FrameFormat, ticks_per_frame: u32) -> Self {
        Self {
            format,
            ticks_per_frame,
            wrap: FrameWrap::default(),
            filenames: Vec::new(),
        }
    }

    pub fn frame(mut self, filename: impl Into<String>) -> Self {
        self.filenames.push(filename.into());
        self
    }

    pub fn frames<I>(mut self, filenames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.filenames.extend(filenames.into_iter().map(Into::into));
        self
    }

    pub fn wrap(mut self, wrap: FrameWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn build(self) -> Result<Animation, AnimationError> {
        self.build_with(&ImageDecoder)
    }

    pub fn build_with<D: FrameDecoder>(
        self,
        decoder: &D,
    ) -> Result<Animation<D::Frame>, AnimationError> {
        Animation::from_files_with(decoder, self.format, self.ticks_per_frame, &self.filenames)
            .map(|animation| animation.with_wrap(self.wrap))
    }
}
