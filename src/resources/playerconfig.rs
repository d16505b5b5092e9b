//! Player configuration resource.
//!
//! Describes which animation to load and which ticks to play, loaded from an
//! INI file. Defaults give a safe start; missing keys keep their current
//! values.
//!
//! # Configuration File Format
//!
//! ```ini
//! [animation]
//! format = png
//! ticks_per_frame = 4
//! pattern = assets/run_%02d.png
//! frames = 8
//! ; or instead of pattern/frames:
//! ; files = a.png, b.png, c.png
//! wrap = skip-last
//!
//! [playback]
//! start = 0
//! end = 64
//! step = 1
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::animation::{FrameFormat, FrameWrap};

const DEFAULT_FORMAT: FrameFormat = FrameFormat::Png;
const DEFAULT_TICKS_PER_FRAME: u32 = 1;
const DEFAULT_START: i64 = 0;
const DEFAULT_END: i64 = 10;
const DEFAULT_STEP: i64 = 1;
const DEFAULT_CONFIG_PATH: &str = "./flipbook.ini";

/// Values given on the command line, layered over a loaded [`PlayerConfig`].
///
/// `None` and an empty `files` leave the loaded value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerOverrides {
    pub format: Option<FrameFormat>,
    pub ticks_per_frame: Option<u32>,
    pub pattern: Option<String>,
    pub frames: Option<u32>,
    /// Explicit frame files. When given, they replace any pattern.
    pub files: Vec<String>,
    pub wrap: Option<FrameWrap>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub step: Option<i64>,
}

/// Player configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub format: FrameFormat,
    pub ticks_per_frame: u32,
    /// printf-style frame file pattern. Takes precedence over `files`.
    pub pattern: Option<String>,
    /// Number of frames generated from `pattern`.
    pub frames: u32,
    /// Explicit frame files, in playback order.
    pub files: Vec<String>,
    pub wrap: FrameWrap,
    /// First tick printed.
    pub start: i64,
    /// Last tick printed, inclusive.
    pub end: i64,
    pub step: i64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            format: DEFAULT_FORMAT,
            ticks_per_frame: DEFAULT_TICKS_PER_FRAME,
            pattern: None,
            frames: 0,
            files: Vec::new(),
            wrap: FrameWrap::default(),
            start: DEFAULT_START,
            end: DEFAULT_END,
            step: DEFAULT_STEP,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Returns an error if the file cannot be read or holds invalid values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)?;
        info!(
            "Loaded config from {:?}: {} x{}, ticks {}..={} step {}",
            self.config_path, self.format, self.ticks_per_frame, self.start, self.end, self.step
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [animation] section
        if let Some(format) = config.get("animation", "format") {
            self.format = format.parse::<FrameFormat>().map_err(|e| e.to_string())?;
        }
        if let Some(ticks) = config.getuint("animation", "ticks_per_frame")? {
            self.ticks_per_frame = u32::try_from(ticks)
                .map_err(|_| format!("ticks_per_frame {} is too large", ticks))?;
        }
        if let Some(pattern) = config.get("animation", "pattern") {
            self.pattern = Some(pattern);
        }
        if let Some(frames) = config.getuint("animation", "frames")? {
            self.frames = u32::try_from(frames)
                .map_err(|_| format!("frames {} is too large", frames))?;
        }
        if let Some(files) = config.get("animation", "files") {
            self.files = files
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(wrap) = config.get("animation", "wrap") {
            self.wrap = wrap.parse::<FrameWrap>()?;
        }

        // [playback] section
        if let Some(start) = config.getint("playback", "start")? {
            self.start = start;
        }
        if let Some(end) = config.getint("playback", "end")? {
            self.end = end;
        }
        if let Some(step) = config.getint("playback", "step")? {
            self.step = step;
        }

        self.validate()
    }

    /// Layer `overrides` over the current values.
    pub fn apply_overrides(&mut self, overrides: PlayerOverrides) {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(ticks) = overrides.ticks_per_frame {
            self.ticks_per_frame = ticks;
        }
        if let Some(pattern) = overrides.pattern {
            self.pattern = Some(pattern);
        }
        if let Some(frames) = overrides.frames {
            self.frames = frames;
        }
        if !overrides.files.is_empty() {
            self.files = overrides.files;
            self.pattern = None;
        }
        if let Some(start) = overrides.start {
            self.start = start;
        }
        if let Some(end) = overrides.end {
            self.end = end;
        }
        if let Some(step) = overrides.step {
            self.step = step;
        }
        if let Some(wrap) = overrides.wrap {
            self.wrap = wrap;
        }
    }

    /// Check values a config file or command line could get wrong.
    pub fn validate(&self) -> Result<(), String> {
        if self.step <= 0 {
            return Err(format!("playback step must be positive, got {}", self.step));
        }
        if self.ticks_per_frame == 0 {
            return Err("ticks_per_frame must be at least 1".to_string());
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [animation] section
        config.set("animation", "format", Some(self.format.to_string()));
        config.set(
            "animation",
            "ticks_per_frame",
            Some(self.ticks_per_frame.to_string()),
        );
        if let Some(pattern) = &self.pattern {
            config.set("animation", "pattern", Some(pattern.clone()));
            config.set("animation", "frames", Some(self.frames.to_string()));
        }
        if !self.files.is_empty() {
            config.set("animation", "files", Some(self.files.join(", ")));
        }
        config.set("animation", "wrap", Some(self.wrap.to_string()));

        // [playback] section
        config.set("playback", "start", Some(self.start.to_string()));
        config.set("playback", "end", Some(self.end.to_string()));
        config.set("playback", "step", Some(self.step.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Ticks the player visits, from `start` to `end` inclusive.
    pub fn ticks(&self) -> impl Iterator<Item = i64> {
        let step = self.step.max(1) as usize;
        (self.start..=self.end).step_by(step)
    }
}
