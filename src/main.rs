//! flipbook entry point.
//!
//! Headless sprite-sheet animation player. Loads a sequence of BMP or PNG
//! frames, plays it on a tick clock and prints which frame is visible at each
//! tick.
//!
//! # Running
//!
//! ```sh
//! flipbook --pattern "assets/run_%02d.png" --frames 8 --ticks-per-frame 4 --end 40
//! flipbook a.png b.png c.png --wrap all --json
//! flipbook --config flipbook.ini
//! ```

use clap::Parser;
use flipbook::animation::{FrameFormat, FrameWrap};
use flipbook::playback;
use flipbook::resources::playerconfig::{PlayerConfig, PlayerOverrides};
use std::path::PathBuf;

/// flipbook: headless frame animation player
#[derive(Parser)]
#[command(
    version,
    about = "Plays a frame animation on a tick clock and prints the visible frame per tick."
)]
struct Cli {
    /// Frame image files, in playback order.
    files: Vec<String>,

    /// INI file to load settings from. Flags override its values.
    #[arg(long, short, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Frame file format: bmp or png.
    #[arg(long)]
    format: Option<FrameFormat>,

    #[arg(long, value_name = "N")]
    ticks_per_frame: Option<u32>,

    /// printf-style file pattern such as "run_%02d.png", numbered from 1.
    #[arg(long)]
    pattern: Option<String>,

    /// Number of frames generated from --pattern.
    #[arg(long, value_name = "N")]
    frames: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Last tick to print, inclusive.
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,

    #[arg(long)]
    step: Option<i64>,

    /// Wrap mode: skip-last or all.
    #[arg(long)]
    wrap: Option<FrameWrap>,

    /// Print the timeline as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(self) -> PlayerOverrides {
        PlayerOverrides {
            format: self.format,
            ticks_per_frame: self.ticks_per_frame,
            pattern: self.pattern,
            frames: self.frames,
            files: self.files,
            wrap: self.wrap,
            start: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let json = cli.json;

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = PlayerConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            config
        }
        None => PlayerConfig::new(),
    };
    config.apply_overrides(cli.overrides());

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let timeline = match playback::play(&config) {
        Ok(timeline) => timeline,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&timeline) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for entry in &timeline {
            println!("{:>8}  {:>4}  {}", entry.tick, entry.frame, entry.file);
        }
    }
}
