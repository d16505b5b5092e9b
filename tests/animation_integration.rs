//! Animation loading tests against real BMP and PNG files.

use std::path::Path;

use flipbook::animation::{Animation, AnimationError, FrameFormat, FrameWrap};
use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Write `count` 2x2 frames named `<stem>_<n>.<ext>` (n from 1). Frame n has
/// red channel `n * 10`.
fn write_frames(dir: &Path, stem: &str, ext: &str, count: u8) -> Vec<String> {
    (1..=count)
        .map(|n| {
            let path = dir.join(format!("{stem}_{n}.{ext}"));
            RgbImage::from_pixel(2, 2, Rgb([n * 10, 0, 0]))
                .save(&path)
                .unwrap();
            path.to_string_lossy().into_owned()
        })
        .collect()
}

fn red(frame: &image::DynamicImage) -> u8 {
    frame.to_rgb8().get_pixel(0, 0)[0]
}

#[test]
fn png_frames_load_in_file_order() {
    let dir = TempDir::new().unwrap();
    let files = write_frames(dir.path(), "walk", "png", 4);

    let anim = Animation::from_files(FrameFormat::Png, 2, &files).unwrap();

    assert_eq!(anim.frame_count(), 4);
    let reds: Vec<u8> = anim.frames().iter().map(red).collect();
    assert_eq!(reds, vec![10, 20, 30, 40]);
    assert_eq!(anim.source(3), Some(files[3].as_str()));
}

#[test]
fn bmp_frames_load() {
    let dir = TempDir::new().unwrap();
    let files = write_frames(dir.path(), "idle", "bmp", 3);

    let anim = Animation::from_iter_files(FrameFormat::Bmp, 1, files.iter()).unwrap();

    assert_eq!(anim.frame_count(), 3);
    assert_eq!(anim.format(), FrameFormat::Bmp);
    assert_eq!(red(anim.get(2).unwrap()), 30);
}

#[test]
fn pattern_loads_numbered_frames() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), "frame", "png", 3);
    let pattern = dir.path().join("frame_%d.png");

    let anim =
        Animation::from_pattern(FrameFormat::Png, 1, 3, &pattern.to_string_lossy()).unwrap();

    assert_eq!(anim.frame_count(), 3);
    for n in 0..3 {
        assert!(anim.source(n).unwrap().ends_with(&format!("frame_{}.png", n + 1)));
    }
    assert_eq!(red(anim.get(2).unwrap()), 30);
    // tick 2 wraps back to the first frame: (2 / 1) % (3 - 1) == 0
    assert_eq!(red(anim.frame(2)), 10);
    assert_eq!(red(anim.frame(1)), 20);
}

#[test]
fn pattern_with_too_many_frames_fails() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), "frame", "png", 2);
    let pattern = dir.path().join("frame_%d.png");

    let err =
        Animation::from_pattern(FrameFormat::Png, 1, 3, &pattern.to_string_lossy()).unwrap_err();
    match err {
        AnimationError::Decode { filename, .. } => assert!(filename.ends_with("frame_3.png")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_in_list_fails() {
    let dir = TempDir::new().unwrap();
    let mut files = write_frames(dir.path(), "walk", "png", 2);
    files.insert(1, dir.path().join("gone.png").to_string_lossy().into_owned());

    let err = Animation::from_files(FrameFormat::Png, 1, &files).unwrap_err();
    assert!(matches!(
        err,
        AnimationError::Decode { ref filename, .. } if filename.ends_with("gone.png")
    ));
}

#[test]
fn format_is_forced_regardless_of_extension() {
    let dir = TempDir::new().unwrap();
    let files = write_frames(dir.path(), "walk", "png", 1);

    let err = Animation::from_files(FrameFormat::Bmp, 1, &files).unwrap_err();
    assert!(matches!(err, AnimationError::Decode { .. }));
}

#[test]
fn builder_plays_with_wrap_all() {
    let dir = TempDir::new().unwrap();
    let files = write_frames(dir.path(), "spin", "png", 3);

    let mut anim = Animation::builder(FrameFormat::Png, 5)
        .frames(files)
        .wrap(FrameWrap::All)
        .build()
        .unwrap();

    assert_eq!(red(anim.begin(7)), 10);
    assert_eq!(red(anim.frame(7 + 10)), 30);
    assert_eq!(red(anim.frame(7 + 15)), 10);
}

#[test]
fn default_wrap_skips_last_frame() {
    let dir = TempDir::new().unwrap();
    let files = write_frames(dir.path(), "spin", "png", 3);

    let mut anim = Animation::from_files(FrameFormat::Png, 5, &files).unwrap();

    anim.begin(0);
    let reds: Vec<u8> = (0..6).map(|k| red(anim.frame(k * 5))).collect();
    assert_eq!(reds, vec![10, 20, 10, 20, 10, 20]);
}

#[test]
fn destroy_clears_handle() {
    let dir = TempDir::new().unwrap();
    let files = write_frames(dir.path(), "walk", "png", 2);

    let mut handle = Some(Animation::from_files(FrameFormat::Png, 1, &files).unwrap());
    assert_eq!(Animation::destroy(&mut handle), 2);
    assert!(handle.is_none());
}
