//! End-to-end runs of the full asset set into scratch directories

use std::fs;
use std::path::{Path, PathBuf};

use listing_assets::generate::{self, feature};
use listing_assets::{AssetConfig, FontBook, Palette, SCREENSHOTS, run_all};

fn config_in(dir: &Path) -> AssetConfig {
    AssetConfig::default().with_output_root(dir)
}

fn dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap_or_else(|e| panic!("{} is not a PNG: {}", path.display(), e));
    (img.width(), img.height())
}

#[test]
fn writes_seven_pngs_with_expected_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let written = run_all(&config).unwrap();

    let mut expected: Vec<(PathBuf, (u32, u32))> = vec![
        (config.icon_path(), (512, 512)),
        (config.icon_foreground_path(), (512, 512)),
        (config.feature_graphic_path(), (1024, 500)),
    ];
    for entry in SCREENSHOTS {
        expected.push((config.screenshot_path(entry.filename), (1080, 1920)));
    }

    assert_eq!(written, expected.iter().map(|(p, _)| p.clone()).collect::<Vec<_>>());
    for (path, size) in expected {
        assert!(path.exists(), "missing {}", path.display());
        assert_eq!(dimensions(&path), size, "wrong size for {}", path.display());
    }
}

#[test]
fn icon_is_transparent_outside_disc() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    generate::icon::generate_icon(&config).unwrap();

    let icon = image::open(config.icon_path()).unwrap().to_rgba8();
    let radius = (512.0 - 80.0) / 2.0 + 1.5;
    for (x, y, pixel) in icon.enumerate_pixels() {
        let (dx, dy) = (x as f32 - 256.0, y as f32 - 256.0);
        if (dx * dx + dy * dy).sqrt() > radius {
            assert_eq!(pixel[3], 0, "opaque pixel at ({}, {})", x, y);
        }
    }
}

#[test]
fn feature_graphic_gradient_endpoints() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    run_all(&config).unwrap();

    let palette = Palette::default();
    let banner = image::open(config.feature_graphic_path()).unwrap().to_rgb8();
    let close = |actual: &image::Rgb<u8>, expected: [u8; 3]| {
        (0..3).all(|c| (actual[c] as i32 - expected[c] as i32).abs() <= 1)
    };
    assert!(close(banner.get_pixel(1000, 0), palette.primary));
    assert!(close(banner.get_pixel(1000, 499), palette.dark_blue));
}

#[test]
fn feature_graphic_without_icon_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    assert!(!config.icon_path().exists());

    let fonts = FontBook::load(&config.fonts);
    let path = feature::generate_feature_graphic(&config, &fonts).unwrap();
    assert_eq!(dimensions(&path), (1024, 500));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let first: Vec<(PathBuf, Vec<u8>)> = run_all(&config)
        .unwrap()
        .into_iter()
        .map(|p| {
            let bytes = fs::read(&p).unwrap();
            (p, bytes)
        })
        .collect();

    let second = run_all(&config).unwrap();
    assert_eq!(second.len(), first.len());
    for (path, bytes) in first {
        assert_eq!(fs::read(&path).unwrap(), bytes, "{} changed", path.display());
    }
}

#[test]
fn unwritable_output_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"file").unwrap();

    let config = config_in(&blocker);
    assert!(run_all(&config).is_err());
}
