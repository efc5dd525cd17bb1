//! Feature graphic generator (1024x500 store banner)
//!
//! Vertical blue gradient, the app icon on a white disc at the left, and the
//! title, tagline and savings line to its right. The icon is read back from
//! disk; if it is missing or unreadable the banner is drawn without it.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::canvas::{Canvas, fill_ellipse};
use crate::config::AssetConfig;
use crate::error::Result;
use crate::font::FontBook;
use crate::palette::{Palette, lerp_truncated, opaque};

pub const FEATURE_WIDTH: u32 = 1024;
pub const FEATURE_HEIGHT: u32 = 500;

const ICON_DISPLAY_SIZE: u32 = 200;
const ICON_X: i64 = 80;
const ICON_BACKING_PAD: u32 = 10;
const TEXT_X: i32 = 320;

const TITLE_SIZE: f32 = 72.0;
const TAGLINE_SIZE: f32 = 36.0;

pub const TITLE: &str = "PDF Compressor Lite";
pub const TAGLINE: &str = "Compress PDFs in Seconds";
pub const SAVINGS_LINE: &str = "📄 → 📦  Save up to 90% space!";

/// Open the previously generated icon, if it can be decoded
pub fn load_icon(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(icon) => Some(icon.to_rgba8()),
        Err(e) => {
            log::debug!("Skipping icon overlay ({}): {}", path.display(), e);
            None
        }
    }
}

pub fn draw_feature_graphic(palette: &Palette, fonts: &FontBook, icon: Option<&RgbaImage>) -> Canvas {
    let mut canvas = Canvas::rgb(FEATURE_WIDTH, FEATURE_HEIGHT, palette.primary);

    for row in 0..FEATURE_HEIGHT {
        let t = row as f64 / FEATURE_HEIGHT as f64;
        let color = lerp_truncated(palette.primary, palette.dark_blue, t);
        let y = row as i32;
        canvas.rect([0, y, FEATURE_WIDTH as i32 - 1, y], color);
    }

    if let Some(icon) = icon {
        let icon_y = ((FEATURE_HEIGHT - ICON_DISPLAY_SIZE) / 2) as i64;
        let resized = imageops::resize(icon, ICON_DISPLAY_SIZE, ICON_DISPLAY_SIZE, FilterType::Lanczos3);

        let backing_size = ICON_DISPLAY_SIZE + 2 * ICON_BACKING_PAD;
        let mut backing = RgbaImage::from_pixel(backing_size, backing_size, Rgba([255, 255, 255, 0]));
        let edge = backing_size as i32;
        fill_ellipse(&mut backing, [0, 0, edge, edge], opaque(palette.white));

        let pad = ICON_BACKING_PAD as i64;
        canvas.overlay(&backing, ICON_X - pad, icon_y - pad);
        canvas.overlay(&resized, ICON_X, icon_y);
    }

    let title_face = fonts.bold(TITLE_SIZE);
    let body_face = fonts.regular(TAGLINE_SIZE);
    canvas.text(TEXT_X, 140, TITLE, palette.white, &title_face);
    canvas.text(TEXT_X, 250, TAGLINE, palette.accent, &body_face);
    canvas.text(TEXT_X, 340, SAVINGS_LINE, palette.white, &body_face);

    canvas
}

/// Draw the banner (reusing the icon on disk when available) and write it
pub fn generate_feature_graphic(config: &AssetConfig, fonts: &FontBook) -> Result<PathBuf> {
    let icon = load_icon(&config.icon_path());
    let canvas = draw_feature_graphic(&config.palette, fonts, icon.as_ref());

    let path = config.feature_graphic_path();
    canvas.save(&path)?;
    println!("✓ Feature graphic created ({}x{})", FEATURE_WIDTH, FEATURE_HEIGHT);
    Ok(path)
}
