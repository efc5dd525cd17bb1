//! App icon generator
//!
//! A document with a folded corner on a blue disc, with two downward
//! compression arrows below it. Written twice: as the store icon and as the
//! adaptive-icon foreground.

use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::config::AssetConfig;
use crate::error::Result;
use crate::palette::Palette;

pub const ICON_SIZE: u32 = 512;
/// Gap between the canvas edge and the background disc
pub const CIRCLE_MARGIN: i32 = 40;

const DOC_WIDTH: i32 = 180;
const DOC_HEIGHT: i32 = 240;
const DOC_BORDER: u32 = 4;
const FOLD_SIZE: i32 = 40;
const TEXT_LINES: i32 = 4;
const ARROW_OFFSETS: [i32; 2] = [-30, 30];

/// Radius of the background disc
pub fn circle_radius() -> i32 {
    (ICON_SIZE as i32 - 2 * CIRCLE_MARGIN) / 2
}

pub fn draw_icon(palette: &Palette) -> Canvas {
    let size = ICON_SIZE as i32;
    let mut canvas = Canvas::transparent(ICON_SIZE, ICON_SIZE);

    canvas.ellipse(
        [CIRCLE_MARGIN, CIRCLE_MARGIN, size - CIRCLE_MARGIN, size - CIRCLE_MARGIN],
        palette.primary,
    );

    // Document body, nudged up to leave room for the arrows
    let doc_x = (size - DOC_WIDTH) / 2;
    let doc_y = (size - DOC_HEIGHT) / 2 - 20;
    canvas.bordered_rect(
        [doc_x, doc_y, doc_x + DOC_WIDTH, doc_y + DOC_HEIGHT],
        palette.white,
        palette.dark_gray,
        DOC_BORDER,
    );

    // Folded top-right corner
    let fold = [
        (doc_x + DOC_WIDTH - FOLD_SIZE, doc_y),
        (doc_x + DOC_WIDTH, doc_y + FOLD_SIZE),
        (doc_x + DOC_WIDTH, doc_y),
    ];
    canvas.polygon(&fold, palette.light_gray);
    canvas.line(fold[0], fold[1], palette.dark_gray, DOC_BORDER);

    // Placeholder text lines
    let line_x = doc_x + 25;
    let line_width = DOC_WIDTH - 50;
    for i in 0..TEXT_LINES {
        let line_y = doc_y + 60 + i * 25;
        canvas.rect(
            [line_x, line_y, line_x + line_width, line_y + 8],
            palette.light_gray,
        );
    }

    let arrow_y = doc_y + DOC_HEIGHT + 30;
    let arrow_x = size / 2;
    for offset in ARROW_OFFSETS {
        let cx = arrow_x + offset;
        canvas.rect([cx - 8, arrow_y, cx + 8, arrow_y + 50], palette.accent);
        canvas.polygon(
            &[
                (cx - 25, arrow_y + 50),
                (cx, arrow_y + 75),
                (cx + 25, arrow_y + 50),
            ],
            palette.accent,
        );
    }

    canvas
}

/// Draw the icon and write it to both icon paths
pub fn generate_icon(config: &AssetConfig) -> Result<Vec<PathBuf>> {
    let canvas = draw_icon(&config.palette);

    let icon_path = config.icon_path();
    canvas.save(&icon_path)?;
    println!("✓ App icon created ({}x{})", ICON_SIZE, ICON_SIZE);

    let foreground_path = config.icon_foreground_path();
    canvas.save(&foreground_path)?;
    println!("✓ App icon foreground created");

    Ok(vec![icon_path, foreground_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::opaque;

    #[test]
    fn test_transparent_outside_disc() {
        let canvas = draw_icon(&Palette::default());
        let center = ICON_SIZE as f32 / 2.0;
        // One pixel of slack for the rasterizer's rounding
        let limit = circle_radius() as f32 + 1.5;
        for (x, y, pixel) in canvas.image().enumerate_pixels() {
            let (dx, dy) = (x as f32 - center, y as f32 - center);
            if (dx * dx + dy * dy).sqrt() > limit {
                assert_eq!(pixel[3], 0, "opaque pixel at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_disc_and_document_colors() {
        let palette = Palette::default();
        let canvas = draw_icon(&palette);
        // Disc left of the document
        assert_eq!(canvas.pixel(100, 256), opaque(palette.primary));
        // Document interior between placeholder lines
        assert_eq!(canvas.pixel(200, 150), opaque(palette.white));
        // Document border
        assert_eq!(canvas.pixel(166, 200), opaque(palette.dark_gray));
        // First placeholder line at doc_y + 60
        assert_eq!(canvas.pixel(220, 180), opaque(palette.light_gray));
    }

    #[test]
    fn test_arrows_straddle_center() {
        let palette = Palette::default();
        let canvas = draw_icon(&palette);
        // Shafts at x = 226 and 286, starting at y = 386
        assert_eq!(canvas.pixel(226, 400), opaque(palette.accent));
        assert_eq!(canvas.pixel(286, 400), opaque(palette.accent));
        // Gap between the shafts shows the disc
        assert_eq!(canvas.pixel(256, 400), opaque(palette.primary));
        // Arrow heads widen past the shafts
        assert_eq!(canvas.pixel(210, 440), opaque(palette.accent));
    }

    #[test]
    fn test_writes_both_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetConfig::default().with_output_root(dir.path());
        let paths = generate_icon(&config).unwrap();
        assert_eq!(paths, vec![config.icon_path(), config.icon_foreground_path()]);
        let a = std::fs::read(&paths[0]).unwrap();
        let b = std::fs::read(&paths[1]).unwrap();
        assert_eq!(a, b);
    }
}
