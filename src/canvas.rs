//! Drawing surface for the asset generators
//!
//! A thin layer over `RgbaImage` with the primitives the layouts are written
//! in: inclusive bounding boxes for rectangles and ellipses, inward outlines,
//! stroked lines, and text runs. Every text run is also recorded so layouts
//! can be checked without inspecting glyph pixels.

use image::buffer::ConvertBuffer;
use image::{ImageFormat, RgbImage, Rgba, RgbaImage, imageops};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use std::fs;
use std::path::Path;

use crate::error::{AssetError, Result};
use crate::font::Face;
use crate::palette::{Color, opaque};

/// Inclusive pixel bounding box `[x0, y0, x1, y1]`
pub type BBox = [i32; 4];

/// Channel layout of the encoded PNG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

/// A text run as drawn, in draw order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Color,
}

pub struct Canvas {
    image: RgbaImage,
    mode: ColorMode,
    text_runs: Vec<TextRun>,
}

impl Canvas {
    /// Opaque canvas filled with `background`
    pub fn rgb(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, opaque(background)),
            mode: ColorMode::Rgb,
            text_runs: Vec::new(),
        }
    }

    /// Fully transparent canvas
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 0])),
            mode: ColorMode::Rgba,
            text_runs: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    /// Filled rectangle
    pub fn rect(&mut self, bbox: BBox, fill: Color) {
        fill_bbox(&mut self.image, bbox, opaque(fill));
    }

    /// Filled rectangle with an outline `width` pixels wide, drawn inside the box
    pub fn bordered_rect(&mut self, bbox: BBox, fill: Color, outline: Color, width: u32) {
        let [x0, y0, x1, y1] = bbox;
        let w = width as i32;
        let stroke = opaque(outline);
        fill_bbox(&mut self.image, bbox, opaque(fill));
        if w <= 0 {
            return;
        }
        fill_bbox(&mut self.image, [x0, y0, x1, y0 + w - 1], stroke);
        fill_bbox(&mut self.image, [x0, y1 - w + 1, x1, y1], stroke);
        fill_bbox(&mut self.image, [x0, y0, x0 + w - 1, y1], stroke);
        fill_bbox(&mut self.image, [x1 - w + 1, y0, x1, y1], stroke);
    }

    /// Filled ellipse inscribed in `bbox`
    pub fn ellipse(&mut self, bbox: BBox, fill: Color) {
        fill_ellipse(&mut self.image, bbox, opaque(fill));
    }

    /// Filled polygon; needs at least three distinct points
    pub fn polygon(&mut self, points: &[(i32, i32)], fill: Color) {
        fill_polygon(&mut self.image, points, opaque(fill));
    }

    /// Line segment stroked `width` pixels wide
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Color, width: u32) {
        let pixel = opaque(color);
        if width <= 1 {
            draw_line_segment_mut(
                &mut self.image,
                (from.0 as f32, from.1 as f32),
                (to.0 as f32, to.1 as f32),
                pixel,
            );
            return;
        }

        let (dx, dy) = ((to.0 - from.0) as f32, (to.1 - from.1) as f32);
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            return;
        }
        let half = width as f32 / 2.0;
        let (nx, ny) = (-dy / len * half, dx / len * half);
        let corner = |p: (i32, i32), sign: f32| {
            (
                (p.0 as f32 + nx * sign).round() as i32,
                (p.1 as f32 + ny * sign).round() as i32,
            )
        };
        let quad = [
            corner(from, 1.0),
            corner(to, 1.0),
            corner(to, -1.0),
            corner(from, -1.0),
        ];
        fill_polygon(&mut self.image, &quad, pixel);
    }

    /// Text with its top-left corner at `(x, y)`
    pub fn text(&mut self, x: i32, y: i32, text: &str, color: Color, face: &Face) {
        face.draw(&mut self.image, opaque(color), x, y, text);
        self.text_runs.push(TextRun {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    /// Alpha-composite `top` with its top-left corner at `(x, y)`
    pub fn overlay(&mut self, top: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.image, top, x, y);
    }

    /// Encode as PNG, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| AssetError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let result = match self.mode {
            ColorMode::Rgb => {
                let rgb: RgbImage = self.image.convert();
                rgb.save_with_format(path, ImageFormat::Png)
            }
            ColorMode::Rgba => self.image.save_with_format(path, ImageFormat::Png),
        };
        result.map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Filled inclusive box on any RGBA buffer
pub fn fill_bbox(image: &mut RgbaImage, bbox: BBox, color: Rgba<u8>) {
    let [x0, y0, x1, y1] = bbox;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(image, rect, color);
}

/// Filled ellipse inscribed in an inclusive box on any RGBA buffer
pub fn fill_ellipse(image: &mut RgbaImage, bbox: BBox, color: Rgba<u8>) {
    let [x0, y0, x1, y1] = bbox;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    draw_filled_ellipse_mut(image, center, (x1 - x0) / 2, (y1 - y0) / 2, color);
}

fn fill_polygon(image: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    let mut poly: Vec<Point<i32>> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    // The fill routine rejects an explicitly closed ring
    if poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        return;
    }
    draw_polygon_mut(image, &poly, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontBook;
    use crate::palette::{DARK_GRAY, LIGHT_GRAY, PRIMARY, WHITE};

    #[test]
    fn test_rect_is_inclusive() {
        let mut canvas = Canvas::rgb(10, 10, WHITE);
        canvas.rect([2, 2, 4, 4], PRIMARY);
        assert_eq!(canvas.pixel(2, 2), opaque(PRIMARY));
        assert_eq!(canvas.pixel(4, 4), opaque(PRIMARY));
        assert_eq!(canvas.pixel(5, 4), opaque(WHITE));
        assert_eq!(canvas.pixel(1, 2), opaque(WHITE));
    }

    #[test]
    fn test_rect_clips_to_canvas() {
        let mut canvas = Canvas::rgb(10, 10, WHITE);
        canvas.rect([0, 0, 10, 3], PRIMARY);
        assert_eq!(canvas.pixel(9, 3), opaque(PRIMARY));
        assert_eq!(canvas.pixel(9, 4), opaque(WHITE));
    }

    #[test]
    fn test_bordered_rect_outline_inside() {
        let mut canvas = Canvas::rgb(20, 20, WHITE);
        canvas.bordered_rect([2, 2, 17, 17], LIGHT_GRAY, PRIMARY, 3);
        assert_eq!(canvas.pixel(2, 10), opaque(PRIMARY));
        assert_eq!(canvas.pixel(4, 10), opaque(PRIMARY));
        assert_eq!(canvas.pixel(5, 10), opaque(LIGHT_GRAY));
        assert_eq!(canvas.pixel(17, 17), opaque(PRIMARY));
        assert_eq!(canvas.pixel(1, 10), opaque(WHITE));
    }

    #[test]
    fn test_ellipse_stays_in_box() {
        let mut canvas = Canvas::transparent(40, 40);
        canvas.ellipse([10, 10, 30, 30], PRIMARY);
        assert_eq!(canvas.pixel(20, 20), opaque(PRIMARY));
        assert_eq!(canvas.pixel(10, 10)[3], 0);
        assert_eq!(canvas.pixel(5, 20)[3], 0);
        assert_eq!(canvas.pixel(35, 20)[3], 0);
    }

    #[test]
    fn test_polygon_accepts_closed_ring() {
        let mut canvas = Canvas::rgb(20, 20, WHITE);
        canvas.polygon(&[(2, 2), (17, 2), (2, 17), (2, 2)], DARK_GRAY);
        assert_eq!(canvas.pixel(4, 4), opaque(DARK_GRAY));
        assert_eq!(canvas.pixel(16, 16), opaque(WHITE));
    }

    #[test]
    fn test_polygon_degenerate_ignored() {
        let mut canvas = Canvas::rgb(5, 5, WHITE);
        canvas.polygon(&[(1, 1), (3, 3)], DARK_GRAY);
        assert!(canvas.image().pixels().all(|p| *p == opaque(WHITE)));
    }

    #[test]
    fn test_thick_line_covers_width() {
        let mut canvas = Canvas::rgb(30, 30, WHITE);
        canvas.line((5, 15), (25, 15), DARK_GRAY, 4);
        assert_eq!(canvas.pixel(15, 14), opaque(DARK_GRAY));
        assert_eq!(canvas.pixel(15, 16), opaque(DARK_GRAY));
        assert_eq!(canvas.pixel(15, 5), opaque(WHITE));
    }

    #[test]
    fn test_text_runs_recorded_in_order() {
        let mut canvas = Canvas::rgb(200, 100, WHITE);
        let face = FontBook::builtin().regular(12.0);
        canvas.text(1, 2, "first", DARK_GRAY, &face);
        canvas.text(3, 40, "second", PRIMARY, &face);
        let texts: Vec<&str> = canvas.text_runs().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(canvas.text_runs()[1].y, 40);
    }

    #[test]
    fn test_overlay_blends_alpha() {
        let mut canvas = Canvas::rgb(4, 4, WHITE);
        let mut top = RgbaImage::new(2, 2);
        top.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        canvas.overlay(&top, 1, 1);
        assert_eq!(canvas.pixel(1, 1), Rgba([0, 0, 0, 255]));
        // Transparent source pixels leave the canvas untouched
        assert_eq!(canvas.pixel(2, 2), opaque(WHITE));
    }

    #[test]
    fn test_save_modes() {
        let dir = tempfile::tempdir().unwrap();

        let rgb_path = dir.path().join("nested/rgb.png");
        Canvas::rgb(3, 2, PRIMARY).save(&rgb_path).unwrap();
        let decoded = image::open(&rgb_path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (3, 2));

        let rgba_path = dir.path().join("rgba.png");
        Canvas::transparent(2, 3).save(&rgba_path).unwrap();
        assert_eq!(image::open(&rgba_path).unwrap().color(), image::ColorType::Rgba8);
    }

    #[test]
    fn test_save_into_file_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let err = Canvas::rgb(1, 1, WHITE)
            .save(&blocker.join("out.png"))
            .unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
