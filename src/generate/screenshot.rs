//! Screenshot mockup generator (1080x1920 phone screens)
//!
//! Every screen shares the status bar, app bar and title. The content-type
//! key then selects one of five fixed layouts. An unknown key draws only the
//! shared chrome.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::canvas::Canvas;
use crate::config::AssetConfig;
use crate::error::Result;
use crate::font::{Face, FontBook};
use crate::palette::Palette;

pub const SCREEN_WIDTH: u32 = 1080;
pub const SCREEN_HEIGHT: u32 = 1920;

const W: i32 = SCREEN_WIDTH as i32;
const CENTER_X: i32 = W / 2;

const STATUS_BAR_BOTTOM: i32 = 80;
const APP_BAR_BOTTOM: i32 = 230;
const TITLE_POS: (i32, i32) = (60, 140);
/// Top of the area below the app bar where layouts start
pub const CONTENT_Y: i32 = 280;

const TITLE_SIZE: f32 = 48.0;
const BODY_SIZE: f32 = 36.0;
const SMALL_SIZE: f32 = 28.0;

pub const OPTION_CARD_HEIGHT: i32 = 240;
pub const OPTION_CARD_GAP: i32 = 40;
pub const COMPRESSION_LEVELS: [(&str, &str, &str); 3] = [
    ("Low", "Minimal compression", "~30%"),
    ("Medium", "Balanced quality", "~50%"),
    ("High", "Maximum compression", "~70%"),
];

pub const HISTORY_ROWS: i32 = 4;
pub const HISTORY_ROW_HEIGHT: i32 = 180;
pub const HISTORY_ROW_GAP: i32 = 30;

const PROGRESS_BAR_WIDTH: i32 = 800;
const PROGRESS_BAR_HEIGHT: i32 = 60;
const PROGRESS_FRACTION: f64 = 0.65;

/// Which mockup layout to draw below the app bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Home,
    Options,
    Progress,
    Results,
    History,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 5] = [
        ScreenKind::Home,
        ScreenKind::Options,
        ScreenKind::Progress,
        ScreenKind::Results,
        ScreenKind::History,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenKind::Home => "home",
            ScreenKind::Options => "options",
            ScreenKind::Progress => "progress",
            ScreenKind::Results => "results",
            ScreenKind::History => "history",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ScreenKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown screen type '{}'", s))
    }
}

/// Faces shared by every screen layout
struct ScreenFaces {
    title: Face,
    body: Face,
    small: Face,
}

impl ScreenFaces {
    fn new(fonts: &FontBook) -> Self {
        Self {
            title: fonts.bold(TITLE_SIZE),
            body: fonts.regular(BODY_SIZE),
            small: fonts.regular(SMALL_SIZE),
        }
    }
}

/// Draw one mockup. `_subtitle` is accepted for call-site symmetry and is not rendered.
pub fn draw_screenshot(
    palette: &Palette,
    fonts: &FontBook,
    title: &str,
    _subtitle: &str,
    content_type: &str,
) -> Canvas {
    let mut canvas = Canvas::rgb(SCREEN_WIDTH, SCREEN_HEIGHT, palette.white);
    let faces = ScreenFaces::new(fonts);

    canvas.rect([0, 0, W, STATUS_BAR_BOTTOM], palette.primary);
    canvas.rect([0, STATUS_BAR_BOTTOM, W, APP_BAR_BOTTOM], palette.primary);
    canvas.text(TITLE_POS.0, TITLE_POS.1, title, palette.white, &faces.title);

    match content_type.parse::<ScreenKind>() {
        Ok(ScreenKind::Home) => draw_home(&mut canvas, palette, &faces),
        Ok(ScreenKind::Options) => draw_options(&mut canvas, palette, &faces),
        Ok(ScreenKind::Progress) => draw_progress(&mut canvas, palette, &faces),
        Ok(ScreenKind::Results) => draw_results(&mut canvas, palette, &faces),
        Ok(ScreenKind::History) => draw_history(&mut canvas, palette, &faces),
        Err(e) => log::warn!("{}, drawing header only", e),
    }

    canvas
}

fn draw_home(canvas: &mut Canvas, palette: &Palette, faces: &ScreenFaces) {
    // Free compressions counter
    let counter_y = CONTENT_Y + 80;
    canvas.bordered_rect(
        [140, counter_y, W - 140, counter_y + 200],
        palette.light_gray,
        palette.primary,
        4,
    );
    canvas.text(CENTER_X - 150, counter_y + 50, "Free Compressions", palette.text, &faces.body);
    canvas.text(CENTER_X - 50, counter_y + 110, "5/5", palette.primary, &faces.title);

    let button_y = counter_y + 280;
    canvas.rect([140, button_y, W - 140, button_y + 140], palette.primary);
    canvas.text(CENTER_X - 130, button_y + 48, "Select PDF File", palette.white, &faces.body);

    let info_y = button_y + 200;
    canvas.text(
        CENTER_X - 280,
        info_y,
        "Compress PDFs quickly and securely",
        palette.dark_gray,
        &faces.small,
    );
    canvas.text(
        CENTER_X - 200,
        info_y + 50,
        "All processing done on device",
        palette.dark_gray,
        &faces.small,
    );
}

/// Top edge of option card `index`
pub fn option_card_y(index: i32) -> i32 {
    CONTENT_Y + 60 + index * (OPTION_CARD_HEIGHT + OPTION_CARD_GAP)
}

fn draw_options(canvas: &mut Canvas, palette: &Palette, faces: &ScreenFaces) {
    for (i, (level, desc, percent)) in COMPRESSION_LEVELS.iter().enumerate() {
        let y = option_card_y(i as i32);
        canvas.bordered_rect(
            [80, y, W - 80, y + OPTION_CARD_HEIGHT],
            palette.light_gray,
            palette.primary,
            3,
        );
        canvas.text(120, y + 40, level, palette.primary, &faces.title);
        canvas.text(120, y + 110, desc, palette.text, &faces.body);
        canvas.text(
            120,
            y + 165,
            &format!("Size reduction: {}", percent),
            palette.dark_gray,
            &faces.small,
        );
    }
}

fn draw_progress(canvas: &mut Canvas, palette: &Palette, faces: &ScreenFaces) {
    let progress_y = CONTENT_Y + 200;
    canvas.text(
        CENTER_X - 180,
        progress_y - 100,
        "Compressing PDF...",
        palette.text,
        &faces.title,
    );

    let bar_x = (W - PROGRESS_BAR_WIDTH) / 2;
    canvas.bordered_rect(
        [bar_x, progress_y, bar_x + PROGRESS_BAR_WIDTH, progress_y + PROGRESS_BAR_HEIGHT],
        palette.light_gray,
        palette.dark_gray,
        3,
    );
    let fill_width = (PROGRESS_BAR_WIDTH as f64 * PROGRESS_FRACTION) as i32;
    canvas.rect(
        [bar_x, progress_y, bar_x + fill_width, progress_y + PROGRESS_BAR_HEIGHT],
        palette.primary,
    );

    canvas.text(CENTER_X - 60, progress_y + 120, "65%", palette.primary, &faces.title);
    canvas.text(
        CENTER_X - 180,
        progress_y + 240,
        "Processing on your device",
        palette.dark_gray,
        &faces.small,
    );
}

fn draw_results(canvas: &mut Canvas, palette: &Palette, faces: &ScreenFaces) {
    let card_y = CONTENT_Y + 100;
    let card_height = 600;
    canvas.bordered_rect(
        [80, card_y, W - 80, card_y + card_height],
        palette.light_gray,
        palette.primary,
        4,
    );

    canvas.text(
        CENTER_X - 220,
        card_y + 50,
        "✓ Compression Complete!",
        palette.primary,
        &faces.title,
    );

    let value_x = W - 300;
    canvas.text(140, card_y + 160, "Original Size:", palette.text, &faces.body);
    canvas.text(value_x, card_y + 160, "5.2 MB", palette.text, &faces.body);

    canvas.text(140, card_y + 250, "Compressed Size:", palette.text, &faces.body);
    canvas.text(value_x, card_y + 250, "1.8 MB", palette.primary, &faces.body);

    canvas.text(140, card_y + 340, "Space Saved:", palette.text, &faces.body);
    canvas.text(value_x, card_y + 340, "65%", palette.accent, &faces.title);

    let button_y = card_y + 470;
    canvas.rect([140, button_y, W - 140, button_y + 100], palette.primary);
    canvas.text(CENTER_X - 100, button_y + 30, "Share PDF", palette.white, &faces.body);
}

/// Top edge of history row `index`
pub fn history_row_y(index: i32) -> i32 {
    CONTENT_Y + 60 + index * (HISTORY_ROW_HEIGHT + HISTORY_ROW_GAP)
}

fn draw_history(canvas: &mut Canvas, palette: &Palette, faces: &ScreenFaces) {
    for i in 0..HISTORY_ROWS {
        let y = history_row_y(i);
        canvas.rect([80, y, W - 80, y + HISTORY_ROW_HEIGHT], palette.light_gray);
        canvas.text(
            120,
            y + 30,
            &format!("document_{}.pdf", i + 1),
            palette.text,
            &faces.body,
        );
        canvas.text(
            120,
            y + 85,
            "3.5 MB → 1.2 MB (66% saved)",
            palette.dark_gray,
            &faces.small,
        );
        canvas.text(
            120,
            y + 130,
            &format!("Feb {}, 2026", 8 - i),
            palette.dark_gray,
            &faces.small,
        );
    }
}

/// Draw one mockup and write it into the screenshot directory
pub fn generate_screenshot(
    config: &AssetConfig,
    fonts: &FontBook,
    filename: &str,
    title: &str,
    subtitle: &str,
    content_type: &str,
) -> Result<PathBuf> {
    let canvas = draw_screenshot(&config.palette, fonts, title, subtitle, content_type);
    let path = config.screenshot_path(filename);
    canvas.save(&path)?;
    println!("✓ Screenshot created: {}", filename);
    Ok(path)
}
