//! Color palette shared by every generated asset
//!
//! The default palette is the "Professional Blue" scheme of the store listing.
//! A settings file may override individual entries (see `config`).

use image::Rgba;
use serde::{Deserialize, Serialize};

/// RGB color (0-255 per channel)
pub type Color = [u8; 3];

pub const PRIMARY: Color = [33, 150, 243]; // #2196F3
pub const DARK_BLUE: Color = [25, 118, 210]; // #1976D2
pub const ACCENT: Color = [255, 193, 7]; // #FFC107
pub const WHITE: Color = [255, 255, 255];
pub const LIGHT_GRAY: Color = [240, 240, 240];
pub const DARK_GRAY: Color = [60, 60, 60];
pub const TEXT: Color = [33, 33, 33];

/// Named colors used across the icon, feature graphic and screenshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: Color,
    pub dark_blue: Color,
    pub accent: Color,
    pub white: Color,
    pub light_gray: Color,
    pub dark_gray: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: PRIMARY,
            dark_blue: DARK_BLUE,
            accent: ACCENT,
            white: WHITE,
            light_gray: LIGHT_GRAY,
            dark_gray: DARK_GRAY,
            text: TEXT,
        }
    }
}

/// Opaque RGBA pixel for a palette color
pub fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

/// Linear blend from `from` to `to`, truncating each channel toward zero.
///
/// `t` is expected in `[0, 1)`; the gradient rows never reach `t = 1`.
pub fn lerp_truncated(from: Color, to: Color, t: f64) -> Color {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
    [
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ]
}
