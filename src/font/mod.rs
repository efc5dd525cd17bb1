//! Font loading with a built-in fallback
//!
//! Outline fonts come from TTF files on disk. If either the bold or the
//! regular face cannot be loaded, both fall back to the built-in bitmap set,
//! so text always renders.

pub mod builtin;

use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::FontPaths;

/// A concrete font at a concrete size
#[derive(Clone)]
pub enum Face {
    Outline { font: Arc<FontVec>, scale: PxScale },
    Builtin { magnify: u32 },
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Outline { scale, .. } => f
                .debug_struct("Outline")
                .field("scale", &(scale.x, scale.y))
                .finish(),
            Face::Builtin { magnify } => {
                f.debug_struct("Builtin").field("magnify", magnify).finish()
            }
        }
    }
}

impl Face {
    /// Outline face where `size` is the em size in pixels
    pub fn outline(font: Arc<FontVec>, size: f32) -> Self {
        let units_per_em = font.units_per_em().unwrap_or(1000.0);
        let scale = PxScale::from(size * font.height_unscaled() / units_per_em);
        Face::Outline { font, scale }
    }

    pub fn builtin(size: f32) -> Self {
        Face::Builtin {
            magnify: builtin::magnification(size),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Face::Builtin { .. })
    }

    /// Draw `text` with its top-left corner at `(x, y)`
    pub fn draw(&self, image: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, text: &str) {
        match self {
            Face::Outline { font, scale } => {
                draw_text_mut(image, color, x, y, *scale, &**font, text)
            }
            Face::Builtin { magnify } => builtin::draw_text(image, color, x, y, *magnify, text),
        }
    }
}

/// Bold and regular outline fonts, or neither
#[derive(Clone, Default)]
pub struct FontBook {
    outline: Option<(Arc<FontVec>, Arc<FontVec>)>,
}

impl FontBook {
    /// Try the configured candidates; any failure selects the built-in set
    pub fn load(paths: &FontPaths) -> Self {
        match (load_first(&paths.bold), load_first(&paths.regular)) {
            (Some(bold), Some(regular)) => Self {
                outline: Some((Arc::new(bold), Arc::new(regular))),
            },
            _ => {
                log::info!("Outline fonts unavailable, using built-in glyphs");
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        Self { outline: None }
    }

    pub fn is_builtin(&self) -> bool {
        self.outline.is_none()
    }

    pub fn bold(&self, size: f32) -> Face {
        match &self.outline {
            Some((bold, _)) => Face::outline(bold.clone(), size),
            None => Face::builtin(size),
        }
    }

    pub fn regular(&self, size: f32) -> Face {
        match &self.outline {
            Some((_, regular)) => Face::outline(regular.clone(), size),
            None => Face::builtin(size),
        }
    }
}

fn load_first(candidates: &[PathBuf]) -> Option<FontVec> {
    candidates.iter().find_map(|path| match load_font(path) {
        Ok(font) => {
            log::debug!("Loaded font {}", path.display());
            Some(font)
        }
        Err(e) => {
            log::debug!("Skipping font {}: {}", path.display(), e);
            None
        }
    })
}

fn load_font(path: &Path) -> Result<FontVec, String> {
    let data = fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec(data).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fonts_fall_back() {
        let paths = FontPaths {
            bold: vec![PathBuf::from("/nonexistent/bold.ttf")],
            regular: vec![PathBuf::from("/nonexistent/regular.ttf")],
        };
        let book = FontBook::load(&paths);
        assert!(book.is_builtin());
        assert!(book.bold(72.0).is_builtin());
        assert!(book.regular(36.0).is_builtin());
    }

    #[test]
    fn test_corrupt_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"not a font").unwrap();
        let paths = FontPaths {
            bold: vec![path.clone()],
            regular: vec![path],
        };
        assert!(FontBook::load(&paths).is_builtin());
    }

    #[test]
    fn test_half_loaded_pair_falls_back() {
        // Whatever the host has for bold, a missing regular face disables both
        let paths = FontPaths {
            bold: FontPaths::default().bold,
            regular: vec![],
        };
        assert!(FontBook::load(&paths).is_builtin());
    }

    #[test]
    fn test_builtin_face_draws() {
        let mut image = RgbaImage::new(100, 40);
        FontBook::builtin()
            .regular(28.0)
            .draw(&mut image, Rgba([0, 0, 0, 255]), 0, 0, "5/5");
        assert!(image.pixels().any(|p| p[3] == 255));
    }
}
