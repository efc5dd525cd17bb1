//! Listing assets - store listing image generator for PDF Compressor Lite
//!
//! Draws the app icon, feature graphic and screenshot mockups as PNG files.

// Drawing primitives
pub mod canvas;
pub mod font;
pub mod palette;

// Configuration and errors
pub mod config;
pub mod error;

// Asset generators
pub mod generate;

// Re-export commonly used types for convenience
pub use canvas::{BBox, Canvas, ColorMode, TextRun};
pub use config::{AssetConfig, FontPaths, SETTINGS_FILE};
pub use error::{AssetError, Result};
pub use font::{Face, FontBook};
pub use generate::screenshot::ScreenKind;
pub use generate::{SCREENSHOTS, ScreenshotEntry, run_all};
pub use palette::{Color, Palette};
