//! Asset generation modules
//!
//! Store listing assets, generated in order:
//! - App icon (and its adaptive-icon foreground copy)
//! - Feature graphic, which reuses the icon written above
//! - Five screenshot mockups

pub mod feature;
pub mod icon;
pub mod screenshot;

use std::path::PathBuf;

use crate::config::AssetConfig;
use crate::error::Result;
use crate::font::FontBook;

/// One entry of the screenshot set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotEntry {
    pub filename: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content_type: &'static str,
}

/// The screenshots in the store listing, in upload order
pub const SCREENSHOTS: [ScreenshotEntry; 5] = [
    ScreenshotEntry {
        filename: "home_screen.png",
        title: "PDF Compressor",
        subtitle: "",
        content_type: "home",
    },
    ScreenshotEntry {
        filename: "compression_options.png",
        title: "Choose Quality",
        subtitle: "",
        content_type: "options",
    },
    ScreenshotEntry {
        filename: "progress.png",
        title: "Compressing",
        subtitle: "",
        content_type: "progress",
    },
    ScreenshotEntry {
        filename: "results.png",
        title: "Results",
        subtitle: "",
        content_type: "results",
    },
    ScreenshotEntry {
        filename: "history.png",
        title: "History",
        subtitle: "",
        content_type: "history",
    },
];

/// Screenshot entry for a content type, if it is part of the set
pub fn screenshot_entry(content_type: &str) -> Option<&'static ScreenshotEntry> {
    SCREENSHOTS.iter().find(|e| e.content_type == content_type)
}

pub fn generate_screenshot_entry(
    config: &AssetConfig,
    fonts: &FontBook,
    entry: &ScreenshotEntry,
) -> Result<PathBuf> {
    screenshot::generate_screenshot(
        config,
        fonts,
        entry.filename,
        entry.title,
        entry.subtitle,
        entry.content_type,
    )
}

pub fn generate_screenshots(config: &AssetConfig, fonts: &FontBook) -> Result<Vec<PathBuf>> {
    println!("\nCreating screenshots...");
    SCREENSHOTS
        .iter()
        .map(|entry| generate_screenshot_entry(config, fonts, entry))
        .collect()
}

/// Generate every asset in order and return the written paths
pub fn run_all(config: &AssetConfig) -> Result<Vec<PathBuf>> {
    println!("\n🎨 Generating Assets for PDF Compressor Lite\n");
    println!("{}", "=".repeat(50));

    let fonts = FontBook::load(&config.fonts);

    let mut written = icon::generate_icon(config)?;
    written.push(feature::generate_feature_graphic(config, &fonts)?);
    written.extend(generate_screenshots(config, &fonts)?);

    println!("\n{}", "=".repeat(50));
    println!("\n✅ All assets created successfully!\n");
    println!("Assets location: {}/", config.output_root.display());
    print_next_steps();

    Ok(written)
}

fn print_next_steps() {
    println!(
        r#"
Next steps:
1. Review the generated assets
2. Add flutter_launcher_icons to pubspec.yaml
3. Run: flutter pub run flutter_launcher_icons
4. Test the app icon on a device
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenshot::ScreenKind;

    #[test]
    fn test_screenshot_set_covers_every_layout() {
        let kinds: Vec<ScreenKind> = SCREENSHOTS
            .iter()
            .map(|e| e.content_type.parse().unwrap())
            .collect();
        assert_eq!(kinds, ScreenKind::ALL);
        assert!(SCREENSHOTS.iter().all(|e| e.subtitle.is_empty()));
    }

    #[test]
    fn test_screenshot_entry_lookup() {
        assert_eq!(
            screenshot_entry("options").map(|e| e.filename),
            Some("compression_options.png")
        );
        assert!(screenshot_entry("settings").is_none());
    }
}
