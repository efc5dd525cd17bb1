//! Listing asset generator
//!
//! With no arguments, writes every asset under `assets/`.
//!
//! Usage:
//!   cargo run                          # Icon, feature graphic, all screenshots
//!   cargo run -- icon                  # App icon + foreground only
//!   cargo run -- feature               # Feature graphic (reuses icon if present)
//!   cargo run -- screenshots           # All five screenshot mockups
//!   cargo run -- screenshot options    # One screenshot by content type
//!   cargo run -- --out-dir build/assets
//!   cargo run -- --settings my_settings.toml

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use listing_assets::generate::{self, feature, icon};
use listing_assets::{AssetConfig, FontBook, ScreenKind};

#[derive(Parser, Debug)]
#[command(about = "Generate store listing images for PDF Compressor Lite", version)]
struct Args {
    /// TOML settings file (default: config/asset_settings.toml if present)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Root directory for generated assets
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every asset, in order (default)
    All,
    /// App icon and adaptive-icon foreground
    Icon,
    /// Feature graphic
    Feature,
    /// All screenshot mockups
    Screenshots,
    /// One screenshot mockup
    Screenshot {
        /// home, options, progress, results or history
        content_type: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.settings {
        Some(path) => AssetConfig::from_file(path)
            .with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => AssetConfig::from_config_files(),
    };
    if let Some(dir) = args.out_dir {
        config = config.with_output_root(dir);
    }
    log::debug!("Using configuration: {:?}", config);

    match args.command.unwrap_or(Command::All) {
        Command::All => {
            generate::run_all(&config).context("Asset generation failed")?;
        }
        Command::Icon => {
            icon::generate_icon(&config).context("Failed to generate app icon")?;
        }
        Command::Feature => {
            let fonts = FontBook::load(&config.fonts);
            feature::generate_feature_graphic(&config, &fonts)
                .context("Failed to generate feature graphic")?;
        }
        Command::Screenshots => {
            let fonts = FontBook::load(&config.fonts);
            generate::generate_screenshots(&config, &fonts)
                .context("Failed to generate screenshots")?;
        }
        Command::Screenshot { content_type } => {
            let Some(entry) = generate::screenshot_entry(&content_type) else {
                let known: Vec<&str> = ScreenKind::ALL.iter().map(|k| k.as_str()).collect();
                bail!(
                    "Unknown screenshot '{}'. Use one of: {}",
                    content_type,
                    known.join(", ")
                );
            };
            let fonts = FontBook::load(&config.fonts);
            generate::generate_screenshot_entry(&config, &fonts, entry)
                .with_context(|| format!("Failed to generate {}", entry.filename))?;
        }
    }

    Ok(())
}
