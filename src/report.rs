//! Screen report built from a screenshot using arcane-cv

use anyhow::{Context, Result};
use arcane_core::{CardCatalog, Format, Mode, ReferenceDatabase};
use arcane_cv::{ArenaSlotResult, DetectionConfig, Detector, PixelBuffer, RelativeLayout};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Files expected in a data directory
#[derive(Debug, Clone)]
pub struct DataFiles {
    pub format_mode_rank: PathBuf,
    pub arena: PathBuf,
    pub cards: PathBuf,
    pub layout: PathBuf,
    /// Optional; defaults apply when missing
    pub config: PathBuf,
}

impl DataFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            format_mode_rank: dir.join("format_mode_rank_data.json"),
            arena: dir.join("arena_data.json"),
            cards: dir.join("cards.json"),
            layout: dir.join("layout.json"),
            config: dir.join("detection.json"),
        }
    }
}

/// Everything detected on one screenshot
#[derive(Debug, Clone, Serialize)]
pub struct ScreenReport {
    pub rank: Option<usize>,
    pub format: Option<Format>,
    pub mode: Option<Mode>,
    pub arena: [ArenaSlotResult; 3],
}

/// Load the reference data described by `files` and build a detector
pub fn load_detector(files: &DataFiles) -> Result<Detector<RelativeLayout>> {
    let references = ReferenceDatabase::load(&files.format_mode_rank, &files.arena)?;
    let catalog = CardCatalog::load(&files.cards)?;

    let layout: RelativeLayout = read_json(&files.layout)?;
    let config: DetectionConfig = if files.config.exists() {
        read_json(&files.config)?
    } else {
        DetectionConfig::default()
    };

    let detector = Detector::try_new(Arc::new(references), Arc::new(catalog), layout, config)
        .context("Reference data does not match the detector")?;

    tracing::info!(
        "Detector ready: {} arena references, {} cards, threshold {}",
        detector.references().arena.ids.len(),
        detector.catalog().len(),
        detector.config().rejection_threshold
    );
    Ok(detector)
}

/// Run every detection on the screenshot at `image_path`
pub fn analyze_screenshot<G: arcane_cv::traits::RegionProvider>(
    detector: &mut Detector<G>,
    image_path: &Path,
    player_class: Option<&str>,
) -> Result<ScreenReport> {
    let image = image::open(image_path)
        .with_context(|| format!("Failed to open image: {:?}", image_path))?
        .to_rgba8();
    let buffer = PixelBuffer::from_rgba_image(&image);

    tracing::info!("Analyzing {:?} ({}x{})", image_path, image.width(), image.height());

    let report = ScreenReport {
        rank: detector.detect_rank(&buffer)?,
        format: detector.detect_format(&buffer)?,
        mode: detector.detect_mode(&buffer)?,
        arena: detector.detect_arena(&buffer, player_class)?,
    };

    tracing::info!(
        "rank: {}, format: {}, mode: {}",
        report.rank.map_or("UNKNOWN".to_string(), |r| r.to_string()),
        report.format.map_or("UNKNOWN".to_string(), |f| f.to_string()),
        report.mode.map_or("UNKNOWN".to_string(), |m| m.to_string()),
    );
    Ok(report)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {:?}", path))
}
