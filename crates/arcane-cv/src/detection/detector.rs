//! High-level screen state detector

use super::config::DetectionConfig;
use crate::candidates::CandidateCache;
use crate::error::CvError;
use crate::geometry::{ARENA_SLOTS, Layout};
use crate::matching::{MatchResult, nearest};
use crate::pixel::PixelBuffer;
use crate::region::Region;
use crate::traits::RegionProvider;
use crate::Result;
use arcane_core::{CardCatalog, CardType, Format, Mode, ReferenceDatabase, ReferenceKind};
use serde::Serialize;
use std::sync::Arc;

/// Best card found for one arena slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaSlotResult {
    /// `None` when no card type had any candidate
    pub card_id: Option<String>,
    pub distance: f64,
}

impl Default for ArenaSlotResult {
    fn default() -> Self {
        Self {
            card_id: None,
            distance: f64::INFINITY,
        }
    }
}

/// Layout resolved for one buffer shape
#[derive(Debug, Clone, Copy)]
struct CachedLayout {
    width: u32,
    height: u32,
    layout: Layout,
}

/// Main detector: owns the shared reference data, the geometry service and
/// the per-class arena candidate cache (which holds the card catalog).
///
/// Every detection takes `&mut self` because the layout and candidate caches
/// are updated in place. Share the reference data between threads through
/// the `Arc`s, not the detector.
pub struct Detector<G> {
    references: Arc<ReferenceDatabase>,
    geometry: G,
    config: DetectionConfig,
    layout: Option<CachedLayout>,
    candidates: CandidateCache,
}

impl<G: RegionProvider> Detector<G> {
    /// Create new detector with the default configuration.
    ///
    /// The reference data is trusted as given; use [`Detector::try_new`] for
    /// data loaded from disk.
    pub fn new(references: Arc<ReferenceDatabase>, catalog: Arc<CardCatalog>, geometry: G) -> Self {
        Self {
            references,
            geometry,
            config: DetectionConfig::default(),
            layout: None,
            candidates: CandidateCache::new(catalog),
        }
    }

    /// Create a detector after checking that every reference vector has the
    /// extractor's length and that every catalog entry points into the arena
    /// table.
    pub fn try_new(
        references: Arc<ReferenceDatabase>,
        catalog: Arc<CardCatalog>,
        geometry: G,
        config: DetectionConfig,
    ) -> Result<Self> {
        let expected = config.extractor.feature_len();
        for kind in ReferenceKind::ALL {
            let table = references.table(kind);
            if let Some((index, vector)) = table.iter().enumerate().find(|(_, v)| v.len() != expected) {
                return Err(CvError::MalformedReference {
                    kind,
                    reason: format!("entry {} has {} features, the extractor produces {}", index, vector.len(), expected),
                });
            }
        }

        if references.arena.ids.len() != references.arena.features.len() {
            return Err(CvError::MalformedReference {
                kind: ReferenceKind::Arena,
                reason: format!(
                    "{} ids for {} feature vectors",
                    references.arena.ids.len(),
                    references.arena.features.len()
                ),
            });
        }

        references
            .validate_catalog(&catalog)
            .map_err(|err| CvError::MalformedReference {
                kind: ReferenceKind::Arena,
                reason: err.to_string(),
            })?;

        Ok(Self::new(references, catalog, geometry).with_config(config))
    }

    pub fn with_config(mut self, config: DetectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn references(&self) -> &Arc<ReferenceDatabase> {
        &self.references
    }

    pub fn catalog(&self) -> &Arc<CardCatalog> {
        self.candidates.catalog()
    }

    /// Forget the resolved layout; the next detection asks the geometry
    /// service again.
    pub fn reset_layout(&mut self) {
        self.layout = None;
    }

    /// Rank tier index, `None` when nothing is close enough
    pub fn detect_rank(&mut self, buffer: &PixelBuffer<'_>) -> Result<Option<usize>> {
        let layout = self.ensure_layout(buffer)?;
        let result = self
            .match_region(buffer, layout.rank, ReferenceKind::Rank, None)?
            .reject_above(self.config.rejection_threshold);

        tracing::debug!("rank: {:?} ({:.1})", result.index, result.distance);
        Ok(result.index)
    }

    pub fn detect_format(&mut self, buffer: &PixelBuffer<'_>) -> Result<Option<Format>> {
        let layout = self.ensure_layout(buffer)?;
        let result = self
            .match_region(buffer, layout.format, ReferenceKind::Format, None)?
            .reject_above(self.config.rejection_threshold);

        tracing::debug!("format: {:?} ({:.1})", result.index, result.distance);
        Ok(result.index.and_then(Format::from_index))
    }

    /// Casual or ranked; wild and standard variants collapse together
    pub fn detect_mode(&mut self, buffer: &PixelBuffer<'_>) -> Result<Option<Mode>> {
        let layout = self.ensure_layout(buffer)?;
        let kind = if layout.is_tablet {
            ReferenceKind::ModeTablet
        } else {
            ReferenceKind::Mode
        };

        let result = self
            .match_region(buffer, layout.mode, kind, None)?
            .reject_above(self.config.rejection_threshold);

        tracing::debug!("mode ({}): {:?} ({:.1})", kind, result.index, result.distance);
        Ok(result.index.and_then(Mode::from_raw_index))
    }

    /// Best card per arena slot across minion, spell and weapon regions.
    ///
    /// No rejection threshold applies; callers judge quality from the
    /// returned distances. On equal distances the earlier type in
    /// minion, spell, weapon order wins.
    pub fn detect_arena(
        &mut self,
        buffer: &PixelBuffer<'_>,
        player_class: Option<&str>,
    ) -> Result<[ArenaSlotResult; ARENA_SLOTS]> {
        let layout = self.ensure_layout(buffer)?;
        self.candidates.refresh(player_class);

        let mut results: [ArenaSlotResult; ARENA_SLOTS] = Default::default();

        for (type_index, card_type) in CardType::ARENA.into_iter().enumerate() {
            let candidates = self.candidates.cached(card_type);
            if candidates.is_empty() {
                continue;
            }

            for (slot, result) in results.iter_mut().enumerate() {
                let region = layout.arena[type_index][slot];
                let matched = self.match_region(buffer, region, ReferenceKind::Arena, Some(candidates))?;

                let Some(index) = matched.index else {
                    continue;
                };
                if matched.distance < result.distance {
                    let card_id = self.references.arena_card_id(index).ok_or_else(|| CvError::MalformedReference {
                        kind: ReferenceKind::Arena,
                        reason: format!("no card id for entry {}", index),
                    })?;
                    result.card_id = Some(card_id.to_string());
                    result.distance = matched.distance;
                }
            }
        }

        tracing::debug!(
            "arena: {}",
            results
                .iter()
                .map(|r| format!("[{}({:.1})]", r.card_id.as_deref().unwrap_or("?"), r.distance))
                .collect::<Vec<_>>()
                .join(",")
        );
        Ok(results)
    }

    /// Resolve the layout, asking the geometry service only when the buffer
    /// shape changed. Every region must fit the buffer and be large enough
    /// for the extractor.
    fn ensure_layout(&mut self, buffer: &PixelBuffer<'_>) -> Result<Layout> {
        let (width, height) = buffer.dimensions();
        if let Some(cached) = self.layout {
            if cached.width == width && cached.height == height {
                return Ok(cached.layout);
            }
        }

        let layout = self.geometry.layout(width, height)?;
        let (min_width, min_height) = self.config.extractor.min_region_size();
        for region in layout.regions() {
            if !buffer.contains(&region) {
                return Err(CvError::RegionOutOfBounds { region, width, height });
            }
            if region.width < min_width || region.height < min_height {
                return Err(CvError::RegionTooSmall {
                    region,
                    min_width,
                    min_height,
                });
            }
        }

        self.layout = Some(CachedLayout { width, height, layout });
        Ok(layout)
    }

    /// Extract `region` and match it against one reference table
    fn match_region(
        &self,
        buffer: &PixelBuffer<'_>,
        region: Region,
        kind: ReferenceKind,
        restrict_to: Option<&[usize]>,
    ) -> Result<MatchResult> {
        let features = self.config.extractor.extract(buffer, region)?;
        tracing::trace!("{} {} {}", kind, region, features);
        nearest(&features, self.references.table(kind), &self.config.metric, restrict_to)
    }
}
