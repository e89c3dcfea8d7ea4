use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{FeatureVector, ReferenceKind};
use crate::cards::CardCatalog;

/// Rank, format and mode tables, indexed by label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FormatModeRankData {
    pub ranks: Vec<FeatureVector>,
    pub formats: Vec<FeatureVector>,
    pub modes: Vec<FeatureVector>,
    pub modes_tablet: Vec<FeatureVector>,
}

/// Arena card table: `ids[i]` is the card whose reference is `features[i]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaData {
    pub ids: Vec<String>,
    pub features: Vec<FeatureVector>,
}

/// Every reference table the detector matches against.
///
/// Loaded once and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDatabase {
    pub format_mode_rank: FormatModeRankData,
    pub arena: ArenaData,
}

impl ReferenceDatabase {
    pub fn new(format_mode_rank: FormatModeRankData, arena: ArenaData) -> Result<Self> {
        let database = Self { format_mode_rank, arena };
        database.validate()?;
        Ok(database)
    }

    /// Load both reference files and validate them
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(format_mode_rank_path: P, arena_path: Q) -> Result<Self> {
        let format_mode_rank: FormatModeRankData = read_json(format_mode_rank_path.as_ref())?;
        let arena: ArenaData = read_json(arena_path.as_ref())?;

        let database = Self::new(format_mode_rank, arena)?;

        tracing::info!(
            "Loaded references: {} ranks, {} formats, {} modes, {} tablet modes, {} arena cards",
            database.format_mode_rank.ranks.len(),
            database.format_mode_rank.formats.len(),
            database.format_mode_rank.modes.len(),
            database.format_mode_rank.modes_tablet.len(),
            database.arena.features.len(),
        );
        Ok(database)
    }

    pub fn table(&self, kind: ReferenceKind) -> &[FeatureVector] {
        match kind {
            ReferenceKind::Rank => &self.format_mode_rank.ranks,
            ReferenceKind::Format => &self.format_mode_rank.formats,
            ReferenceKind::Mode => &self.format_mode_rank.modes,
            ReferenceKind::ModeTablet => &self.format_mode_rank.modes_tablet,
            ReferenceKind::Arena => &self.arena.features,
        }
    }

    /// Card id for an arena reference index
    pub fn arena_card_id(&self, index: usize) -> Option<&str> {
        self.arena.ids.get(index).map(String::as_str)
    }

    /// Check that every table holds vectors of a single length and that the
    /// arena ids line up with the arena features.
    pub fn validate(&self) -> Result<()> {
        for kind in ReferenceKind::ALL {
            let table = self.table(kind);
            let Some(first) = table.first() else {
                continue;
            };

            for (index, vector) in table.iter().enumerate() {
                if vector.len() != first.len() {
                    bail!(
                        "Reference table {} entry {} has {} features, expected {}",
                        kind,
                        index,
                        vector.len(),
                        first.len()
                    );
                }
            }
        }

        if self.arena.ids.len() != self.arena.features.len() {
            bail!(
                "Arena table has {} ids but {} feature vectors",
                self.arena.ids.len(),
                self.arena.features.len()
            );
        }

        Ok(())
    }

    /// Check that every catalog reference index points into the arena table
    pub fn validate_catalog(&self, catalog: &CardCatalog) -> Result<()> {
        let arena_len = self.arena.features.len();

        for card in catalog {
            if let Some(index) = card.reference_index {
                if index >= arena_len {
                    bail!(
                        "Card {} references arena entry {}, but the arena table has {} entries",
                        card.id,
                        index,
                        arena_len
                    );
                }
            }
        }

        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open reference file: {:?}", path))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse reference file: {:?}", path))
}
