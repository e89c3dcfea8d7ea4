//! Arcane core data model
//!
//! Everything the detector needs that does not touch pixels: the card
//! catalog, the precomputed reference tables and the labels detections
//! resolve to.

pub mod cards;
pub mod labels;
pub mod reference;

pub use cards::{Card, CardCatalog, CardType, NEUTRAL};
pub use labels::{Format, Mode, RawMode};
pub use reference::{ArenaData, FeatureVector, FormatModeRankData, ReferenceDatabase, ReferenceKind};
