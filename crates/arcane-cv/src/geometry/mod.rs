//! Region geometry
//!
//! The detector does not know where anything sits on screen; it asks a
//! [`RegionProvider`] for a [`Layout`] once per frame size.

pub mod relative;

pub use relative::{RelativeLayout, RelativeRect};

use arcane_core::CardType;
use serde::{Deserialize, Serialize};

use crate::error::CvError;
use crate::region::Region;
use crate::traits::RegionProvider;
use crate::Result;

/// Number of card choices offered during an arena draft
pub const ARENA_SLOTS: usize = 3;

/// Every detection region for one frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub rank: Region,
    pub format: Region,
    pub mode: Region,
    /// `arena[type][slot]`, types ordered like `CardType::ARENA`
    pub arena: [[Region; ARENA_SLOTS]; 3],
    /// Tablets use their own mode reference table
    pub is_tablet: bool,
}

impl Layout {
    pub fn arena_region(&self, card_type: CardType, slot: usize) -> Option<Region> {
        let type_index = card_type.arena_index()?;
        self.arena[type_index].get(slot).copied()
    }

    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        [self.rank, self.format, self.mode]
            .into_iter()
            .chain(self.arena.iter().flatten().copied())
    }
}

/// A fixed layout serves every frame it fits in.
impl RegionProvider for Layout {
    fn layout(&self, width: u32, height: u32) -> Result<Layout> {
        if self.regions().all(|region| region.fits_within(width, height)) {
            Ok(*self)
        } else {
            Err(CvError::UnsupportedResolution { width, height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        let r = Region::new(0, 0, 10, 10);
        Layout {
            rank: r,
            format: r,
            mode: r,
            arena: [[r, Region::new(20, 0, 10, 10), r], [r; 3], [r; 3]],
            is_tablet: false,
        }
    }

    #[test]
    fn test_arena_region_lookup() {
        let layout = layout();
        assert_eq!(layout.arena_region(CardType::Minion, 1), Some(Region::new(20, 0, 10, 10)));
        assert_eq!(layout.arena_region(CardType::Minion, 3), None);
        assert_eq!(layout.arena_region(CardType::Other, 0), None);
        assert_eq!(layout.regions().count(), 12);
    }

    #[test]
    fn test_fixed_layout_rejects_small_frames() {
        let layout = layout();
        assert_eq!(layout.layout(30, 10), Ok(layout));
        assert_eq!(
            layout.layout(29, 10),
            Err(CvError::UnsupportedResolution { width: 29, height: 10 })
        );
    }
}
