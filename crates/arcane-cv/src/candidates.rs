//! Class-conditional arena candidate lists
//!
//! Arena matching only considers cards the current hero can draft. Scanning
//! the whole catalog on every frame is wasteful when the hero rarely
//! changes, so the per-type index lists are built together and kept until
//! a different class is requested.
//!
//! The cache owns the catalog it filters, so a list can never outlive the
//! catalog it was built from.

use arcane_core::{CardCatalog, CardType};
use std::sync::Arc;

/// Arena reference indices per card type, memoized on the player class
#[derive(Debug, Clone, Default)]
pub struct CandidateCache {
    catalog: Arc<CardCatalog>,
    /// Class the lists were built for; `None` until the first build
    built_for: Option<Option<String>>,
    /// Indexed like `CardType::ARENA`
    lists: [Vec<usize>; 3],
}

impl CandidateCache {
    pub fn new(catalog: Arc<CardCatalog>) -> Self {
        Self {
            catalog,
            built_for: None,
            lists: Default::default(),
        }
    }

    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    /// Arena reference indices eligible for `player_class` and `card_type`.
    ///
    /// Rebuilds every list first if the class differs from the cached one.
    pub fn candidates(&mut self, player_class: Option<&str>, card_type: CardType) -> &[usize] {
        self.refresh(player_class);
        self.cached(card_type)
    }

    /// Rebuild the lists unless they already belong to `player_class`.
    ///
    /// Returns whether a rebuild happened.
    pub fn refresh(&mut self, player_class: Option<&str>) -> bool {
        if self.cached_class() == Some(player_class) {
            return false;
        }

        let mut lists: [Vec<usize>; 3] = Default::default();
        for card in self.catalog.iter() {
            let Some(reference_index) = card.reference_index else {
                continue;
            };
            let Some(slot) = card.card_type.arena_index() else {
                continue;
            };
            if card.playable_by(player_class) {
                lists[slot].push(reference_index);
            }
        }

        tracing::debug!(
            "Rebuilt arena candidates for {:?}: {} minions, {} spells, {} weapons",
            player_class,
            lists[0].len(),
            lists[1].len(),
            lists[2].len()
        );

        self.lists = lists;
        self.built_for = Some(player_class.map(str::to_string));
        true
    }

    /// Lists from the last build, without checking the class
    pub fn cached(&self, card_type: CardType) -> &[usize] {
        match card_type.arena_index() {
            Some(slot) => &self.lists[slot],
            None => &[],
        }
    }

    /// Class of the last build; `None` if nothing was built yet
    pub fn cached_class(&self) -> Option<Option<&str>> {
        self.built_for.as_ref().map(|class| class.as_deref())
    }

    /// Drop the lists; the next request rebuilds them
    pub fn invalidate(&mut self) {
        self.built_for = None;
        self.lists = Default::default();
    }
}
