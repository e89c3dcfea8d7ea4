use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::card::Card;

/// Ordered collection of every known card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Load the catalog from a JSON array of cards
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open card catalog: {:?}", path))?;

        let catalog: CardCatalog = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse card catalog: {:?}", path))?;

        tracing::info!("Loaded {} cards from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Map upper-snake-case card names to card ids.
    ///
    /// Names are upper-cased, spaces become `_` and anything outside `A-Z`
    /// and `_` is dropped. Cards sharing a name are told apart by a numeric
    /// suffix assigned in id order: `FIREBALL`, `FIREBALL1`, ...
    pub fn name_to_card_id(&self) -> BTreeMap<String, String> {
        let mut by_name: BTreeMap<String, Vec<&str>> = BTreeMap::new();

        for card in &self.cards {
            let Some(name) = card.name.as_deref() else {
                tracing::warn!("Card {} has no name, skipping", card.id);
                continue;
            };
            by_name.entry(normalize_name(name)).or_default().push(&card.id);
        }

        let mut result = BTreeMap::new();
        for (name, mut ids) in by_name {
            ids.sort_unstable();
            for (i, id) in ids.into_iter().enumerate() {
                let key = if i > 0 { format!("{}{}", name, i) } else { name.clone() };
                result.insert(key, id.to_string());
            }
        }

        result
    }
}

fn normalize_name(name: &str) -> String {
    name.to_uppercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == '_')
        .collect()
}

impl<'a> IntoIterator for &'a CardCatalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
