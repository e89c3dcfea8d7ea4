use serde::{Deserialize, Serialize};

/// Owning class of cards every hero can draft.
pub const NEUTRAL: &str = "NEUTRAL";

fn neutral() -> String {
    NEUTRAL.to_string()
}

/// Card type as declared in the catalog.
///
/// Only the three arena types take part in matching; heroes, hero powers
/// and the like deserialize to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Minion,
    Spell,
    Weapon,
    #[serde(other)]
    Other,
}

impl CardType {
    /// Arena card types, in the order slots are matched.
    pub const ARENA: [CardType; 3] = [CardType::Minion, CardType::Spell, CardType::Weapon];

    /// Position of this type in [`CardType::ARENA`]
    pub fn arena_index(self) -> Option<usize> {
        match self {
            CardType::Minion => Some(0),
            CardType::Spell => Some(1),
            CardType::Weapon => Some(2),
            CardType::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub card_type: CardType,
    #[serde(default = "neutral")]
    pub player_class: String,
    /// Index into the arena reference table, if one was generated
    #[serde(default)]
    pub reference_index: Option<usize>,
}

impl Card {
    pub fn is_neutral(&self) -> bool {
        self.player_class == NEUTRAL
    }

    /// Whether a hero of `player_class` can draft this card.
    ///
    /// With no class known every card is playable.
    pub fn playable_by(&self, player_class: Option<&str>) -> bool {
        match player_class {
            None => true,
            Some(class) => self.is_neutral() || self.player_class == class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(class: &str) -> Card {
        Card {
            id: "CS2_029".to_string(),
            name: Some("Fireball".to_string()),
            card_type: CardType::Spell,
            player_class: class.to_string(),
            reference_index: Some(3),
        }
    }

    #[test]
    fn test_playable_by() {
        let mage = card("MAGE");
        assert!(mage.playable_by(Some("MAGE")));
        assert!(!mage.playable_by(Some("WARRIOR")));
        assert!(mage.playable_by(None));

        let neutral = card(NEUTRAL);
        assert!(neutral.playable_by(Some("WARRIOR")));
    }

    #[test]
    fn test_deserialize_card() {
        let json = r#"{"id":"EX1_066","name":"Acidic Swamp Ooze","type":"MINION","referenceIndex":7}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.card_type, CardType::Minion);
        assert!(card.is_neutral());
        assert_eq!(card.reference_index, Some(7));

        let json = r#"{"id":"HERO_08","type":"HERO","playerClass":"MAGE"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.card_type, CardType::Other);
        assert_eq!(card.card_type.arena_index(), None);
        assert_eq!(card.reference_index, None);
    }
}
