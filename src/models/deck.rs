use serde::{Deserialize, Serialize};

use super::card::Card;

// ---------------------------------------------------------------------------
// CardDeckShufflerData — Root record of a shuffle response
// ---------------------------------------------------------------------------

/// A shuffled deck as returned in the `data` field of the API response.
///
/// `cards` is in deck order. The relationship between `total_cards`,
/// `decks_used` and `includes_jokers` is descriptive and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CardDeckShufflerData {
    pub total_cards: u64,
    pub decks_used: u64,
    pub includes_jokers: bool,
    pub shuffle_method: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub top_card: Option<Card>,
    #[serde(default)]
    pub bottom_card: Option<Card>,
    #[serde(default)]
    pub sample_hand: Vec<Card>,
}
