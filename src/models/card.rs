use serde::{Deserialize, Serialize};

use super::suit::Suit;

// ---------------------------------------------------------------------------
// Card — A single playing card as rendered by the shuffler
// ---------------------------------------------------------------------------

/// One card in a shuffled deck.
///
/// `card` is the display name (e.g. `"Ace of Spades"`) and `short` the
/// two- or three-character code (e.g. `"AS"`, `"10H"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: String,
    pub suit: Suit,
    pub card: String,
    pub short: String,
}

/// The name the API schema uses for every card-shaped object.
pub type BottomCard = Card;
