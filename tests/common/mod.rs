//! Shared fixtures for the shuffler SDK integration tests.

#![allow(dead_code)]

use carddeckshuffler_sdk::{Card, CardDeckShufflerData, Suit};

/// The single-card response used throughout the API documentation.
pub const ONE_CARD_JSON: &str = r#"{"total_cards":1,"decks_used":1,"includes_jokers":false,"shuffle_method":"fisher-yates","cards":[{"rank":"Ace","suit":"Spades","card":"Ace of Spades","short":"AS"}],"top_card":{"rank":"Ace","suit":"Spades","card":"Ace of Spades","short":"AS"},"bottom_card":{"rank":"2","suit":"Clubs","card":"2 of Clubs","short":"2C"},"sample_hand":[]}"#;

pub fn card(rank: &str, suit: Suit, short: &str) -> Card {
    Card {
        rank: rank.to_string(),
        suit,
        card: format!("{} of {}", rank, suit),
        short: short.to_string(),
    }
}

/// A small multi-suit record with a non-empty sample hand.
pub fn sample_record() -> CardDeckShufflerData {
    let cards = vec![
        card("Queen", Suit::Hearts, "QH"),
        card("10", Suit::Diamonds, "10D"),
        card("Ace", Suit::Spades, "AS"),
        card("7", Suit::Clubs, "7C"),
        card("King", Suit::Hearts, "KH"),
    ];
    CardDeckShufflerData {
        total_cards: cards.len() as u64,
        decks_used: 1,
        includes_jokers: false,
        shuffle_method: "riffle".to_string(),
        top_card: cards.first().cloned(),
        bottom_card: cards.last().cloned(),
        sample_hand: cards[..3].to_vec(),
        cards,
    }
}

/// Wrap `data` in a successful API envelope.
pub fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "error": null,
        "data": data
    })
}
