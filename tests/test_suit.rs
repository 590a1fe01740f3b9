//! Suit codec tests.

use carddeckshuffler_sdk::{ParseError, Suit};

#[test]
fn decodes_and_reencodes_every_canonical_name() {
    for name in ["Clubs", "Diamonds", "Hearts", "Spades"] {
        let suit: Suit = name.parse().unwrap();
        assert_eq!(suit.as_str(), name);
        assert_eq!(suit.to_string(), name);
    }
}

#[test]
fn all_lists_each_suit_once_in_wire_order() {
    let names: Vec<&str> = Suit::ALL.iter().map(Suit::as_str).collect();
    assert_eq!(names, vec!["Clubs", "Diamonds", "Hearts", "Spades"]);
}

#[test]
fn lowercase_name_is_rejected() {
    let err = "clubs".parse::<Suit>().unwrap_err();
    assert!(matches!(err, ParseError::UnknownSuit(ref s) if s == "clubs"));
}

#[test]
fn other_spellings_are_rejected() {
    for bad in ["CLUBS", "Club", " Clubs", "Joker", ""] {
        assert!(bad.parse::<Suit>().is_err(), "accepted {bad:?}");
    }
}

#[test]
fn serde_uses_wire_names() {
    assert_eq!(serde_json::to_string(&Suit::Hearts).unwrap(), "\"Hearts\"");
    let suit: Suit = serde_json::from_str("\"Diamonds\"").unwrap();
    assert_eq!(suit, Suit::Diamonds);
    assert!(serde_json::from_str::<Suit>("\"hearts\"").is_err());
    assert!(serde_json::from_str::<Suit>("2").is_err());
}
