//! Card Deck Shuffler SDK for Rust.
//!
//! Provides the typed response model for the Card Deck Shuffler API and a
//! [`Converter`] that reads and writes it as JSON. Unknown fields are ignored
//! on read so newer service versions keep parsing.
//!
//! # Quick start
//!
//! ```
//! use carddeckshuffler_sdk::{from_json_string, to_json_string, Suit};
//!
//! let json = r#"{"total_cards":1,"decks_used":1,"includes_jokers":false,
//!     "shuffle_method":"fisher-yates",
//!     "cards":[{"rank":"Ace","suit":"Spades","card":"Ace of Spades","short":"AS"}],
//!     "sample_hand":[]}"#;
//!
//! let data = from_json_string(json).unwrap();
//! assert_eq!(data.cards[0].suit, Suit::Spades);
//!
//! let back = to_json_string(&data).unwrap();
//! assert!(back.contains("\"shuffle_method\":\"fisher-yates\""));
//! ```

pub mod config;
pub mod datetime;
pub mod error;
pub mod models;

pub use config::ShuffleOptions;
pub use datetime::{parse_date_time_string, parse_time_string, OffsetTime};
pub use error::{ParseError, Result};
pub use models::{ApiResponse, BottomCard, Card, CardDeckShufflerData, Suit};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConverterBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring a [`Converter`].
///
/// Use [`Converter::builder()`] to obtain a builder and call
/// [`build()`](ConverterBuilder::build) to create the converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConverterBuilder {
    pretty: bool,
}

impl ConverterBuilder {
    /// Emit indented, multi-line JSON. Defaults to `false`.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            pretty: self.pretty,
        }
    }
}

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

/// Reads and writes [`CardDeckShufflerData`] as JSON.
///
/// A converter is an immutable value; the free functions
/// [`from_json_string`] and [`to_json_string`] use [`Converter::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    pretty: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Converter {
    /// Compact output.
    pub const DEFAULT: Converter = Converter { pretty: false };

    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    // -- Reading -----------------------------------------------------------

    /// Parse a shuffle record from JSON text.
    ///
    /// Fails on malformed JSON, a missing or mistyped scalar field, or a
    /// suit outside the four recognized names.
    pub fn from_json_string(&self, json: &str) -> Result<CardDeckShufflerData> {
        let data: CardDeckShufflerData = serde_json::from_str(json)?;
        tracing::debug!(
            total_cards = data.total_cards,
            cards = data.cards.len(),
            "parsed shuffle record"
        );
        Ok(data)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<CardDeckShufflerData> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a shuffle record from a JSON file.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<CardDeckShufflerData> {
        let file = File::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "reading shuffle record");
        self.from_reader(BufReader::new(file))
    }

    /// Parse the full API envelope (`status`, `error`, `data`, `code`).
    ///
    /// A non-`ok` status still parses; use [`ApiResponse::into_data`] to turn
    /// it into an error.
    pub fn response_from_json_string(&self, json: &str) -> Result<ApiResponse> {
        Ok(serde_json::from_str(json)?)
    }

    // -- Writing -----------------------------------------------------------

    /// Serialize a record with the snake_case wire names. Every field is
    /// written; absent top/bottom cards render as `null`.
    pub fn to_json_string(&self, data: &CardDeckShufflerData) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        tracing::debug!(bytes = json.len(), "serialized shuffle record");
        Ok(json)
    }

    pub fn to_writer<W: Write>(&self, writer: W, data: &CardDeckShufflerData) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(writer, data)?;
        } else {
            serde_json::to_writer(writer, data)?;
        }
        Ok(())
    }

    /// Write a record to `path`, creating or truncating the file.
    pub fn to_path<P: AsRef<Path>>(&self, path: P, data: &CardDeckShufflerData) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.to_writer(&mut writer, data)?;
        writer.flush()?;
        tracing::debug!(path = %path.as_ref().display(), "wrote shuffle record");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Parse a shuffle record with the default converter.
pub fn from_json_string(json: &str) -> Result<CardDeckShufflerData> {
    Converter::DEFAULT.from_json_string(json)
}

/// Serialize a shuffle record with the default converter.
pub fn to_json_string(data: &CardDeckShufflerData) -> Result<String> {
    Converter::DEFAULT.to_json_string(data)
}
