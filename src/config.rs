use url::Url;

use crate::error::Result;

pub const API_URL: &str = "https://api.apiverve.com/v1/carddeckshuffler";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Date assumed when a time string carries no date.
pub const DEFAULT_TIME_DATE: (i32, u32, u32) = (2020, 1, 1);

// ---------------------------------------------------------------------------
// ShuffleOptions
// ---------------------------------------------------------------------------

/// Query options accepted by the shuffle endpoint.
///
/// All fields are optional. When `None`, the parameter is left off the query
/// string and the service default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShuffleOptions {
    pub decks: Option<u32>,
    pub jokers: Option<bool>,
    pub method: Option<String>,
}

impl ShuffleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of decks to shuffle together.
    pub fn decks(mut self, decks: u32) -> Self {
        self.decks = Some(decks);
        self
    }

    /// Include jokers in each deck.
    pub fn jokers(mut self, jokers: bool) -> Self {
        self.jokers = Some(jokers);
        self
    }

    /// Shuffling method label, e.g. `"fisher-yates"`.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// The set options as `(name, value)` query pairs, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(decks) = self.decks {
            pairs.push(("decks", decks.to_string()));
        }
        if let Some(jokers) = self.jokers {
            pairs.push(("jokers", jokers.to_string()));
        }
        if let Some(ref method) = self.method {
            pairs.push(("method", method.clone()));
        }
        pairs
    }

    /// The endpoint URL with these options encoded as its query string.
    pub fn request_url(&self) -> Result<Url> {
        let pairs = self.query_pairs();
        let url = if pairs.is_empty() {
            Url::parse(API_URL)?
        } else {
            Url::parse_with_params(API_URL, &pairs)?
        };
        tracing::debug!(%url, "built shuffle request url");
        Ok(url)
    }
}
