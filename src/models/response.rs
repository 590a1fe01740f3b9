use serde::{Deserialize, Serialize};

use super::deck::CardDeckShufflerData;
use crate::error::{ParseError, Result};

// ---------------------------------------------------------------------------
// ApiResponse — Envelope wrapping every shuffler response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<CardDeckShufflerData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Unwrap the payload of a successful response.
    ///
    /// A non-`ok` status, or an `ok` status without `data`, becomes
    /// [`ParseError::Api`].
    pub fn into_data(self) -> Result<CardDeckShufflerData> {
        if !self.is_ok() {
            let message = self.error.unwrap_or_else(|| "Unknown error".to_string());
            tracing::debug!(status = %self.status, %message, "shuffler response reported failure");
            return Err(ParseError::Api {
                status: self.status,
                message,
            });
        }
        self.data.ok_or_else(|| ParseError::Api {
            status: self.status,
            message: "response has no data".to_string(),
        })
    }
}
