//! Defines the error taxonomy of the fetch flow.

use thiserror::Error;
use wikitoc_traits::TransportError;

/// Message shown for any transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred";

/// Message shown when the API fails without a usable description.
pub const GENERIC_API_ERROR_MESSAGE: &str = "An error occurred while fetching data";

/// The two ways a TOC fetch can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TocError {
    /// The request could not be issued, failed in transit, or came back with
    /// a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),
    /// The API answered but reported an error, sent an unreadable body, or
    /// listed no sections.
    #[error("API error: {}", .info.as_deref().unwrap_or(GENERIC_API_ERROR_MESSAGE))]
    Api { info: Option<String> },
}

impl TocError {
    pub fn api(info: impl Into<String>) -> Self {
        TocError::Api {
            info: Some(info.into()),
        }
    }

    pub fn api_generic() -> Self {
        TocError::Api { info: None }
    }

    /// The single message displayed to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            TocError::Network(_) => NETWORK_ERROR_MESSAGE,
            TocError::Api { info: Some(info) } => info,
            TocError::Api { info: None } => GENERIC_API_ERROR_MESSAGE,
        }
    }
}

impl From<TransportError> for TocError {
    fn from(err: TransportError) -> Self {
        TocError::Network(err.to_string())
    }
}
