//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these errors come from fetching, decoding, configuration and
//! command input.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned status {status} for URL: {url}")]
    Status { status: StatusCode, url: String },

    /// The API answered with an empty body
    #[error("empty response from API for URL: {0}")]
    EmptyBody(String),

    /// The response body was not the JSON shape we expected
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A command was invoked without its required argument
    #[error("provide {0}")]
    MissingArgument(&'static str),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_url() {
        let err = PokedexError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("missingno"));
    }

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument("a pokemon name");
        assert_eq!(err.to_string(), "provide a pokemon name");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{oops").unwrap_err();
        let err = PokedexError::Decode {
            url: "http://localhost/x".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to decode response from http://localhost/x"));
    }
}
