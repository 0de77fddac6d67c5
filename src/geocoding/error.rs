use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Failed to build HTTP client for geocoding")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Geocoding request to {0} timed out")]
    Timeout(String, #[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse geocoding response")]
    JsonParse(#[from] serde_json::Error),

    #[error("Geocoding response contained an invalid coordinate '{value}'")]
    InvalidCoordinate {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
