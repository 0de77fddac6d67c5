use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoricalDataError {
    #[error("Failed to build HTTP client for historical data")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse historical data response")]
    JsonParse(#[from] serde_json::Error),

    // The body was valid JSON but not shaped like a daily point response
    #[error("Unexpected historical data response: {0}")]
    MalformedResponse(String),
}
