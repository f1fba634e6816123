use thiserror::Error;

/// Everything that can cut a query short. Each variant's message is printed
/// verbatim on a single `[-]` line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The API is currently being updated. Please check again soon.")]
    Transport(#[from] reqwest::Error),

    #[error("The API is currently being updated. Please check again soon.")]
    Parse(#[from] serde_json::Error),

    #[error("The API request failed with code {0}")]
    ApiStatus(i64),

    #[error("Could not find results for {0}")]
    NotFound(String),

    #[error("{0} is not a valid US state code")]
    UnknownState(String),
}
