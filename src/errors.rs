// Error types for podium

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PodiumError {
    // Errors from the remote season/race API
    #[snafu(display("Season {year} not found"))]
    SeasonNotFound { year: u16 },
    #[snafu(display("Error calling {endpoint}"))]
    TransportError {
        endpoint: String,
        source: reqwest::Error,
    },
    #[snafu(display("Unexpected status {status} from {endpoint}"))]
    UnexpectedStatus { endpoint: String, status: u16 },

    // Errors from the fetch worker
    #[snafu(display("Fetch worker channel closed"))]
    FetchChannelClosed,
    #[snafu(display("Error starting async runtime"))]
    RuntimeStartError { source: io::Error },

    // Theme persistence errors
    #[snafu(display("Could not find application config directory to save the theme file"))]
    NoConfigDir,
    #[snafu(display("Error writing theme file"))]
    ThemeIOError { source: io::Error },
    #[snafu(display("Error serializing theme file"))]
    ThemeSerializeError { source: serde_json::Error },
}

impl PodiumError {
    /// Whether this error means the requested season year has no record, as
    /// opposed to a transport or server failure. The detail view renders a
    /// dedicated not-found state for this case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PodiumError::SeasonNotFound { .. })
    }
}
