//! Upstream failures

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors talking to the Digitransit APIs.
///
/// "Nothing found" is not an error; see [`crate::TripOutcome`].
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success status
    #[error("{api} request failed with HTTP {status}: {body}")]
    Http {
        api: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The request never produced a response
    #[error("{api} request could not be sent: {source}")]
    Transport {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not have the expected shape
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Writing the itinerary text failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
