//! Error Types
//!
//! Failures of the joke endpoint, the acquisition loop and localStorage.

use thiserror::Error;

/// A single fetch against the joke endpoint failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("could not decode joke: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// The acquisition loop ended without a full list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcquireError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("only found {got} of {wanted} distinct jokes after {attempts} fetches")]
    Exhausted {
        wanted: usize,
        got: usize,
        attempts: usize,
    },
}

/// localStorage could not be written
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not encode jokes: {0}")]
    Encode(String),
    #[error("could not write to localStorage: {0}")]
    Write(String),
}
