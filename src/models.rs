//! Frontend Models
//!
//! Joke records as stored in localStorage and as returned by the API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque joke identifier.
///
/// The API hands out strings; older persisted lists may hold numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JokeId {
    Text(String),
    Number(i64),
}

impl fmt::Display for JokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JokeId::Text(s) => write!(f, "{}", s),
            JokeId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for JokeId {
    fn from(s: &str) -> Self {
        JokeId::Text(s.to_string())
    }
}

/// A joke with its score (persisted shape: `{id, joke, votes}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joke {
    pub id: JokeId,
    pub joke: String,
    pub votes: i32,
}

impl Joke {
    /// Fresh joke with no votes
    pub fn new(id: impl Into<JokeId>, joke: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            joke: joke.into(),
            votes: 0,
        }
    }
}

/// Response body of the joke endpoint. `status` is not used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiJoke {
    pub id: JokeId,
    pub joke: String,
}

impl From<ApiJoke> for Joke {
    fn from(api: ApiJoke) -> Self {
        Joke::new(api.id, api.joke)
    }
}
