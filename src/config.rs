//! Joke List Configuration

use crate::acquire::AcquirePolicy;

pub const DEFAULT_ENDPOINT: &str = "https://icanhazdadjoke.com/";
pub const DEFAULT_STORAGE_KEY: &str = "jokes";
pub const DEFAULT_TARGET: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct JokeListConfig {
    /// Endpoint returning one JSON joke per GET
    pub endpoint: String,
    /// localStorage key of the persisted list
    pub storage_key: String,
    /// Jokes to collect on each refresh
    pub target: usize,
    /// Fetch budget per refresh
    pub max_attempts: usize,
}

impl Default for JokeListConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            target: DEFAULT_TARGET,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl JokeListConfig {
    pub fn with_target(self, target: usize) -> Self {
        Self { target, ..self }
    }

    pub fn policy(&self) -> AcquirePolicy {
        AcquirePolicy {
            target: self.target,
            max_attempts: self.max_attempts,
        }
    }
}
