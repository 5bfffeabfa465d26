//! Acquisition Loop
//!
//! Fills the joke list up to a target size, one sequential fetch at a time,
//! skipping ids that are already in the list.

use std::collections::HashSet;

use crate::api::JokeSource;
use crate::error::AcquireError;
use crate::models::Joke;

/// How many jokes to collect and how many fetches that may take
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcquirePolicy {
    pub target: usize,
    pub max_attempts: usize,
}

/// Fetch jokes until `existing` holds `policy.target` distinct ids.
///
/// Nothing is committed on failure: the caller only sees the list on `Ok`.
pub async fn acquire<S>(
    source: &S,
    existing: Vec<Joke>,
    policy: AcquirePolicy,
) -> Result<Vec<Joke>, AcquireError>
where
    S: JokeSource + ?Sized,
{
    let mut jokes = existing;
    let mut seen: HashSet<_> = jokes.iter().map(|j| j.id.clone()).collect();
    let mut attempts = 0;

    while jokes.len() < policy.target {
        if attempts >= policy.max_attempts {
            log::warn!(
                "[ACQUIRE] giving up after {} fetches with {}/{} jokes",
                attempts,
                jokes.len(),
                policy.target
            );
            return Err(AcquireError::Exhausted {
                wanted: policy.target,
                got: jokes.len(),
                attempts,
            });
        }
        attempts += 1;

        let candidate = source.fetch_joke().await.map_err(|e| {
            log::error!("[ACQUIRE] fetch #{} failed: {}", attempts, e);
            e
        })?;

        if seen.insert(candidate.id.clone()) {
            jokes.push(Joke::from(candidate));
        } else {
            log::debug!("[ACQUIRE] duplicate joke {} skipped", candidate.id);
        }
    }

    log::info!(
        "[ACQUIRE] collected {} jokes in {} fetches",
        jokes.len(),
        attempts
    );
    Ok(jokes)
}
