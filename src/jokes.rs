//! Joke List Operations
//!
//! Pure functions over the joke collection. Every operation returns a new
//! list and leaves its input untouched.

use std::collections::HashSet;

use crate::models::{Joke, JokeId};

/// Change the votes of the joke with `id` by `delta`
pub fn vote(jokes: &[Joke], id: &JokeId, delta: i32) -> Vec<Joke> {
    jokes
        .iter()
        .map(|j| {
            if &j.id == id {
                Joke { votes: j.votes.saturating_add(delta), ..j.clone() }
            } else {
                j.clone()
            }
        })
        .collect()
}

/// Set the votes of the joke with `id` back to zero
pub fn reset(jokes: &[Joke], id: &JokeId) -> Vec<Joke> {
    jokes
        .iter()
        .map(|j| {
            if &j.id == id {
                Joke { votes: 0, ..j.clone() }
            } else {
                j.clone()
            }
        })
        .collect()
}

/// Display order: most votes first. Ties keep list order.
pub fn sorted_by_votes(jokes: &[Joke]) -> Vec<Joke> {
    let mut sorted = jokes.to_vec();
    sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
    sorted
}

/// Drop later jokes whose id already appeared
pub fn dedup_by_id(jokes: Vec<Joke>) -> Vec<Joke> {
    let mut seen = HashSet::new();
    jokes
        .into_iter()
        .filter(|j| seen.insert(j.id.clone()))
        .collect()
}
