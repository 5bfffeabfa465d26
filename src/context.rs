//! Application Context
//!
//! Joke actions shared with row components via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpJokeSource;
use crate::config::JokeListConfig;
use crate::models::JokeId;
use crate::store::{run_acquisition, store_begin_refresh, store_reset, store_vote, JokeStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct JokeContext {
    pub store: JokeStore,
    config: StoredValue<JokeListConfig>,
}

impl JokeContext {
    pub fn new(store: JokeStore, config: JokeListConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Upvote (+1) or downvote (-1) a joke
    pub fn vote(&self, id: &JokeId, delta: i32) {
        store_vote(&self.store, id, delta);
    }

    /// Set a joke's votes back to zero
    pub fn reset(&self, id: &JokeId) {
        store_reset(&self.store, id);
    }

    /// Throw the list away and fetch a new one
    pub fn refresh(&self) {
        if store_begin_refresh(&self.store) {
            self.acquire();
        }
    }

    /// Run the acquisition loop in the background
    pub fn acquire(&self) {
        let store = self.store;
        let config = self.config.get_value();
        spawn_local(async move {
            let source = HttpJokeSource::new(config.endpoint.as_str());
            run_acquisition(store, &source, config.policy()).await;
        });
    }
}

/// Get the joke context
pub fn use_joke_context() -> JokeContext {
    expect_context::<JokeContext>()
}
