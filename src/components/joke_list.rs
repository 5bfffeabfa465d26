//! Joke List Component
//!
//! Loads the saved list, keeps localStorage in sync with it and renders the
//! jokes sorted by votes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FailurePanel, JokeRow, LoadingSpinner};
use crate::config::{JokeListConfig, DEFAULT_TARGET};
use crate::context::JokeContext;
use crate::jokes::sorted_by_votes;
use crate::models::Joke;
use crate::storage::{load_jokes, BrowserStorage};
use crate::store::{sync_to_storage, JokeState, JokeStateStoreFields, LoadState};

/// List of jokes with vote controls and a refresh button
#[component]
pub fn JokeList(
    #[prop(default = DEFAULT_TARGET)] num_jokes_to_get: usize,
) -> impl IntoView {
    let config = JokeListConfig::default().with_target(num_jokes_to_get);
    let storage = BrowserStorage::new(config.storage_key.as_str());

    let saved = load_jokes(&storage);
    log::info!("[JOKES] loaded {} saved jokes", saved.len());

    let store = Store::new(JokeState::from_saved(saved));
    let ctx = JokeContext::new(store, config);
    provide_context(ctx);

    sync_to_storage(store, storage);

    if store.load_state().get_untracked().is_loading() {
        ctx.acquire();
    }

    let sorted = move || sorted_by_votes(&store.jokes().get());
    // votes are part of the key so a changed score re-renders its row
    let row_key = |joke: &Joke| (joke.id.clone(), joke.votes);

    view! {
        {move || match store.load_state().get() {
            LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
            LoadState::Failed(reason) => view! { <FailurePanel reason=reason /> }.into_any(),
            LoadState::Populated => view! {
                <div class="JokeList">
                    <button class="JokeList-getmore" on:click=move |_| ctx.refresh()>
                        "Get New Jokes"
                    </button>

                    <For
                        each=sorted
                        key=row_key
                        children=move |joke| view! { <JokeRow joke=joke /> }
                    />
                </div>
            }.into_any(),
        }}
    }
}
