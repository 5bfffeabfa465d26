//! Joke List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Loading is an
//! explicit state machine: a refresh clears the list and enters `Loading`,
//! and every acquisition run ends in `Populated` or `Failed`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::acquire::{acquire, AcquirePolicy};
use crate::api::JokeSource;
use crate::error::AcquireError;
use crate::jokes;
use crate::models::{Joke, JokeId};
use crate::storage::{save_jokes, JokeStorage};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    /// Acquisition in flight
    #[default]
    Loading,
    Populated,
    /// Last acquisition failed; the reason is shown to the user
    Failed(String),
}

impl LoadState {
    /// State at startup, from whatever was persisted
    pub fn initial(jokes: &[Joke]) -> Self {
        if jokes.is_empty() {
            LoadState::Loading
        } else {
            LoadState::Populated
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Joke list plus its loading state
#[derive(Clone, Debug, Default, Store)]
pub struct JokeState {
    /// Canonical list, in acquisition order
    pub jokes: Vec<Joke>,
    pub load_state: LoadState,
}

impl JokeState {
    pub fn from_saved(jokes: Vec<Joke>) -> Self {
        Self {
            load_state: LoadState::initial(&jokes),
            jokes,
        }
    }
}

/// Type alias for the store
pub type JokeStore = Store<JokeState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the list with one where joke `id` moved by `delta`
pub fn store_vote(store: &JokeStore, id: &JokeId, delta: i32) {
    let next = store.jokes().with_untracked(|list| jokes::vote(list, id, delta));
    store.jokes().set(next);
}

/// Replace the list with one where joke `id` has zero votes
pub fn store_reset(store: &JokeStore, id: &JokeId) {
    let next = store.jokes().with_untracked(|list| jokes::reset(list, id));
    store.jokes().set(next);
}

/// Clear the list and enter `Loading`.
///
/// Returns false (and changes nothing) if an acquisition is already running;
/// the caller starts a new one only on true.
pub fn store_begin_refresh(store: &JokeStore) -> bool {
    if store.load_state().with_untracked(LoadState::is_loading) {
        log::debug!("[JOKES] refresh ignored, already loading");
        return false;
    }
    store.jokes().set(Vec::new());
    store.load_state().set(LoadState::Loading);
    true
}

/// Apply the outcome of an acquisition run
pub fn store_finish(store: &JokeStore, result: Result<Vec<Joke>, AcquireError>) {
    match result {
        Ok(list) => {
            store.jokes().set(list);
            store.load_state().set(LoadState::Populated);
        }
        Err(e) => {
            log::error!("[JOKES] could not load jokes: {}", e);
            store.load_state().set(LoadState::Failed(e.to_string()));
        }
    }
}

/// Persist every version of the list, including the empty one a refresh leaves
pub fn sync_to_storage<S>(store: JokeStore, storage: S)
where
    S: JokeStorage + 'static,
{
    Effect::new(move |_| {
        let jokes = store.jokes().get();
        if let Err(e) = save_jokes(&storage, &jokes) {
            log::error!("[STORAGE] could not save {} jokes: {}", jokes.len(), e);
        }
    });
}

/// Top the current list up to `policy.target` and record the outcome
pub async fn run_acquisition<S>(store: JokeStore, source: &S, policy: AcquirePolicy)
where
    S: JokeSource + ?Sized,
{
    let existing = store.jokes().get_untracked();
    log::info!(
        "[JOKES] acquiring {} jokes ({} already present)",
        policy.target,
        existing.len()
    );
    let result = acquire(source, existing, policy).await;
    store_finish(&store, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquire::tests::MockSource;
    use crate::error::FetchError;
    use crate::storage::tests::MemoryStorage;
    use any_spawner::Executor;
    use tokio::task::LocalSet;

    /// Let pending effects run
    async fn settle() {
        Executor::tick().await;
        Executor::tick().await;
    }

    fn make_joke(id: &str, votes: i32) -> Joke {
        Joke {
            id: JokeId::from(id),
            joke: format!("Joke {}", id),
            votes,
        }
    }

    fn populated_store() -> JokeStore {
        Store::new(JokeState::from_saved(vec![
            make_joke("a", 2),
            make_joke("b", 5),
            make_joke("c", -1),
        ]))
    }

    fn policy(target: usize) -> AcquirePolicy {
        AcquirePolicy { target, max_attempts: 50 }
    }

    #[test]
    fn test_initial_state_follows_saved_list() {
        assert_eq!(LoadState::initial(&[]), LoadState::Loading);
        assert_eq!(LoadState::initial(&[make_joke("a", 0)]), LoadState::Populated);
    }

    #[test]
    fn test_vote_and_reset_replace_list() {
        let store = populated_store();
        let before = store.jokes().get_untracked();

        store_vote(&store, &JokeId::from("a"), 1);
        store_vote(&store, &JokeId::from("c"), -1);
        let after = store.jokes().get_untracked();
        assert_eq!(after[0].votes, 3);
        assert_eq!(after[1].votes, 5);
        assert_eq!(after[2].votes, -2);
        // earlier snapshot unaffected
        assert_eq!(before[0].votes, 2);

        store_reset(&store, &JokeId::from("b"));
        assert_eq!(store.jokes().get_untracked()[1].votes, 0);
        assert_eq!(store.jokes().get_untracked().len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_reacquires_with_same_target() {
        let store = populated_store();
        assert_eq!(store.load_state().get_untracked(), LoadState::Populated);

        assert!(store_begin_refresh(&store));
        assert!(store.jokes().get_untracked().is_empty());
        assert_eq!(store.load_state().get_untracked(), LoadState::Loading);

        let source = MockSource::new(&["d", "e", "f"]);
        run_acquisition(store, &source, policy(3)).await;

        let list = store.jokes().get_untracked();
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|j| j.votes == 0));
        assert_eq!(source.calls.get(), 3);
        assert_eq!(store.load_state().get_untracked(), LoadState::Populated);
    }

    #[test]
    fn test_refresh_ignored_while_loading() {
        let store = Store::new(JokeState::from_saved(Vec::new()));
        store.jokes().set(vec![make_joke("partial", 0)]);

        assert!(!store_begin_refresh(&store));
        assert_eq!(store.jokes().get_untracked().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_acquisition_is_terminal() {
        let store = populated_store();
        assert!(store_begin_refresh(&store));

        let source = MockSource::with_results(vec![Ok("x"), Err(FetchError::Network("offline".to_string()))]);
        run_acquisition(store, &source, policy(5)).await;

        assert!(store.jokes().get_untracked().is_empty());
        assert!(matches!(store.load_state().get_untracked(), LoadState::Failed(_)));

        // a failed run can be retried
        assert!(store_begin_refresh(&store));
        assert_eq!(store.load_state().get_untracked(), LoadState::Loading);
    }

    #[tokio::test]
    async fn test_storage_sees_every_version_of_the_list() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let store = populated_store();
                let initial = serde_json::to_string(&store.jokes().get_untracked()).unwrap();
                let storage = MemoryStorage::default();
                let writes = storage.writes.clone();

                sync_to_storage(store, storage);
                settle().await;

                assert!(store_begin_refresh(&store));
                settle().await;

                let source = MockSource::new(&["d", "e"]);
                run_acquisition(store, &source, policy(2)).await;
                settle().await;

                let populated = serde_json::to_string(&store.jokes().get_untracked()).unwrap();
                assert_eq!(*writes.borrow(), vec![initial, "[]".to_string(), populated]);
            })
            .await;
    }
}
