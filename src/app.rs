//! Joke List App
//!
//! Page shell around the joke list.

use leptos::prelude::*;

use crate::components::JokeList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="App">
            <h1 class="App-title">"Dad Jokes"</h1>
            <JokeList />
        </main>
    }
}
