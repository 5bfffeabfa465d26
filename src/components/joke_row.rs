//! Joke Row Component
//!
//! One joke with its score and vote controls.

use leptos::prelude::*;

use crate::context::use_joke_context;
use crate::models::Joke;

#[component]
pub fn JokeRow(joke: Joke) -> impl IntoView {
    let ctx = use_joke_context();

    let text = joke.joke;
    let votes = joke.votes;
    let up_id = joke.id.clone();
    let down_id = joke.id.clone();
    let reset_id = joke.id;

    view! {
        <div class="Joke">
            <div class="Joke-votearea">
                <button class="Joke-up" title="Upvote" on:click=move |_| ctx.vote(&up_id, 1)>
                    <i class="fas fa-thumbs-up" />
                </button>

                <span class="Joke-votes">{votes}</span>

                <button class="Joke-down" title="Downvote" on:click=move |_| ctx.vote(&down_id, -1)>
                    <i class="fas fa-thumbs-down" />
                </button>

                <button class="Joke-reset" title="Reset votes" on:click=move |_| ctx.reset(&reset_id)>
                    <i class="fas fa-undo" />
                </button>
            </div>

            <div class="Joke-text">{text}</div>
        </div>
    }
}
