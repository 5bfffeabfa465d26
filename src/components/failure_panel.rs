//! Failure Panel Component
//!
//! Shown when an acquisition run fails, with a retry button and the most
//! recent log lines.

use leptos::prelude::*;

use crate::context::use_joke_context;

/// Log lines shown under the error
const LOG_TAIL: usize = 20;

#[component]
pub fn FailurePanel(reason: String) -> impl IntoView {
    let ctx = use_joke_context();
    let log_lines = console_logger::recent(LOG_TAIL).join("\n");

    view! {
        <div class="JokeList-error">
            <p class="JokeList-error-reason">"Could not load jokes: " {reason}</p>
            <button class="JokeList-getmore" on:click=move |_| ctx.refresh()>
                "Try Again"
            </button>
            <details class="JokeList-log">
                <summary>"Details"</summary>
                <pre>{log_lines}</pre>
            </details>
        </div>
    }
}
