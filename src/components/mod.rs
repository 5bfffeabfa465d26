//! UI Components
//!
//! Leptos components of the joke list.

mod joke_list;
mod joke_row;
mod loading_spinner;
mod failure_panel;

pub use joke_list::JokeList;
pub use joke_row::JokeRow;
pub use loading_spinner::LoadingSpinner;
pub use failure_panel::FailurePanel;
