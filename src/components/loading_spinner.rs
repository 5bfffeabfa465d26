use leptos::prelude::*;

/// Spinner shown while jokes are being fetched
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <i class="fas fa-4x fa-spinner fa-spin" />
        </div>
    }
}
