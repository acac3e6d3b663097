//! Loading indicator shown while the project fetch is outstanding.

use yew::prelude::*;

/// Loading indicator component.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p class="loading-label">{"Loading projects..."}</p>
        </div>
    }
}
