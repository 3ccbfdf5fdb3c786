// web_app/components/common.rs - Reusable UI components
//
// The loading indicator is a single `#loading` element whose text follows
// the fetch's `LoadState`, so a failure shows up as a text change in place.

use leptos::prelude::*;

use crate::web_app::state::LoadState;

/// Loading indicator for a fetch that has not produced a table
///
/// Pending fetches get the spinner and the loading message; failed ones get
/// the fixed error message and nothing else.
#[component]
pub fn LoadIndicator(state: LoadState) -> impl IntoView {
    let failed = state == LoadState::Failed;
    let text = state.indicator_text().unwrap_or_default();
    let role = if failed { "alert" } else { "status" };

    view! {
        <div id="loading" class="loading" class:error=failed role=role aria-busy=(!failed).to_string()>
            {(!failed).then(|| view! { <div class="spinner"></div> })}
            <span>{text}</span>
        </div>
    }
}
