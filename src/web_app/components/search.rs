// web_app/components/search.rs - Search and pagination controls
//
// These components handle the controls around the product table:
// - SearchBox: Title filter input
// - PageSizeSelect: Items-per-page selector
// - Pagination: Prev/next, numbered page buttons and the "Showing" label
//
// None of them mutate the view state directly; every interaction is sent
// as a `CatalogCommand` through the `dispatch` callback.

use leptos::prelude::*;
use crate::web_app::state::{CatalogCommand, CatalogView, PAGE_SIZE_OPTIONS};

/// Search box filtering products by title as the user types
#[component]
pub fn SearchBox(
    /// Current view state (for the input's value)
    catalog: RwSignal<CatalogView>,
    /// Command sink
    dispatch: Callback<CatalogCommand>,
) -> impl IntoView {
    view! {
        <div id="searchBox" class="search-box">
            <input
                id="searchInput"
                type="text"
                placeholder="Search by title..."
                autocomplete="off"
                prop:value=move || catalog.with(|c| c.query().to_string())
                on:input=move |ev| dispatch.run(CatalogCommand::Search(event_target_value(&ev)))
            />
        </div>
    }
}

/// Items-per-page selector
#[component]
pub fn PageSizeSelect(
    catalog: RwSignal<CatalogView>,
    dispatch: Callback<CatalogCommand>,
) -> impl IntoView {
    view! {
        <label class="page-size">
            "Show"
            <select
                id="itemsPerPage"
                on:change=move |ev| {
                    if let Some(command) = page_size_command(&event_target_value(&ev)) {
                        dispatch.run(command);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || catalog.with(|c| c.page_size()) == size
                        >
                            {size}
                        </option>
                    }
                }).collect_view()}
            </select>
            "per page"
        </label>
    }
}

/// Command for a value picked in the items-per-page selector
pub fn page_size_command(value: &str) -> Option<CatalogCommand> {
    match value.trim().parse::<usize>() {
        Ok(size) => Some(CatalogCommand::SetPageSize(size)),
        Err(e) => {
            leptos::logging::warn!("Ignoring page size {:?}: {}", value, e);
            None
        }
    }
}

/// Pagination controls for the product table
#[component]
pub fn Pagination(
    catalog: RwSignal<CatalogView>,
    dispatch: Callback<CatalogCommand>,
) -> impl IntoView {
    let can_go_prev = move || catalog.with(|c| c.has_prev());
    let can_go_next = move || catalog.with(|c| c.has_next());

    view! {
        <div id="paginationContainer" class="pagination-container">
            <PageSizeSelect catalog=catalog dispatch=dispatch />

            <div class="pagination">
                <button
                    id="prevPage"
                    type="button"
                    disabled=move || !can_go_prev()
                    on:click=move |_| dispatch.run(CatalogCommand::PrevPage)
                >
                    "« Prev"
                </button>

                <div id="pageNumbers" class="page-numbers">
                    {move || {
                        let (current, pages) = catalog.with(|c| (c.page(), c.page_window()));
                        pages.map(|n| {
                            let class = if n == current { "page-number active" } else { "page-number" };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| dispatch.run(CatalogCommand::SetPage(n))
                                >
                                    {n}
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>

                <button
                    id="nextPage"
                    type="button"
                    disabled=move || !can_go_next()
                    on:click=move |_| dispatch.run(CatalogCommand::NextPage)
                >
                    "Next »"
                </button>
            </div>

            <span id="pageInfo" class="page-info">
                {move || catalog.with(|c| c.summary().to_string())}
            </span>
        </div>
    }
}
