// web_app/pages/catalog.rs - Product catalog page
//
// Fetches the product list once and hands it to the product table. Until
// the fetch resolves only the loading indicator is shown; if it fails the
// indicator's text is replaced by the error message and the table, search
// box and pagination never appear.

use leptos::prelude::*;
use crate::web_app::components::*;
use crate::web_app::model::Product;
use crate::web_app::server_fns::fetch_products;
use crate::web_app::state::LoadState;

/// Main catalog page component
#[component]
pub fn CatalogPage() -> impl IntoView {
    // Fetched exactly once per page load; there is no source to re-trigger it
    let products = Resource::new(|| (), |_| fetch_products());

    view! {
        <div class="catalog-page">
            <header class="catalog-header">
                <h1>"Product List"</h1>
            </header>

            <main class="catalog-main">
                <Suspense fallback=move || view! { <LoadIndicator state=LoadState::Loading /> }>
                    {move || catalog_content(products.get())}
                </Suspense>
            </main>
        </div>
    }
}

/// Body of the catalog page for the fetch's current outcome
pub fn catalog_content(result: Option<Result<Vec<Product>, ServerFnError>>) -> AnyView {
    let state = LoadState::from_result(result.as_ref());

    match result {
        Some(Ok(list)) if state.shows_table() => view! {
            <ProductTable products=list />
        }.into_any(),
        other => {
            if let Some(Err(e)) = &other {
                leptos::logging::error!("Error loading products: {}", e);
            }
            view! { <LoadIndicator state=state /> }.into_any()
        }
    }
}
