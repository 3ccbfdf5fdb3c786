// lib.rs - Root module for the product_table library
//
// The same library is compiled twice: natively with `ssr` for the server
// binary, and to WASM with `hydrate` for the browser, where `hydrate()` is
// the entry point.

pub mod web_app;

/// Reusable product catalogs for tests
pub mod fixtures;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
