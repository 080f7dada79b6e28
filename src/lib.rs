//! Client-side viewer for a scraped problem catalog.
//!
//! Two page flows share one pipeline: fetch JSON, derive a view from the
//! query state, render markup with escaping enforced by the type system,
//! and (detail page only) post-process the injected body with optional
//! third-party renderers.
//!
//! The pure core (`models`, `markup`, `query`, `render`, `error`) compiles
//! and tests on any target; the browser shell is wasm-only.

pub mod error;
pub mod markup;
pub mod models;
pub mod query;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod capability;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod pages;

#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();

    pages::init_list_page();
    pages::init_detail_page();
}
