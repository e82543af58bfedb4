//! Browser front end for the folio portfolio page.
//!
//! On load the module finds the page's elements, reads the optional
//! configuration document, builds a [`folio_core::Page`] driven by browser
//! timers and wires DOM events into it. After every message the page state
//! is diffed against what was last written and only the changes reach the
//! DOM (see [`render`]).

#![allow(missing_docs)]

pub mod error;
pub mod logging;
pub mod render;
pub mod selectors;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod scheduler;
#[cfg(target_arch = "wasm32")]
mod subscriptions;
#[cfg(target_arch = "wasm32")]
mod view;

pub use error::DomError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init(folio_config::constants::logging::DEFAULT_LEVEL);
    app::mount_when_ready().map_err(JsValue::from)
}

/// Tear the page session down. Mostly useful for hot reload.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    app::unmount();
}
