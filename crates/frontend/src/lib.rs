//! Portfolio - Yew WASM Frontend
//!
//! Single-page application that loads the project list once and drives
//! scroll-linked entrance animations over the rendered cards.

mod anim;
mod api;
mod app;
mod components;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
