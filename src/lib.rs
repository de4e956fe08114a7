mod app;
mod logging;
mod pages;

pub mod catalog;
pub mod config;
pub mod plan;
pub mod player;
pub mod state;
pub mod storage;
pub mod types;

use wasm_bindgen::prelude::*;
use leptos::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    logging::init(config::AppConfig::default().log_level);

    mount_to_body(app::App);
}
