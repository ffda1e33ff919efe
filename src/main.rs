//! Job Board Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod models;
mod session;
mod storage;
mod store;
mod submissions;
mod view;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&format!("logger already set: {}", err)));
    }
    mount_to_body(App);
}
