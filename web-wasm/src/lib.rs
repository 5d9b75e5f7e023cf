//! FloraScan Web App (Leptos + WASM)

mod app;
mod components;
mod api;

use gloo::console;
use wasm_bindgen::prelude::*;
use leptos::prelude::*;
use florascan_common::ClientConfig;
use app::App;

pub use app::{SelectedFile, UiState};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = read_config();
    console::log!("FloraScan initialized!");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// `<body>` のdata属性から設定を読む
pub fn read_config() -> ClientConfig {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());

    ClientConfig::from_attrs(|name| {
        body.as_ref()
            .and_then(|b| b.get_attribute(&format!("data-{}", name)))
    })
}
