use wasm_bindgen::prelude::*;

pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod store;
pub mod types;

pub use app::{App, AppProps};
pub use bindings::ListHandle;
pub use config::{Config, Labels};
pub use store::{ListAction, ListState, ListStore};
pub use types::{Item, ItemId};

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = Config::default();
    let window = web_sys::window().ok_or("window not available")?;
    let document = window.document().ok_or("document not available")?;
    let root = document
        .get_element_by_id(&config.root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", config.root_id)))?;

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
    Ok(())
}
