//! JavaScript handle over [`ListStore`] for hosts that render the list themselves.

use wasm_bindgen::prelude::*;

use crate::store::ListStore;
use crate::types::ItemId;

#[wasm_bindgen]
#[derive(Default)]
pub struct ListHandle {
    store: ListStore,
}

#[wasm_bindgen]
impl ListHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id.
    pub fn add(&mut self, text: String) -> String {
        let state = self.store.add(text);
        let id = state.items().last().map(|item| item.id().to_string()).unwrap_or_default();
        web_sys::console::log_1(&format!("[ListHandle] added item {}", id).into());
        id
    }

    /// Remove an entry. Ids that do not parse cannot match and are ignored.
    pub fn remove(&mut self, id: &str) {
        match id.parse::<ItemId>() {
            Ok(id) => {
                self.store.remove(id);
            }
            Err(e) => {
                web_sys::console::log_1(&format!("[ListHandle] ignoring remove of {:?}: {}", id, e).into());
            }
        }
    }

    /// Current `{ items, isEmpty }` snapshot as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&*self.store.snapshot()).map_err(Into::into)
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }
}
