use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::config::Labels;

#[derive(Properties, PartialEq)]
pub struct ItemFormProps {
    pub input_name: AttrValue,
    pub labels: Labels,
    pub on_add: Callback<String>,
}

/// Text entry form. Emits the raw input value on submit and clears the input.
#[function_component(ItemForm)]
pub fn item_form(props: &ItemFormProps) -> Html {
    let onsubmit = {
        let on_add = props.on_add.clone();
        let input_name = props.input_name.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            // Anything other than the expected text input aborts the submit.
            let Some(input) = event
                .target_dyn_into::<HtmlFormElement>()
                .and_then(|form| form.elements().named_item(&input_name))
                .and_then(|control| control.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };

            on_add.emit(input.value());
            input.set_value("");
        })
    };

    let labels = &props.labels;
    html! {
        <form {onsubmit} style="display:flex; flex-direction:column; gap:0.5em;">
            <label style="display:flex; flex-direction:column; gap:0.5em;">
                { &labels.input_label }
                <input
                    type="text"
                    name={props.input_name.clone()}
                    required=true
                    placeholder={labels.placeholder.clone()}
                    style="padding:0.5em; border:1px solid #ccc; border-radius:4px;"
                />
            </label>
            <button type="submit" style="padding:0.7em 0; font-size:1em;">{ &labels.add_button }</button>
        </form>
    }
}
