use yew::prelude::*;

use crate::types::{Item, ItemId};

#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    pub items: Vec<Item>,
    pub delete_label: AttrValue,
    pub on_remove: Callback<ItemId>,
}

#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    html! {
        <ul style="list-style:none; padding:0; display:flex; flex-direction:column; gap:0.5em;">
            { for props.items.iter().map(|item| {
                let id = item.id();
                let onclick = props.on_remove.reform(move |_: MouseEvent| id);
                html! {
                    <li key={id.to_string()} style="display:flex; justify-content:space-between; align-items:center; padding:0.5em 1em; border:1px solid #ddd; border-radius:4px;">
                        { item.text() }
                        <button type="button" {onclick}>{ &*props.delete_label }</button>
                    </li>
                }
            })}
        </ul>
    }
}
