use yew::prelude::*;

use crate::components::{EmptyNotice, ItemForm, ItemList};
use crate::config::Config;
use crate::store::{ListAction, ListState};
use crate::types::ItemId;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let list = use_reducer(ListState::new);
    let config = &props.config;
    let labels = &config.labels;

    let on_add = {
        let list = list.clone();
        Callback::from(move |text: String| {
            web_sys::console::log_1(&format!("[ItemList] adding item ({} chars)", text.len()).into());
            list.dispatch(ListAction::Add(text));
        })
    };

    let on_remove = {
        let list = list.clone();
        Callback::from(move |id: ItemId| {
            web_sys::console::log_1(&format!("[ItemList] removing item {}", id).into());
            list.dispatch(ListAction::Remove(id));
        })
    };

    html! {
        <main style="display:flex; flex-direction:row; height:100vh; font-family:Arial,sans-serif;">
            <aside style="width:350px; min-width:350px; padding:1.5em; background:#f8f9fa; border-right:1px solid #ddd; display:flex; flex-direction:column; gap:1em;">
                <h1 style="margin:0; color:#333;">{ &labels.title }</h1>
                <h2 style="margin:0; color:#555; font-size:1.1em;">{ &labels.subtitle }</h2>
                <ItemForm
                    input_name={config.input_name.clone()}
                    labels={labels.clone()}
                    {on_add}
                />
            </aside>
            <section style="flex:1; display:flex; flex-direction:column; padding:1em; gap:1em; overflow-y:auto;">
                <h2 style="margin:0;">{ &labels.list_heading }</h2>
                if list.is_empty() {
                    <EmptyNotice message={labels.empty_notice.clone()} />
                }
                <ItemList
                    items={list.items().to_vec()}
                    delete_label={labels.delete_button.clone()}
                    {on_remove}
                />
            </section>
        </main>
    }
}
