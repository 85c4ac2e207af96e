use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyNoticeProps {
    pub message: AttrValue,
}

#[function_component(EmptyNotice)]
pub fn empty_notice(props: &EmptyNoticeProps) -> Html {
    html! {
        <div class="empty-alert" style="padding:1em; background:#fff3cd; border:1px solid #ffeeba; border-radius:4px; color:#856404;">
            <span>{ &*props.message }</span>
        </div>
    }
}
