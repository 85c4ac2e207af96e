mod empty_notice;
mod item_form;
mod item_list;

pub use empty_notice::EmptyNotice;
pub use item_form::ItemForm;
pub use item_list::ItemList;
