//! List state and the store that owns it.
//!
//! `ListState` is an immutable snapshot. Every action produces a new snapshot,
//! so Yew components can drive it with `use_reducer` and plain Rust callers can
//! go through `ListStore`.

use std::rc::Rc;

use serde::Serialize;
use yew::Reducible;

use crate::types::{Item, ItemId};

/// Ordered items plus the cached empty flag shown by the empty-state notice.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListState {
    items: Vec<Item>,
    is_empty: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_empty: true,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The cached flag, updated on every mutation rather than on read.
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Snapshot with a new entry appended after all existing ones.
    pub fn with_added(&self, text: impl Into<String>) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(Item::new(text));
        Self {
            items,
            is_empty: false,
        }
    }

    /// Snapshot without the entry `id`. Unknown ids leave the items as they were.
    pub fn without(&self, id: ItemId) -> Self {
        let items: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        let is_empty = items.is_empty();
        Self { items, is_empty }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    Add(String),
    Remove(ItemId),
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ListAction::Add(text) => Rc::new(self.with_added(text)),
            ListAction::Remove(id) => Rc::new(self.without(id)),
        }
    }
}

/// Owner of the current snapshot for callers outside a Yew component.
#[derive(Clone, Debug, Default)]
pub struct ListStore {
    state: Rc<ListState>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Rc<ListState> {
        Rc::clone(&self.state)
    }

    pub fn items(&self) -> &[Item] {
        self.state.items()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn dispatch(&mut self, action: ListAction) -> Rc<ListState> {
        self.state = Rc::clone(&self.state).reduce(action);
        self.snapshot()
    }

    pub fn add(&mut self, text: impl Into<String>) -> Rc<ListState> {
        self.dispatch(ListAction::Add(text.into()))
    }

    pub fn remove(&mut self, id: ItemId) -> Rc<ListState> {
        self.dispatch(ListAction::Remove(id))
    }
}
