//! Integration tests for the list store

use std::collections::HashSet;

use item_list::{Item, ItemId, ListAction, ListState, ListStore};

fn texts(state: &ListState) -> Vec<String> {
    state.items().iter().map(|item| item.text().to_string()).collect()
}

#[test]
fn milk_and_bread_walkthrough() {
    let mut store = ListStore::new();
    assert!(store.is_empty());
    assert!(store.items().is_empty());

    let state = store.add("milk");
    assert_eq!(texts(&state), ["milk"]);
    assert!(!state.is_empty());

    let state = store.add("bread");
    assert_eq!(texts(&state), ["milk", "bread"]);
    assert!(!state.is_empty());

    let milk = state.items()[0].id();
    let bread = state.items()[1].id();

    let state = store.remove(milk);
    assert_eq!(texts(&state), ["bread"]);
    assert!(!state.is_empty());

    let state = store.remove(bread);
    assert!(state.items().is_empty());
    assert!(state.is_empty());
}

#[test]
fn identical_texts_get_distinct_ids() {
    let mut store = ListStore::new();
    for _ in 0..50 {
        store.add("same");
    }
    let ids: HashSet<ItemId> = store.items().iter().map(Item::id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn removing_twice_is_harmless() {
    let mut store = ListStore::new();
    store.add("milk");
    let id = store.items()[0].id();
    store.remove(id);
    let state = store.remove(id);
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
}

#[test]
fn empty_text_is_not_rejected_by_the_store() {
    let mut store = ListStore::new();
    let state = store.add("   ");
    assert_eq!(state.len(), 1);
    assert!(!state.is_empty());
}

#[test]
fn old_snapshots_survive_mutation() {
    let mut store = ListStore::new();
    let one = store.add("milk");
    let two = store.add("bread");
    let id = two.items()[0].id();
    store.remove(id);

    assert_eq!(texts(&one), ["milk"]);
    assert_eq!(texts(&two), ["milk", "bread"]);
    assert_eq!(texts(&store.snapshot()), ["bread"]);
}

#[test]
fn timestamps_do_not_go_backwards() {
    let mut store = ListStore::new();
    store.add("first");
    store.add("second");
    let items = store.items();
    assert!(items[0].timestamp() <= items[1].timestamp());
}

#[test]
fn dispatch_accepts_actions() {
    let mut store = ListStore::new();
    let state = store.dispatch(ListAction::Add("milk".to_string()));
    let id = state.items()[0].id();
    let state = store.dispatch(ListAction::Remove(id));
    assert!(state.is_empty());
}

#[test]
fn snapshot_json_shape() {
    let mut store = ListStore::new();
    store.add("milk");
    let json = serde_json::to_value(&*store.snapshot()).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(json["isEmpty"], false);

    let item = &json["items"][0];
    assert_eq!(item["text"], "milk");
    assert!(item["id"].is_string());
    assert!(item["timestamp"].is_i64());
}
