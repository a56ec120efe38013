use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use tasklist_server::{new_id, Item, ItemStore, ItemText, JsonFileStore, StoreConfig};
use tempfile::TempDir;

#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Toggle(usize),
    Rename(usize, String),
    Delete(usize),
    ClearCompleted,
}

fn arb_text() -> impl Strategy<Value = String> {
    "[ ]{0,2}[a-zA-Z0-9\"\\\\é✓ ]{1,24}[ ]{0,2}"
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_text().prop_map(Op::Create),
        2 => any::<usize>().prop_map(Op::Toggle),
        1 => (any::<usize>(), arb_text()).prop_map(|(i, s)| Op::Rename(i, s)),
        1 => any::<usize>().prop_map(Op::Delete),
        1 => Just(Op::ClearCompleted),
    ]
}

fn apply(items: &mut Vec<Item>, op: Op, tick: i64) {
    match op {
        Op::Create(text) => {
            let created_at = Utc.timestamp_millis_opt(1_700_000_000_000 + tick).unwrap();
            let item = Item::new(new_id(), ItemText::new(&text).unwrap(), created_at);
            items.insert(0, item);
        }
        Op::Toggle(i) if !items.is_empty() => {
            let n = items.len();
            items[i % n].completed = !items[i % n].completed;
        }
        Op::Rename(i, text) if !items.is_empty() => {
            let n = items.len();
            items[i % n].text = ItemText::new(&text).unwrap().into_string();
        }
        Op::Delete(i) if !items.is_empty() => {
            let n = items.len();
            items.remove(i % n);
        }
        Op::ClearCompleted => items.retain(|item| !item.completed),
        _ => {}
    }
}

proptest! {
    /// Property: load_all right after save_all returns exactly what was saved
    #[test]
    fn prop_save_then_load_round_trips(ops in prop::collection::vec(arb_op(), 0..40)) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(&StoreConfig::with_path(temp.path().join("items.json")));

        let mut items = Vec::new();
        for (tick, op) in ops.into_iter().enumerate() {
            apply(&mut items, op, tick as i64);
            rt.block_on(store.save_all(&items)).unwrap();
            let loaded = rt.block_on(store.load_all());
            prop_assert_eq!(&loaded, &items);
        }
    }

    /// Property: stored text is always trimmed and non-empty
    #[test]
    fn prop_item_text_is_trimmed(raw in "\\PC{0,40}") {
        match ItemText::new(&raw) {
            Ok(text) => {
                prop_assert!(!text.as_str().is_empty());
                prop_assert_eq!(text.as_str(), raw.trim());
            }
            Err(_) => prop_assert!(raw.trim().is_empty()),
        }
    }
}

#[test]
fn ids_are_unique_over_large_sample() {
    let ids: HashSet<String> = (0..100_000).map(|_| new_id()).collect();
    assert_eq!(ids.len(), 100_000);
}
