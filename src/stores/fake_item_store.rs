use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::stores::ItemRepository;
use crate::types::internal::Item;

/// In-memory item repository with scriptable failures
///
/// Used by tests and by `--in-memory` demo runs. `list_unavailable`
/// makes `get_all` report absence; `fail_writes` makes create, update and
/// delete report `false` without touching the data.
pub struct FakeItemStore {
    pub items: Mutex<BTreeMap<i32, Item>>,
    pub list_unavailable: AtomicBool,
    pub fail_writes: AtomicBool,
    pub calls: AtomicU64,
    next_id: AtomicI32,
}

impl Default for FakeItemStore {
    fn default() -> Self {
        Self {
            items: Mutex::new(BTreeMap::new()),
            list_unavailable: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            calls: AtomicU64::new(0),
            next_id: AtomicI32::new(1),
        }
    }
}

impl FakeItemStore {
    /// Pre-populate with `items`, keeping their ids
    pub fn with_items(items: Vec<Item>) -> Self {
        let next = items.iter().map(|i| i.item_id).max().unwrap_or(0) + 1;
        let store = Self {
            items: Mutex::new(items.into_iter().map(|i| (i.item_id, i)).collect()),
            ..Self::default()
        };
        store.next_id.store(next, Ordering::Relaxed);
        store
    }

    pub fn set_list_unavailable(&self, unavailable: bool) {
        self.list_unavailable.store(unavailable, Ordering::Relaxed);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Number of repository calls served so far
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub async fn snapshot(&self) -> Vec<Item> {
        self.items.lock().await.values().cloned().collect()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    fn writes_fail(&self) -> bool {
        self.fail_writes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ItemRepository for FakeItemStore {
    async fn get_all(&self) -> Option<Vec<Item>> {
        self.record_call();
        if self.list_unavailable.load(Ordering::Relaxed) {
            return None;
        }
        Some(self.snapshot().await)
    }

    async fn get_item_by_id(&self, id: i32) -> Option<Item> {
        self.record_call();
        self.items.lock().await.get(&id).cloned()
    }

    async fn create(&self, item: &Item) -> bool {
        self.record_call();
        if self.writes_fail() {
            return false;
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = Item {
            item_id: id,
            ..item.clone()
        };
        self.items.lock().await.insert(id, stored);
        true
    }

    async fn update(&self, item: &Item) -> bool {
        self.record_call();
        if self.writes_fail() {
            return false;
        }
        match self.items.lock().await.get_mut(&item.item_id) {
            Some(existing) => {
                *existing = item.clone();
                true
            }
            None => false,
        }
    }

    async fn delete(&self, id: i32) -> bool {
        self.record_call();
        if self.writes_fail() {
            return false;
        }
        self.items.lock().await.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> Item {
        Item {
            item_id: 5,
            name: "Tea".to_string(),
            price: 20.0,
            description: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_after_seeded_items() {
        let store = FakeItemStore::with_items(vec![tea()]);
        assert!(store.create(&Item { item_id: 0, ..tea() }).await);

        let ids: Vec<i32> = store.snapshot().await.iter().map(|i| i.item_id).collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        let store = FakeItemStore::with_items(vec![tea()]);
        store.set_list_unavailable(true);
        store.set_fail_writes(true);

        assert!(store.get_all().await.is_none());
        assert!(!store.delete(5).await);
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let store = FakeItemStore::default();
        assert!(!store.update(&tea()).await);
        assert!(!store.delete(5).await);
    }
}
