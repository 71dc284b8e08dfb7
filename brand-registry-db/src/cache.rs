//! In-process cache of index models, keyed by primary key with secondary
//! lookups over hashed string keys and foreign-key uuids.
//!
//! The cache is a pre-flight helper for uniqueness and ownership checks; the
//! authoritative guarantee stays with the storage-level constraints.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

/// Trait for index records exposing their primary key.
pub trait HasPrimaryKey {
    fn primary_key(&self) -> Uuid;
}

/// Trait for index records exposing their secondary lookup keys.
pub trait Indexable {
    /// Named i64 keys (hashed strings, numeric identifiers).
    fn i64_keys(&self) -> HashMap<String, Option<i64>>;

    /// Named uuid keys (foreign keys).
    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>>;
}

/// Index-model cache with secondary indexes per named key.
#[derive(Debug, Default)]
pub struct IdxModelCache<T> {
    by_primary: HashMap<Uuid, T>,
    i64_index: HashMap<String, HashMap<i64, HashSet<Uuid>>>,
    uuid_index: HashMap<String, HashMap<Uuid, HashSet<Uuid>>>,
}

impl<T: HasPrimaryKey + Indexable + Clone> IdxModelCache<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut cache = Self {
            by_primary: HashMap::new(),
            i64_index: HashMap::new(),
            uuid_index: HashMap::new(),
        };
        for item in items {
            cache.add(item);
        }
        cache
    }

    /// Insert or replace an index record; secondary indexes follow.
    pub fn add(&mut self, item: T) {
        let id = item.primary_key();
        self.remove(&id);

        for (key, value) in item.i64_keys() {
            if let Some(value) = value {
                self.i64_index
                    .entry(key)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .insert(id);
            }
        }
        for (key, value) in item.uuid_keys() {
            if let Some(value) = value {
                self.uuid_index
                    .entry(key)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .insert(id);
            }
        }
        self.by_primary.insert(id, item);
    }

    /// Remove a record and its secondary index entries.
    pub fn remove(&mut self, id: &Uuid) {
        let Some(item) = self.by_primary.remove(id) else {
            return;
        };
        for (key, value) in item.i64_keys() {
            if let Some(value) = value {
                if let Some(bucket) = self.i64_index.get_mut(&key).and_then(|m| m.get_mut(&value)) {
                    bucket.remove(id);
                }
            }
        }
        for (key, value) in item.uuid_keys() {
            if let Some(value) = value {
                if let Some(bucket) = self.uuid_index.get_mut(&key).and_then(|m| m.get_mut(&value))
                {
                    bucket.remove(id);
                }
            }
        }
    }

    /// Drop every record whose uuid key `key` equals `value`; returns how
    /// many were evicted. Used to propagate storage-level cascades.
    pub fn remove_by_uuid_index(&mut self, key: &str, value: &Uuid) -> usize {
        let ids: Vec<Uuid> = self
            .uuid_index
            .get(key)
            .and_then(|m| m.get(value))
            .map(|bucket| bucket.iter().copied().collect())
            .unwrap_or_default();
        for id in &ids {
            self.remove(id);
        }
        ids.len()
    }

    pub fn contains_primary(&self, id: &Uuid) -> bool {
        self.by_primary.contains_key(id)
    }

    pub fn get_by_primary(&self, id: &Uuid) -> Option<T> {
        self.by_primary.get(id).cloned()
    }

    pub fn get_by_i64_index(&self, key: &str, value: &i64) -> Vec<T> {
        self.i64_index
            .get(key)
            .and_then(|m| m.get(value))
            .map(|bucket| {
                bucket
                    .iter()
                    .filter_map(|id| self.by_primary.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_by_uuid_index(&self, key: &str, value: &Uuid) -> Vec<T> {
        self.uuid_index
            .get(key)
            .and_then(|m| m.get(value))
            .map(|bucket| {
                bucket
                    .iter()
                    .filter_map(|id| self.by_primary.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_primary.is_empty()
    }
}
