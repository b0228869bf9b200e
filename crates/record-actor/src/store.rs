//! # Record Store
//!
//! The collection a [`ResourceActor`](crate::ResourceActor) mutates. The actor owns
//! its store outright and processes one request at a time, so implementations need
//! no locking of their own.
//!
//! [`MemoryStore`] is the in-memory backend. Anything that can scan, find, append,
//! replace and remove records by id can stand in for it (e.g. a persistent backend)
//! without touching the entity hooks.

use crate::entity::ActorEntity;

/// Storage seam used by `ResourceActor`.
pub trait RecordStore<T: ActorEntity>: Send {
    /// Snapshot of every record, in insertion order.
    fn scan(&self) -> Vec<T>;

    /// Looks up a record by id.
    fn find(&self, id: &T::Id) -> Option<&T>;

    /// Appends a new record.
    fn append(&mut self, record: T);

    /// Replaces the record stored under `id`, returning the previous one.
    /// Returns `None` (and stores nothing) when `id` is unknown.
    fn replace(&mut self, id: &T::Id, record: T) -> Option<T>;

    /// Removes the record stored under `id`.
    fn remove(&mut self, id: &T::Id) -> Option<T>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &T::Id) -> bool {
        self.find(id).is_some()
    }
}

/// `Vec`-backed store that keeps records in the order they were appended.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Vec<T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with `records` (e.g. seed data).
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MemoryStore<T> {
    fn position(&self, id: &T::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<T: ActorEntity> RecordStore<T> for MemoryStore<T> {
    fn scan(&self) -> Vec<T> {
        self.records.clone()
    }

    fn find(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn append(&mut self, record: T) {
        self.records.push(record);
    }

    fn replace(&mut self, id: &T::Id, record: T) -> Option<T> {
        let idx = self.position(id)?;
        Some(std::mem::replace(&mut self.records[idx], record))
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        let idx = self.position(id)?;
        Some(self.records.remove(idx))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = String;
        type Update = String;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> {
            Ok(Self { id, text })
        }

        async fn on_update(&mut self, text: String, _ctx: &()) -> Result<(), NoteError> {
            self.text = text;
            Ok(())
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_scan_keeps_insertion_order() {
        let mut store = MemoryStore::new();
        store.append(note(3, "c"));
        store.append(note(1, "a"));
        store.append(note(2, "b"));

        let ids: Vec<u32> = store.scan().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = MemoryStore::with_records(vec![note(1, "a"), note(2, "b")]);

        let previous = store.replace(&1, note(1, "z"));
        assert_eq!(previous, Some(note(1, "a")));
        assert_eq!(store.scan(), vec![note(1, "z"), note(2, "b")]);
    }

    #[test]
    fn test_replace_unknown_id_stores_nothing() {
        let mut store = MemoryStore::with_records(vec![note(1, "a")]);

        assert!(store.replace(&9, note(9, "x")).is_none());
        assert_eq!(store.len(), 1);
        assert!(!store.contains(&9));
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::with_records(vec![note(1, "a"), note(2, "b")]);

        assert_eq!(store.remove(&1), Some(note(1, "a")));
        assert!(store.remove(&1).is_none());
        assert_eq!(store.scan(), vec![note(2, "b")]);
        assert!(!store.is_empty());
    }
}
