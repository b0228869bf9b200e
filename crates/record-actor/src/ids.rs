//! # Id Generation
//!
//! A [`ResourceActor`](crate::ResourceActor) draws the id of every new record from an
//! injected [`IdGenerator`]. Plain closures work (`move || { … }`), and two ready-made
//! generators cover the common cases.

use uuid::Uuid;

/// Source of fresh record ids.
pub trait IdGenerator<Id>: Send {
    fn next_id(&mut self) -> Id;
}

impl<Id, F> IdGenerator<Id> for F
where
    F: FnMut() -> Id + Send,
{
    fn next_id(&mut self) -> Id {
        self()
    }
}

/// Prefix + counter ids: `d1`, `d2`, …
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator<String> for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// 32-character lowercase hex ids taken from a random v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator<String> for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("d");
        assert_eq!(ids.next_id(), "d1");
        assert_eq!(ids.next_id(), "d2");
        assert_eq!(ids.next_id(), "d3");
    }

    #[test]
    fn test_random_ids_are_hex_and_distinct() {
        let mut ids = RandomIds;
        let drawn: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(drawn.len(), 100);
        assert!(drawn
            .iter()
            .all(|id| id.len() == 32 && id.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn test_closure_is_a_generator() {
        let mut counter = 0u32;
        let mut next = move || {
            counter += 10;
            counter
        };
        assert_eq!(IdGenerator::next_id(&mut next), 10);
        assert_eq!(IdGenerator::next_id(&mut next), 20);
    }
}
