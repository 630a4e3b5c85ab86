//! # Entity Store
//!
//! The in-memory table owned by a single `ResourceActor`. Rows are kept in insertion
//! order with a key index on the side, so queries iterate rows in creation order.
//! Rows are never removed.

use crate::entity::ActorEntity;
use std::collections::HashMap;

/// Insertion-ordered table of rows keyed by `T::Id`.
pub struct EntityStore<T: ActorEntity> {
    rows: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).and_then(|&slot| self.rows.get(slot))
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        match self.index.get(id) {
            Some(&slot) => self.rows.get_mut(slot),
            None => None,
        }
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates rows oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inserts a row under its own key. Returns the row back if the key is taken.
    pub fn insert(&mut self, row: T) -> Result<(), T> {
        let id = row.id().clone();
        if self.index.contains_key(&id) {
            return Err(row);
        }
        self.index.insert(id, self.rows.len());
        self.rows.push(row);
        Ok(())
    }
}
