//! Player inventory
//!
//! Items are kept in pickup order and addressed by letter: the first item is
//! `a`, the second `b`, and so on. Removing an item shifts the letters of
//! everything after it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::INVENTORY_LIMIT;
use crate::entity::Entity;

/// Returned by [`Inventory::push`] with the rejected item
#[derive(Debug, Error)]
#[error("inventory is full")]
pub struct InventoryFull(pub Entity);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Entity>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(INVENTORY_LIMIT)
    }
}

impl Inventory {
    /// Capacity is clamped to the 26 available letters
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(INVENTORY_LIMIT);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Letter of the slot at `index`
    pub fn letter_at(index: usize) -> Option<char> {
        (index < INVENTORY_LIMIT).then(|| (b'a' + index as u8) as char)
    }

    fn index_of(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let index = (letter as u8 - b'a') as usize;
        (index < self.items.len()).then_some(index)
    }

    /// Add an item at the end, returning its letter
    pub fn push(&mut self, item: Entity) -> Result<char, InventoryFull> {
        if self.is_full() {
            return Err(InventoryFull(item));
        }
        // capacity never exceeds the alphabet, so the next slot has a letter
        let letter = (b'a' + self.items.len() as u8) as char;
        self.items.push(item);
        Ok(letter)
    }

    pub fn get(&self, letter: char) -> Option<&Entity> {
        self.index_of(letter).map(|i| &self.items[i])
    }

    pub fn remove(&mut self, letter: char) -> Option<Entity> {
        self.index_of(letter).map(|i| self.items.remove(i))
    }

    /// Items with their letters, in order
    pub fn iter(&self) -> impl Iterator<Item = (char, &Entity)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| Self::letter_at(i).map(|letter| (letter, item)))
    }
}
