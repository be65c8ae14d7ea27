//! Entity storage and positional queries

use serde::{Deserialize, Serialize};

use crate::dungeon::Grid;

use super::{Entity, EntityId, Position, RenderLayer};

/// Ordered collection of a level's entities
///
/// Iteration order is insertion order, which is also the order monsters
/// take their turns in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity, assigning it a fresh id
    pub fn insert(&mut self, mut entity: Entity) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        entity.id = id;
        self.entities.push(entity);
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.entities.remove(index))
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Ids of entities that currently have an Ai, in turn order
    pub fn ids_with_ai(&self) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.ai.is_some())
            .map(|e| e.id)
            .collect()
    }

    pub fn entities_at(&self, pos: Position) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.pos == pos)
    }

    pub fn blocking_at(&self, pos: Position) -> Option<EntityId> {
        self.entities_at(pos).find(|e| e.blocks).map(|e| e.id)
    }

    /// First entity with a Fighter on `pos`, blocking or not
    pub fn fighter_at(&self, pos: Position) -> Option<EntityId> {
        self.entities_at(pos)
            .find(|e| e.fighter.is_some())
            .map(|e| e.id)
    }

    pub fn item_at(&self, pos: Position) -> Option<EntityId> {
        self.entities_at(pos).find(|e| e.item.is_some()).map(|e| e.id)
    }

    /// Terrain or a blocking entity prevents entering `pos`
    pub fn is_blocked(&self, grid: &Grid, pos: Position) -> bool {
        grid.is_blocked(pos) || self.blocking_at(pos).is_some()
    }

    /// Entities in draw order: floor layer first, insertion order within a layer
    pub fn draw_order(&self) -> Vec<&Entity> {
        let mut ordered: Vec<&Entity> = self.entities.iter().collect();
        ordered.sort_by_key(|e| e.layer);
        ordered
    }

    /// Move an entity to the floor layer so live entities draw over it
    pub fn send_to_back(&mut self, id: EntityId) {
        if let Some(entity) = self.get_mut(id) {
            entity.layer = RenderLayer::Floor;
        }
    }
}
