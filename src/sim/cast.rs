//! Cast: the actor arena and its named groups
//!
//! Actors live in one arena for the life of the game and are referenced by
//! [`ActorId`]. Groups are ordered lists of ids; an id appears at most once
//! per group but may sit in several groups. Groups iterate in name order.

use std::collections::BTreeMap;

use serde::Serialize;

use super::actor::Actor;
use crate::CastError;

/// Handle to an actor in a [`Cast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ActorId(usize);

impl ActorId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A collection of actors addressed by group name
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cast {
    actors: Vec<Actor>,
    groups: BTreeMap<String, Vec<ActorId>>,
}

impl Cast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move an actor into the arena. It belongs to no group yet.
    pub fn spawn(&mut self, actor: Actor) -> ActorId {
        let id = ActorId(self.actors.len());
        self.actors.push(actor);
        id
    }

    /// Spawn an actor and add it to `group` in one step
    pub fn spawn_into(&mut self, group: &str, actor: Actor) -> ActorId {
        let id = self.spawn(actor);
        self.add_actor(group, id);
        id
    }

    /// Add an actor to a group. No-op if it is already a member.
    pub fn add_actor(&mut self, group: &str, id: ActorId) {
        let members = self.groups.entry(group.to_string()).or_default();
        if !members.contains(&id) {
            members.push(id);
        }
    }

    /// Members of `group` in insertion order; empty if the group is absent
    pub fn get_actors(&self, group: &str) -> Vec<ActorId> {
        self.groups.get(group).cloned().unwrap_or_default()
    }

    /// First member of `group`, if any
    pub fn get_first_actor(&self, group: &str) -> Option<ActorId> {
        self.groups.get(group).and_then(|members| members.first().copied())
    }

    /// Every group's members, group by group
    pub fn get_all_actors(&self) -> Vec<ActorId> {
        self.groups.values().flatten().copied().collect()
    }

    /// Remove an actor from a group. The actor stays in the arena.
    pub fn remove_actor(&mut self, group: &str, id: ActorId) -> Result<(), CastError> {
        let members = self
            .groups
            .get_mut(group)
            .ok_or_else(|| CastError::GroupNotFound(group.to_string()))?;
        let pos = members
            .iter()
            .position(|&m| m == id)
            .ok_or_else(|| CastError::ActorNotFound {
                group: group.to_string(),
                actor: id.index(),
            })?;
        members.remove(pos);
        Ok(())
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }

    pub fn actor_mut(&mut self, id: ActorId) -> &mut Actor {
        &mut self.actors[id.0]
    }

    /// Actors in draw order (same order as [`Cast::get_all_actors`])
    pub fn snapshot(&self) -> Vec<&Actor> {
        self.groups
            .values()
            .flatten()
            .map(|&id| &self.actors[id.0])
            .collect()
    }

    /// Number of actors in the arena
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
