//! Shared object prototypes.
//!
//! Every thing in a `ThingGroup` shares that group's prototype, so replacing
//! a prototype's collision predicate changes behavior for the whole group.
//! The store is created once by the host and passed to whatever mutates it.

use schema::{IntoEnumIterator, ThingGroup};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decides whether `thing` collides with `other`.
pub type CollideFn = fn(&Thing, &Thing) -> bool;

/// A placed object with an axis-aligned bounding box.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Thing {
    pub title: String,
    pub group: ThingGroup,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Thing {
    pub fn new(title: impl Into<String>, group: ThingGroup, left: f32, top: f32, size: f32) -> Self {
        Self {
            title: title.into(),
            group,
            left,
            top,
            width: size,
            height: size,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

pub fn overlaps(thing: &Thing, other: &Thing) -> bool {
    thing.left < other.right()
        && thing.right() > other.left
        && thing.top < other.bottom()
        && thing.bottom() > other.top
}

pub fn always_collide(_thing: &Thing, _other: &Thing) -> bool {
    true
}

pub fn never_collide(_thing: &Thing, _other: &Thing) -> bool {
    false
}

#[derive(Debug, Clone, Copy)]
pub struct ThingPrototype {
    pub group: ThingGroup,
    collide: CollideFn,
}

impl ThingPrototype {
    pub fn collide(&self, thing: &Thing, other: &Thing) -> bool {
        (self.collide)(thing, other)
    }
}

#[derive(Debug, Clone)]
pub struct ThingPrototypes {
    // Indexed by `ThingGroup` discriminant.
    prototypes: Vec<ThingPrototype>,
}

impl Default for ThingPrototypes {
    fn default() -> Self {
        Self::new()
    }
}

impl ThingPrototypes {
    /// Solid things collide on overlap; every other group is passable.
    pub fn new() -> Self {
        let prototypes = ThingGroup::iter()
            .map(|group| ThingPrototype {
                group,
                collide: match group {
                    ThingGroup::Solid => overlaps as CollideFn,
                    _ => never_collide as CollideFn,
                },
            })
            .collect();
        Self { prototypes }
    }

    pub fn prototype_of(&self, group: ThingGroup) -> &ThingPrototype {
        &self.prototypes[group as usize]
    }

    pub fn set_collide(&mut self, group: ThingGroup, collide: CollideFn) {
        debug!(%group, "replacing collide predicate");
        self.prototypes[group as usize].collide = collide;
    }

    /// Checks `thing` against `other` using the predicate of `thing`'s group.
    pub fn collides(&self, thing: &Thing, other: &Thing) -> bool {
        self.prototype_of(thing.group).collide(thing, other)
    }
}
