//! Pairwise collision state published at the end of each step.

use std::collections::HashMap;

/// Identity of a participant in the collision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeId {
    Rigid(usize),
    Soft(usize),
}

/// Unordered pair of shape ids; `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey(ShapeId, ShapeId);

impl PairKey {
    pub fn new(a: ShapeId, b: ShapeId) -> Self {
        if a <= b {
            PairKey(a, b)
        } else {
            PairKey(b, a)
        }
    }

    pub fn ids(&self) -> (ShapeId, ShapeId) {
        (self.0, self.1)
    }
}

/// Collision booleans keyed by unordered shape pair. A pair that was never
/// recorded reads as not colliding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionTable {
    entries: HashMap<PairKey, bool>,
}

impl CollisionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, a: ShapeId, b: ShapeId, colliding: bool) {
        self.entries.insert(PairKey::new(a, b), colliding);
    }

    pub fn is_colliding(&self, a: ShapeId, b: ShapeId) -> bool {
        self.entries.get(&PairKey::new(a, b)).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PairKey, bool)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Pairs currently recorded as colliding.
    pub fn colliding_pairs(&self) -> impl Iterator<Item = PairKey> + '_ {
        self.iter().filter(|(_, colliding)| *colliding).map(|(k, _)| k)
    }
}
