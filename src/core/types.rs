//! Core type definitions used throughout the codebase

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for dwarves, monsters and items
///
/// Ids are drawn from the snapshot's seeded generator so that two runs from
/// the same seed hand out the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// First eight hex digits, enough to tell entities apart in a log line
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short())
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Grid cell coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance (|dx| + |dy|)
    pub fn distance(&self, other: &Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Adjacent or same cell
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.distance(other) <= 1
    }

    /// One grid step toward `target`
    ///
    /// The x difference is closed completely before y moves. Returns `self`
    /// when already at the target.
    pub fn step_toward(&self, target: &Self) -> Self {
        let mut next = *self;
        if next.x < target.x {
            next.x += 1;
        } else if next.x > target.x {
            next.x -= 1;
        } else if next.y < target.y {
            next.y += 1;
        } else if next.y > target.y {
            next.y -= 1;
        }
        next
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
