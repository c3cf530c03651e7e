//! Data shapes reserved for the wave simulation.
//!
//! Nothing in the engine drives these yet; they fix the vocabulary adapters
//! and content files can already exchange.

use serde::{Deserialize, Serialize};

use crate::CellCoord;

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Enemy families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline walker.
    Basic,
    /// Quick, fragile walker.
    Fast,
    /// Slow walker with high armor.
    Armored,
    /// Ignores ground obstacles.
    Flying,
    /// Hidden until revealed.
    Stealth,
    /// Wave finale.
    Boss,
}

/// Status effect families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Prevents movement and attacks.
    Stun,
    /// Reduces movement speed.
    Slow,
    /// Damage over time.
    Poison,
    /// Damage over time.
    Burn,
    /// Stops movement entirely.
    Freeze,
    /// Positive modifier.
    Buff,
}

/// Timed status effect applied to an enemy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect family.
    pub kind: EffectKind,
    /// Remaining duration in milliseconds.
    pub duration_ms: u32,
    /// Magnitude of the effect.
    pub value: f32,
}

/// Enemy walking the path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Identifier of the enemy.
    pub id: EnemyId,
    /// Enemy family.
    pub kind: EnemyKind,
    /// Cell currently occupied.
    pub cell: CellCoord,
    /// Index of the occupied cell along the path.
    pub path_index: usize,
    /// Remaining health.
    pub health: u32,
    /// Health at spawn.
    pub max_health: u32,
    /// Cells travelled per second.
    pub speed: f32,
    /// Physical damage reduction.
    pub armor: u32,
    /// Magical damage reduction.
    pub magic_resist: u32,
    /// Gold awarded on defeat.
    pub bounty: u32,
    /// Active status effects.
    pub effects: Vec<Effect>,
    /// Whether the enemy flies.
    pub flying: bool,
    /// Whether the enemy is hidden.
    pub stealth: bool,
    /// Remaining shield health, if shielded.
    pub shield: Option<u32>,
}

/// Group of identical enemies spawned during a wave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveGroup {
    /// Enemy family spawned by the group.
    pub kind: EnemyKind,
    /// Number of enemies in the group.
    pub count: u32,
    /// Delay between consecutive spawns in milliseconds.
    pub spawn_delay_ms: u32,
}

/// Composition of a single wave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveData {
    /// Wave number.
    pub wave: u32,
    /// Groups spawned during the wave.
    pub groups: Vec<WaveGroup>,
    /// Gold awarded once the wave is cleared.
    pub gold_bonus: u32,
}
