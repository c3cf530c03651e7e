//! Static hero catalog describing the base stats of every archetype.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Hero classes available in the shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroKind {
    /// Melee fighter striking along rows and columns.
    Warrior,
    /// Ranged attacker hitting a single target at a fixed distance.
    Archer,
    /// Area caster that strikes its own cell and the ring around it.
    Mage,
    /// Economic support with a short circular reach.
    Priest,
}

impl HeroKind {
    /// Every archetype in declaration order.
    pub const ALL: [HeroKind; 4] = [Self::Warrior, Self::Archer, Self::Mage, Self::Priest];

    /// Order in which archetypes are listed in the shop.
    pub const SHOP_ORDER: [HeroKind; 4] = [Self::Archer, Self::Warrior, Self::Mage, Self::Priest];

    /// Returns the immutable catalog entry for the archetype.
    #[must_use]
    pub fn archetype(self) -> &'static HeroArchetype {
        match self {
            Self::Warrior => &WARRIOR,
            Self::Archer => &ARCHER,
            Self::Mage => &MAGE,
            Self::Priest => &PRIEST,
        }
    }

    /// Lowercase identifier used in scripts and configuration files.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Archer => "archer",
            Self::Mage => "mage",
            Self::Priest => "priest",
        }
    }
}

impl fmt::Display for HeroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.archetype().name)
    }
}

/// Error returned when a string names no known archetype.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown hero archetype `{0}`")]
pub struct UnknownHeroKind(pub String);

impl FromStr for HeroKind {
    type Err = UnknownHeroKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownHeroKind(needle.to_owned()))
    }
}

/// Inclusive distance bounds measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Smallest distance that still counts as in range.
    pub min: u32,
    /// Largest distance that still counts as in range.
    pub max: u32,
}

impl RangeBounds {
    /// Creates inclusive bounds.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Reports whether `distance` falls within `[min, max]`.
    #[must_use]
    pub const fn contains(&self, distance: u32) -> bool {
        self.min <= distance && distance <= self.max
    }
}

impl fmt::Display for RangeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Rule deciding which relative cells qualify as in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeShape {
    /// Only cells sharing a row or column with the origin.
    Line,
    /// Any direction within the distance bounds.
    Circle,
}

/// Whether an attack strikes one target or an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackMode {
    /// Strikes individual targets.
    Single,
    /// Strikes every target inside the area radius.
    Area,
}

/// Damage channel used by an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Mitigated by armor.
    Physical,
    /// Mitigated by magic resistance.
    Magical,
}

/// Immutable template defining an archetype's base stats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroArchetype {
    /// Archetype described by this entry.
    pub kind: HeroKind,
    /// Display name shown in the shop and detail panel.
    pub name: &'static str,
    /// Short flavour description.
    pub description: &'static str,
    /// Single character used to draw the hero on text grids.
    pub glyph: char,
    /// Gold required to purchase the hero.
    pub base_cost: u32,
    /// Damage dealt per hit.
    pub base_damage: u32,
    /// Attack range bounds.
    pub base_range: RangeBounds,
    /// Attacks per second.
    pub attack_speed: f32,
    /// Damage channel.
    pub damage_type: DamageType,
    /// Shape rule applied to the attack range.
    pub range_shape: RangeShape,
    /// Single-target or area attack.
    pub attack_mode: AttackMode,
    /// Maximum number of simultaneous targets.
    pub max_targets: u32,
    /// Secondary area-of-effect radius, for area attackers.
    pub aoe_radius: Option<u32>,
    /// Hit chance in percent.
    pub base_accuracy: u32,
    /// Critical hit chance in percent.
    pub base_critical_chance: u32,
    /// Critical hit damage in percent of base damage.
    pub base_critical_damage: u32,
}

impl HeroArchetype {
    /// Gold returned when a hero of this archetype is sold: `floor(cost * 0.7)`.
    #[must_use]
    pub const fn sell_value(&self) -> u32 {
        self.base_cost.saturating_mul(7) / 10
    }
}

static WARRIOR: HeroArchetype = HeroArchetype {
    kind: HeroKind::Warrior,
    name: "Warrior",
    description: "Heavy melee damage dealt with a broad sword.",
    glyph: 'W',
    base_cost: 500,
    base_damage: 12,
    base_range: RangeBounds::new(1, 1),
    attack_speed: 1.2,
    damage_type: DamageType::Physical,
    range_shape: RangeShape::Line,
    attack_mode: AttackMode::Single,
    max_targets: 2,
    aoe_radius: None,
    base_accuracy: 90,
    base_critical_chance: 15,
    base_critical_damage: 150,
};

static ARCHER: HeroArchetype = HeroArchetype {
    kind: HeroKind::Archer,
    name: "Archer",
    description: "Ranged damage with a precise reach.",
    glyph: 'A',
    base_cost: 300,
    base_damage: 5,
    base_range: RangeBounds::new(3, 3),
    attack_speed: 1.8,
    damage_type: DamageType::Physical,
    range_shape: RangeShape::Circle,
    attack_mode: AttackMode::Single,
    max_targets: 1,
    aoe_radius: None,
    base_accuracy: 95,
    base_critical_chance: 25,
    base_critical_damage: 200,
};

static MAGE: HeroArchetype = HeroArchetype {
    kind: HeroKind::Mage,
    name: "Mage",
    description: "Area caster. Range 0: strikes its own cell and the eight cells around it.",
    glyph: 'M',
    base_cost: 700,
    base_damage: 8,
    base_range: RangeBounds::new(0, 0),
    attack_speed: 1.5,
    damage_type: DamageType::Magical,
    range_shape: RangeShape::Circle,
    attack_mode: AttackMode::Area,
    max_targets: 5,
    aoe_radius: Some(1),
    base_accuracy: 85,
    base_critical_chance: 10,
    base_critical_damage: 180,
};

static PRIEST: HeroArchetype = HeroArchetype {
    kind: HeroKind::Priest,
    name: "Priest",
    description: "Economic support that buffs nearby allies.",
    glyph: 'P',
    base_cost: 1500,
    base_damage: 3,
    base_range: RangeBounds::new(1, 3),
    attack_speed: 1.0,
    damage_type: DamageType::Magical,
    range_shape: RangeShape::Circle,
    attack_mode: AttackMode::Single,
    max_targets: 1,
    aoe_radius: None,
    base_accuracy: 80,
    base_critical_chance: 5,
    base_critical_damage: 120,
};
