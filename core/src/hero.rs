//! Read-only descriptions of placed heroes.

use serde::{Deserialize, Serialize};

use crate::{AttackMode, CellCoord, HeroArchetype, HeroId, HeroKind, RangeBounds, RangeShape};

/// Live combat stats of a placed hero.
///
/// Initialised from the archetype and free to diverge afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroStats {
    /// Damage dealt per hit.
    pub damage: u32,
    /// Attack range bounds.
    pub range: RangeBounds,
    /// Shape rule applied to the range.
    pub range_shape: RangeShape,
    /// Attacks per second.
    pub attack_speed: f32,
    /// Single-target or area attack.
    pub attack_mode: AttackMode,
    /// Maximum number of simultaneous targets.
    pub max_targets: u32,
    /// Secondary area-of-effect radius.
    pub aoe_radius: Option<u32>,
    /// Hit chance in percent.
    pub accuracy: u32,
    /// Critical hit chance in percent.
    pub critical_chance: u32,
    /// Critical hit damage in percent.
    pub critical_damage: u32,
}

impl HeroStats {
    /// Copies the base stats of an archetype.
    #[must_use]
    pub fn from_archetype(archetype: &HeroArchetype) -> Self {
        Self {
            damage: archetype.base_damage,
            range: archetype.base_range,
            range_shape: archetype.range_shape,
            attack_speed: archetype.attack_speed,
            attack_mode: archetype.attack_mode,
            max_targets: archetype.max_targets,
            aoe_radius: archetype.aoe_radius,
            accuracy: archetype.base_accuracy,
            critical_chance: archetype.base_critical_chance,
            critical_damage: archetype.base_critical_damage,
        }
    }
}

/// Active skill unlocked by a hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Stable identifier of the ability.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Player-facing description.
    pub description: String,
    /// Cooldown between uses in milliseconds.
    pub cooldown_ms: u32,
    /// Mana consumed per use.
    pub mana_cost: u32,
    /// Current ability level.
    pub level: u32,
    /// Highest reachable ability level.
    pub max_level: u32,
}

/// Always-on modifier carried by a hero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Passive {
    /// Stable identifier of the passive.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Player-facing description.
    pub description: String,
    /// Name of the modified attribute.
    pub effect: String,
    /// Magnitude of the modification.
    pub value: f32,
    /// Current passive level.
    pub level: u32,
}

/// Immutable representation of a placed hero used for queries.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroSnapshot {
    /// Identifier allocated to the hero by the world.
    pub id: HeroId,
    /// Archetype of the hero.
    pub kind: HeroKind,
    /// Cell occupied by the hero.
    pub cell: CellCoord,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience gathered toward the next level.
    pub experience: u32,
    /// Live stats.
    pub stats: HeroStats,
    /// Gold paid for the hero.
    pub cost: u32,
    /// Gold returned when the hero is sold.
    pub sell_value: u32,
    /// Whether the hero is the current selection.
    pub selected: bool,
    /// Unlocked abilities.
    pub abilities: Vec<Ability>,
    /// Passive modifiers.
    pub passives: Vec<Passive>,
}

impl HeroSnapshot {
    /// Catalog entry of the hero's archetype.
    #[must_use]
    pub fn archetype(&self) -> &'static HeroArchetype {
        self.kind.archetype()
    }

    /// Experience required to complete the current level: `level * 100`.
    #[must_use]
    pub fn experience_threshold(&self) -> u32 {
        self.level.saturating_mul(100)
    }

    /// Progress toward the next level in whole percent.
    #[must_use]
    pub fn experience_percent(&self) -> u32 {
        let threshold = self.experience_threshold();
        if threshold == 0 {
            return 0;
        }
        (u64::from(self.experience) * 100 / u64::from(threshold)).min(100) as u32
    }
}

/// Read-only snapshot describing every placed hero.
///
/// Snapshots keep placement order.
#[derive(Clone, Debug, Default)]
pub struct HeroView {
    snapshots: Vec<HeroSnapshot>,
}

impl HeroView {
    /// Creates a new hero view from snapshots listed in placement order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<HeroSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured snapshots in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &HeroSnapshot> {
        self.snapshots.iter()
    }

    /// Number of heroes captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether no hero is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(kind: HeroKind, cell: CellCoord, suffix: u32) -> HeroSnapshot {
        let archetype = kind.archetype();
        HeroSnapshot {
            id: HeroId::new(1, suffix),
            kind,
            cell,
            level: 1,
            experience: 0,
            stats: HeroStats::from_archetype(archetype),
            cost: archetype.base_cost,
            sell_value: archetype.sell_value(),
            selected: false,
            abilities: Vec::new(),
            passives: Vec::new(),
        }
    }

    #[test]
    fn stats_copy_archetype_baseline() {
        let stats = HeroStats::from_archetype(HeroKind::Mage.archetype());
        assert_eq!(stats.damage, 8);
        assert_eq!(stats.range, RangeBounds::new(0, 0));
        assert_eq!(stats.aoe_radius, Some(1));
        assert_eq!(stats.accuracy, 85);
    }

    #[test]
    fn experience_threshold_scales_with_level() {
        let mut hero = snapshot(HeroKind::Archer, CellCoord::new(0, 0), 1);
        assert_eq!(hero.experience_threshold(), 100);
        hero.level = 3;
        hero.experience = 150;
        assert_eq!(hero.experience_threshold(), 300);
        assert_eq!(hero.experience_percent(), 50);
    }

    #[test]
    fn view_preserves_placement_order() {
        let first = snapshot(HeroKind::Priest, CellCoord::new(3, 3), 9);
        let second = snapshot(HeroKind::Archer, CellCoord::new(1, 1), 2);
        let view = HeroView::from_snapshots(vec![first, second]);

        let kinds: Vec<HeroKind> = view.iter().map(|hero| hero.kind).collect();
        assert_eq!(kinds, vec![HeroKind::Priest, HeroKind::Archer]);
        assert_eq!(view.len(), 2);
        assert!(!view.is_empty());
    }
}
