//! Authoritative hero state management utilities.

use std::time::{SystemTime, UNIX_EPOCH};

use hero_defense_core::{
    Ability, CellCoord, HeroId, HeroKind, HeroSnapshot, HeroStats, Passive,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Record of a placed hero stored inside the world.
#[derive(Clone, Debug)]
pub(crate) struct HeroState {
    /// Identifier allocated by the world for the hero.
    pub(crate) id: HeroId,
    /// Archetype the hero was bought as.
    pub(crate) kind: HeroKind,
    /// Cell occupied by the hero.
    pub(crate) cell: CellCoord,
    pub(crate) level: u32,
    pub(crate) experience: u32,
    pub(crate) stats: HeroStats,
    pub(crate) cost: u32,
    /// Gold refunded on sale, fixed at purchase time.
    pub(crate) sell_value: u32,
    pub(crate) selected: bool,
    pub(crate) abilities: Vec<Ability>,
    pub(crate) passives: Vec<Passive>,
}

impl HeroState {
    fn recruit(id: HeroId, kind: HeroKind, cell: CellCoord) -> Self {
        let archetype = kind.archetype();
        Self {
            id,
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

    pub(crate) fn snapshot(&self) -> HeroSnapshot {
        HeroSnapshot {
            id: self.id,
            kind: self.kind,
            cell: self.cell,
            level: self.level,
            experience: self.experience,
            stats: self.stats,
            cost: self.cost,
            sell_value: self.sell_value,
            selected: self.selected,
            abilities: self.abilities.clone(),
            passives: self.passives.clone(),
        }
    }
}

/// Registry that stores heroes in placement order and issues identifiers.
#[derive(Debug)]
pub(crate) struct HeroRegistry {
    entries: Vec<HeroState>,
    ids: HeroIdIssuer,
}

impl HeroRegistry {
    /// Creates an empty registry whose identifier suffixes derive from `seed`.
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            entries: Vec::new(),
            ids: HeroIdIssuer::new(seed),
        }
    }

    /// Appends a freshly recruited hero and returns its identifier.
    pub(crate) fn recruit(&mut self, kind: HeroKind, cell: CellCoord) -> HeroId {
        let entries = &self.entries;
        let id = self
            .ids
            .issue(|candidate| entries.iter().any(|hero| hero.id == candidate));
        self.entries.push(HeroState::recruit(id, kind, cell));
        id
    }

    /// Removes the hero with the provided identifier, preserving the order of the rest.
    pub(crate) fn remove(&mut self, id: HeroId) -> Option<HeroState> {
        let index = self.entries.iter().position(|hero| hero.id == id)?;
        Some(self.entries.remove(index))
    }

    pub(crate) fn get(&self, id: HeroId) -> Option<&HeroState> {
        self.entries.iter().find(|hero| hero.id == id)
    }

    pub(crate) fn contains(&self, id: HeroId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn at(&self, cell: CellCoord) -> Option<&HeroState> {
        self.entries.iter().find(|hero| hero.cell == cell)
    }

    /// Sets every hero's selection flag so that only `selected` is marked.
    pub(crate) fn mark_selected(&mut self, selected: Option<HeroId>) {
        for hero in &mut self.entries {
            hero.selected = Some(hero.id) == selected;
        }
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.entries.iter().map(|hero| hero.cell)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &HeroState> {
        self.entries.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Issues `timestamp + random suffix` identifiers.
#[derive(Debug)]
struct HeroIdIssuer {
    rng: ChaCha8Rng,
}

impl HeroIdIssuer {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn issue(&mut self, mut taken: impl FnMut(HeroId) -> bool) -> HeroId {
        let issued_at_ms = now_ms();
        loop {
            let candidate = HeroId::new(issued_at_ms, self.rng.gen());
            if !taken(candidate) {
                return candidate;
            }
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
