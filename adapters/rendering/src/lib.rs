#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Hero Defense adapters.

pub mod text;

use anyhow::Result as AnyResult;
use hero_defense_core::{
    CellCoord, EnemyPath, GridSize, HeroId, HeroKind, HeroSnapshot, PurchaseError,
};

pub use text::TextRenderer;

/// Immutable snapshot describing a hero placed within the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneHero {
    /// Identifier allocated to the hero by the world.
    pub id: HeroId,
    /// Archetype of the hero.
    pub kind: HeroKind,
    /// Cell occupied by the hero.
    pub cell: CellCoord,
    /// Whether the hero is the current selection.
    pub selected: bool,
}

impl SceneHero {
    /// Creates a new scene hero descriptor.
    #[must_use]
    pub const fn new(id: HeroId, kind: HeroKind, cell: CellCoord, selected: bool) -> Self {
        Self {
            id,
            kind,
            cell,
            selected,
        }
    }

    /// Copies the fields the scene needs out of a world snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &HeroSnapshot) -> Self {
        Self::new(snapshot.id, snapshot.kind, snapshot.cell, snapshot.selected)
    }
}

/// Placement preview drawn on the hovered cell while the player is placing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeroPreview {
    /// Archetype proposed for placement.
    pub kind: HeroKind,
    /// Hovered cell.
    pub cell: CellCoord,
    /// Indicates whether the world would accept the placement.
    pub placeable: bool,
    /// Reason the world would refuse the placement, if any.
    pub rejection: Option<PurchaseError>,
}

impl HeroPreview {
    /// Creates a new hero preview descriptor.
    ///
    /// A preview carrying a rejection is never placeable.
    #[must_use]
    pub const fn new(
        kind: HeroKind,
        cell: CellCoord,
        placeable: bool,
        rejection: Option<PurchaseError>,
    ) -> Self {
        let placeable = if rejection.is_some() {
            false
        } else {
            placeable
        };

        Self {
            kind,
            cell,
            placeable,
            rejection,
        }
    }
}

/// Scene description combining the board and its inhabitants.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Dimensions of the board.
    pub grid: GridSize,
    /// Route enemies follow.
    pub path: EnemyPath,
    /// Heroes currently placed, in placement order.
    pub heroes: Vec<SceneHero>,
    /// Cells highlighted by the range overlay, in row-major order.
    pub range_cells: Vec<CellCoord>,
    /// Optional placement preview.
    pub preview: Option<HeroPreview>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        grid: GridSize,
        path: EnemyPath,
        heroes: Vec<SceneHero>,
        range_cells: Vec<CellCoord>,
        preview: Option<HeroPreview>,
    ) -> Self {
        Self {
            grid,
            path,
            heroes,
            range_cells,
            preview,
        }
    }

    /// Hero standing on the cell, if any.
    #[must_use]
    pub fn hero_at(&self, cell: CellCoord) -> Option<&SceneHero> {
        self.heroes.iter().find(|hero| hero.cell == cell)
    }

    /// Reports whether the range overlay covers the cell.
    #[must_use]
    pub fn is_highlighted(&self, cell: CellCoord) -> bool {
        self.range_cells
            .binary_search_by(|probe| row_major(*probe).cmp(&row_major(cell)))
            .is_ok()
    }
}

fn row_major(cell: CellCoord) -> (u32, u32) {
    (cell.row(), cell.column())
}

/// Head-up display values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hud {
    /// Gold held by the player.
    pub gold: u32,
    /// Lives remaining.
    pub lives: u32,
    /// Number of the next wave.
    pub wave: u32,
    /// Whether a wave is running.
    pub wave_active: bool,
    /// Whether the running wave is paused.
    pub paused: bool,
}

impl Hud {
    /// Label of the start-wave button.
    #[must_use]
    pub fn wave_button_label(&self) -> String {
        if self.wave_active {
            "Wave in progress...".to_owned()
        } else {
            format!("Start wave {}", self.wave)
        }
    }

    /// Label of the pause button, absent while no wave runs.
    #[must_use]
    pub fn pause_button_label(&self) -> Option<&'static str> {
        match (self.wave_active, self.paused) {
            (false, _) => None,
            (true, false) => Some("Pause"),
            (true, true) => Some("Resume"),
        }
    }
}

/// Line of the hero shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShopEntry {
    /// Archetype offered.
    pub kind: HeroKind,
    /// Whether the player can afford it.
    pub affordable: bool,
    /// Whether the player picked it for placement.
    pub chosen: bool,
}

impl ShopEntry {
    /// Lists the shop in display order for the provided gold and choice.
    #[must_use]
    pub fn catalog(gold: u32, chosen: Option<HeroKind>) -> Vec<Self> {
        HeroKind::SHOP_ORDER
            .into_iter()
            .map(|kind| Self {
                kind,
                affordable: gold >= kind.archetype().base_cost,
                chosen: chosen == Some(kind),
            })
            .collect()
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title printed above the frame.
    pub title: String,
    /// Head-up display values.
    pub hud: Hud,
    /// Board content.
    pub scene: Scene,
    /// Shop entries in display order.
    pub shop: Vec<ShopEntry>,
    /// Detail panel of the selected hero.
    pub panel: Option<HeroSnapshot>,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(
        title: T,
        hud: Hud,
        scene: Scene,
        shop: Vec<ShopEntry>,
        panel: Option<HeroSnapshot>,
    ) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            hud,
            scene,
            shop,
            panel,
        }
    }
}

/// Rendering backend capable of presenting Hero Defense frames.
pub trait RenderingBackend {
    /// Presents a single frame.
    fn present(&mut self, presentation: &Presentation) -> AnyResult<()>;
}
