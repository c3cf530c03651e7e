#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure interaction system translating pointer input into world commands.
//!
//! The system owns the one piece of state the world does not: which archetype,
//! if any, the player picked in the shop and is about to place.

use hero_defense_core::{CellCoord, Command, Event, HeroId, HeroKind};

/// Pointer action distilled from adapter input for a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerInput {
    /// An empty grid cell was clicked.
    CellClicked(CellCoord),
    /// The pointer entered a cell, or left the grid when `None`.
    CellHovered(Option<CellCoord>),
    /// A placed hero was clicked.
    HeroClicked(HeroId),
    /// A shop entry was clicked.
    ShopEntryClicked(HeroKind),
    /// The sell button of the detail panel was clicked.
    SellClicked,
    /// The start-wave button was clicked.
    StartWaveClicked,
    /// The pause button was clicked.
    PauseClicked,
}

/// Read-only world facts the system needs to interpret input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionContext {
    /// Gold currently held by the player.
    pub gold: u32,
    /// Hero currently selected in the world.
    pub selected: Option<HeroId>,
}

impl InteractionContext {
    /// Creates a context from explicit values.
    #[must_use]
    pub const fn new(gold: u32, selected: Option<HeroId>) -> Self {
        Self { gold, selected }
    }
}

/// Interaction system tracking the archetype chosen for placement.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    chosen: Option<HeroKind>,
}

impl Interaction {
    /// Creates a new interaction system with nothing chosen.
    #[must_use]
    pub const fn new() -> Self {
        Self { chosen: None }
    }

    /// Archetype the player is currently placing, if any.
    #[must_use]
    pub const fn chosen(&self) -> Option<HeroKind> {
        self.chosen
    }

    /// Consumes world events and the frame's input to emit commands.
    ///
    /// Events are processed first so that a confirmed placement ends
    /// placement mode before new input is interpreted.
    pub fn handle(
        &mut self,
        events: &[Event],
        input: Option<PointerInput>,
        context: InteractionContext,
        out: &mut Vec<Command>,
    ) {
        if events
            .iter()
            .any(|event| matches!(event, Event::HeroPlaced { .. }))
        {
            self.chosen = None;
        }

        let Some(input) = input else {
            return;
        };

        match input {
            PointerInput::ShopEntryClicked(kind) => {
                if context.gold < kind.archetype().base_cost {
                    return;
                }
                self.chosen = if self.chosen == Some(kind) {
                    None
                } else {
                    Some(kind)
                };
            }
            PointerInput::CellClicked(cell) => match self.chosen {
                Some(kind) => out.push(Command::PlaceHero { kind, cell }),
                None => out.push(Command::SelectHero { hero: None }),
            },
            PointerInput::HeroClicked(hero) => {
                self.chosen = None;
                out.push(Command::SelectHero { hero: Some(hero) });
            }
            PointerInput::CellHovered(cell) => {
                out.push(Command::SetHoveredCell { cell });
                // A selected hero keeps ownership of the overlay.
                if self.chosen.is_some() && context.selected.is_none() {
                    out.push(Command::SetRangeOverlay {
                        visible: cell.is_some(),
                    });
                }
            }
            PointerInput::SellClicked => {
                if let Some(hero) = context.selected {
                    out.push(Command::SellHero { hero });
                }
            }
            PointerInput::StartWaveClicked => out.push(Command::StartWave),
            PointerInput::PauseClicked => out.push(Command::TogglePause),
        }
    }
}
