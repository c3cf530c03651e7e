use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use hero_defense_core::{CellCoord, Command, Event};
use hero_defense_rendering::{
    HeroPreview, Hud, Presentation, RenderingBackend, Scene, SceneHero, ShopEntry, TextRenderer,
};
use hero_defense_system_bootstrap::Bootstrap;
use hero_defense_system_interaction::{Interaction, InteractionContext, PointerInput};
use hero_defense_system_notifications::{Notification, Notifications};
use hero_defense_system_placement::PlacementPreview;
use hero_defense_system_targeting::{OverlaySource, RangeOverlay};
use hero_defense_world::{self as world, query, World};

use crate::script::{self, ScriptCommand};

const TITLE: &str = "Hero Defense";

/// Drives the world from script lines and presents the outcome as text.
pub(crate) struct Session<W: Write> {
    world: World,
    bootstrap: Bootstrap,
    interaction: Interaction,
    notifications: Notifications,
    overlay: RangeOverlay,
    renderer: TextRenderer<W>,
    quiet: bool,
    events: Vec<Event>,
    commands: Vec<Command>,
    notices: Vec<Notification>,
    range_cells: Vec<CellCoord>,
}

impl<W: Write> Session<W> {
    pub(crate) fn new(world: World, out: W, quiet: bool) -> Self {
        Self {
            world,
            bootstrap: Bootstrap,
            interaction: Interaction::new(),
            notifications: Notifications::new(),
            overlay: RangeOverlay::new(),
            renderer: TextRenderer::new(out),
            quiet,
            events: Vec::new(),
            commands: Vec::new(),
            notices: Vec::new(),
            range_cells: Vec::new(),
        }
    }

    /// Executes every line of `input` until it ends or a `quit` is read.
    pub(crate) fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.greet()?;

        for (index, line) in input.lines().enumerate() {
            let line = line.context("failed to read script line")?;
            match script::parse_line(&line) {
                Ok(None) => {}
                Ok(Some(ScriptCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Err(error) => {
                    log::warn!("skipping line {}: {error}", index + 1);
                    writeln!(self.renderer.get_mut(), "line {}: {error}", index + 1)?;
                }
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    fn greet(&mut self) -> Result<()> {
        let banner = self.bootstrap.welcome_banner(&self.world);
        let free = self.bootstrap.placement_zones(&self.world).len();
        writeln!(
            self.renderer.get_mut(),
            "{banner} {free} cells are open for heroes."
        )?;
        self.present()
    }

    fn execute(&mut self, command: ScriptCommand) -> Result<()> {
        let input = match command {
            ScriptCommand::Show => return self.present(),
            ScriptCommand::Quit => return Ok(()),
            ScriptCommand::Shop(kind) => PointerInput::ShopEntryClicked(kind),
            ScriptCommand::Click(cell) => match query::hero_at(&self.world, cell) {
                Some(hero) => PointerInput::HeroClicked(hero),
                None => PointerInput::CellClicked(cell),
            },
            ScriptCommand::Hover(cell) => PointerInput::CellHovered(Some(cell)),
            ScriptCommand::Leave => PointerInput::CellHovered(None),
            ScriptCommand::Sell => PointerInput::SellClicked,
            ScriptCommand::Wave => PointerInput::StartWaveClicked,
            ScriptCommand::Pause => PointerInput::PauseClicked,
        };

        self.step(input)?;

        if self.quiet {
            Ok(())
        } else {
            self.present()
        }
    }

    fn step(&mut self, input: PointerInput) -> Result<()> {
        let context = self.context();
        self.commands.clear();
        self.interaction
            .handle(&[], Some(input), context, &mut self.commands);

        self.events.clear();
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, &mut self.events);
        }

        // Let the interaction system observe the outcome before the next line.
        let context = self.context();
        self.commands.clear();
        self.interaction
            .handle(&self.events, None, context, &mut self.commands);

        self.notices.clear();
        self.notifications.handle(&self.events, &mut self.notices);
        for notice in &self.notices {
            writeln!(self.renderer.get_mut(), "{notice}")?;
        }

        Ok(())
    }

    fn context(&self) -> InteractionContext {
        InteractionContext::new(
            query::gold(&self.world),
            query::selected_hero(&self.world).map(|hero| hero.id),
        )
    }

    fn present(&mut self) -> Result<()> {
        let world = &self.world;
        let grid = self.bootstrap.grid(world);
        let path = self.bootstrap.enemy_path(world);
        let gold = query::gold(world);
        let heroes = query::hero_view(world);
        let selected = query::selected_hero(world);
        let hovered = query::hovered_cell(world);
        let chosen = self.interaction.chosen();

        let source =
            OverlaySource::resolve(query::show_range(world), selected.as_ref(), chosen, hovered);
        self.overlay.handle(source, grid, &mut self.range_cells);

        let preview = match (chosen, hovered) {
            (Some(kind), Some(cell)) => {
                let verdict = PlacementPreview::evaluate(
                    kind,
                    cell,
                    gold,
                    grid,
                    path,
                    heroes.iter().map(|hero| hero.cell),
                );
                Some(HeroPreview::new(
                    kind,
                    cell,
                    verdict.placeable(),
                    verdict.rejection(),
                ))
            }
            _ => None,
        };

        let scene = Scene::new(
            grid,
            path.clone(),
            heroes.iter().map(SceneHero::from_snapshot).collect(),
            self.range_cells.clone(),
            preview,
        );
        let hud = Hud {
            gold,
            lives: query::lives(world),
            wave: query::wave(world),
            wave_active: query::is_wave_active(world),
            paused: query::is_paused(world),
        };
        let presentation = Presentation::new(
            TITLE,
            hud,
            scene,
            ShopEntry::catalog(gold, chosen),
            selected,
        );

        self.renderer.present(&presentation)
    }
}
