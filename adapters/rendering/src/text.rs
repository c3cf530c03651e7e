//! Plain-text backend drawing frames onto any [`std::io::Write`] sink.

use std::{
    fmt::{self, Write as _},
    io::Write,
};

use anyhow::{Context, Result as AnyResult};
use hero_defense_core::{CellCoord, DamageType, HeroSnapshot, RangeShape};

use crate::{Hud, Presentation, RenderingBackend, Scene, ShopEntry};

const EMPTY: char = '.';
const PATH: char = '=';
const SPAWN: char = 'S';
const GOAL: char = 'G';
const RANGE: char = '*';
const PREVIEW_OK: char = '+';
const PREVIEW_BLOCKED: char = 'x';
const LEGEND: &str =
    "S spawn  G goal  = path  * range  + free  x blocked  lowercase = selected hero";

/// Backend writing each frame as text.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing into `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Mutable access to the sink, for lines written between frames.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the renderer, returning the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderingBackend for TextRenderer<W> {
    fn present(&mut self, presentation: &Presentation) -> AnyResult<()> {
        let frame = render(presentation);
        self.out
            .write_all(frame.as_bytes())
            .context("failed to write frame")?;
        self.out.flush().context("failed to flush frame")?;
        Ok(())
    }
}

/// Renders a full frame: title, HUD, board, shop and detail panel.
#[must_use]
pub fn render(presentation: &Presentation) -> String {
    Frame(presentation).to_string()
}

struct Frame<'a>(&'a Presentation);

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let presentation = self.0;
        writeln!(f, "== {} ==", presentation.title)?;
        write_hud(f, &presentation.hud)?;
        writeln!(f)?;
        write_grid(f, &presentation.scene)?;
        writeln!(f)?;
        write_shop(f, &presentation.shop)?;
        if let Some(hero) = &presentation.panel {
            writeln!(f)?;
            write_panel(f, hero)?;
        }
        Ok(())
    }
}

fn write_hud(f: &mut impl fmt::Write, hud: &Hud) -> fmt::Result {
    write!(
        f,
        "Lives: {}  Gold: {}  Wave: {}  [{}]",
        hud.lives,
        hud.gold,
        hud.wave,
        hud.wave_button_label()
    )?;
    if let Some(label) = hud.pause_button_label() {
        write!(f, " [{label}]")?;
    }
    writeln!(f)
}

fn write_grid(f: &mut impl fmt::Write, scene: &Scene) -> fmt::Result {
    write!(f, "   ")?;
    for column in 0..scene.grid.columns() {
        write!(f, "{column:>3}")?;
    }
    writeln!(f)?;

    for row in 0..scene.grid.rows() {
        write!(f, "{row:>3}")?;
        for column in 0..scene.grid.columns() {
            write!(f, "{:>3}", glyph(scene, CellCoord::new(column, row)))?;
        }
        writeln!(f)?;
    }

    writeln!(f, "{LEGEND}")
}

fn glyph(scene: &Scene, cell: CellCoord) -> char {
    if let Some(hero) = scene.hero_at(cell) {
        let glyph = hero.kind.archetype().glyph;
        return if hero.selected {
            glyph.to_ascii_lowercase()
        } else {
            glyph
        };
    }

    if let Some(preview) = scene.preview.filter(|preview| preview.cell == cell) {
        return if preview.placeable {
            PREVIEW_OK
        } else {
            PREVIEW_BLOCKED
        };
    }

    if scene.path.spawn() == Some(cell) {
        return SPAWN;
    }
    if scene.path.goal() == Some(cell) {
        return GOAL;
    }
    if scene.is_highlighted(cell) {
        return RANGE;
    }
    if scene.path.contains(cell) {
        return PATH;
    }
    EMPTY
}

fn write_shop(f: &mut impl fmt::Write, entries: &[ShopEntry]) -> fmt::Result {
    writeln!(f, "Shop:")?;
    for entry in entries {
        let archetype = entry.kind.archetype();
        let marker = match (entry.chosen, entry.affordable) {
            (true, _) => '>',
            (false, true) => ' ',
            (false, false) => '-',
        };
        writeln!(
            f,
            " {marker} {:<8} {:>5} gold  dmg {:<3} range {:<4} {}/s  {}",
            archetype.kind.slug(),
            archetype.base_cost,
            archetype.base_damage,
            archetype.base_range.to_string(),
            archetype.attack_speed,
            shape_label(archetype.range_shape),
        )?;
    }
    Ok(())
}

fn write_panel(f: &mut impl fmt::Write, hero: &HeroSnapshot) -> fmt::Result {
    let archetype = hero.archetype();
    let stats = &hero.stats;
    writeln!(
        f,
        "{} [{}] level {}, {}  ({})",
        archetype.name,
        archetype.glyph,
        hero.level,
        damage_label(archetype.damage_type),
        hero.id
    )?;
    writeln!(
        f,
        "  experience {}/{} ({}%)",
        hero.experience,
        hero.experience_threshold(),
        hero.experience_percent()
    )?;
    writeln!(
        f,
        "  damage {}  range {}  speed {}/s  accuracy {}%",
        stats.damage, stats.range, stats.attack_speed, stats.accuracy
    )?;
    writeln!(
        f,
        "  critical {}%  critical damage {}%  shape {}  targets {}",
        stats.critical_chance,
        stats.critical_damage,
        shape_label(stats.range_shape),
        stats.max_targets
    )?;
    if let Some(radius) = stats.aoe_radius {
        writeln!(f, "  area radius {radius} cells")?;
    }
    if !hero.abilities.is_empty() {
        writeln!(f, "  abilities:")?;
        for ability in &hero.abilities {
            writeln!(
                f,
                "    {} (level {}): {}",
                ability.name, ability.level, ability.description
            )?;
        }
    }
    writeln!(f, "  sell for {} gold", hero.sell_value)
}

fn shape_label(shape: RangeShape) -> &'static str {
    match shape {
        RangeShape::Line => "line",
        RangeShape::Circle => "circle",
    }
}

fn damage_label(damage: DamageType) -> &'static str {
    match damage {
        DamageType::Physical => "physical",
        DamageType::Magical => "magical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeroPreview, SceneHero};
    use hero_defense_core::{
        EnemyPath, GridSize, HeroId, HeroKind, HeroStats, PlacementError, PurchaseError,
    };

    fn render_grid(scene: &Scene) -> String {
        let mut text = String::new();
        write_grid(&mut text, scene).expect("writing into a String");
        text
    }

    fn small_scene() -> Scene {
        Scene::new(
            GridSize::new(4, 3),
            EnemyPath::new(vec![
                CellCoord::new(0, 1),
                CellCoord::new(1, 1),
                CellCoord::new(2, 1),
                CellCoord::new(3, 1),
            ]),
            vec![SceneHero::new(
                HeroId::new(1, 1),
                HeroKind::Archer,
                CellCoord::new(0, 0),
                true,
            )],
            vec![CellCoord::new(3, 0), CellCoord::new(2, 1), CellCoord::new(0, 2)],
            Some(HeroPreview::new(
                HeroKind::Mage,
                CellCoord::new(1, 1),
                false,
                Some(PurchaseError::Placement(PlacementError::OnPath)),
            )),
        )
    }

    #[test]
    fn grid_draws_every_layer() {
        let text = render_grid(&small_scene());
        let rows: Vec<String> = text
            .lines()
            .skip(1)
            .take(3)
            .map(|line| line.split_whitespace().skip(1).collect::<String>())
            .collect();

        assert_eq!(rows, vec!["a..*", "Sx*G", "*..."]);
        assert!(text.ends_with(&format!("{LEGEND}\n")));
    }

    #[test]
    fn frame_includes_panel_for_selected_hero() {
        let snapshot = HeroSnapshot {
            id: HeroId::new(5, 6),
            kind: HeroKind::Mage,
            cell: CellCoord::new(2, 2),
            level: 1,
            experience: 0,
            stats: HeroStats::from_archetype(HeroKind::Mage.archetype()),
            cost: 700,
            sell_value: 490,
            selected: true,
            abilities: Vec::new(),
            passives: Vec::new(),
        };
        let presentation = Presentation::new(
            "Hero Defense",
            Hud {
                gold: 300,
                lives: 20,
                wave: 1,
                wave_active: false,
                paused: false,
            },
            small_scene(),
            ShopEntry::catalog(300, None),
            Some(snapshot),
        );

        let text = render(&presentation);
        assert!(text.starts_with("== Hero Defense ==\n"));
        assert!(text.contains("Lives: 20  Gold: 300  Wave: 1  [Start wave 1]"));
        assert!(text.contains("Mage [M] level 1, magical  (hero_5_6)"));
        assert!(text.contains("experience 0/100 (0%)"));
        assert!(text.contains("area radius 1 cells"));
        assert!(text.contains("sell for 490 gold"));
        assert!(text.contains(" - priest"));
        assert!(text.contains("   archer"));
    }

    #[test]
    fn text_renderer_writes_frames_to_sink() {
        let presentation = Presentation::new(
            "Hero Defense",
            Hud {
                gold: 0,
                lives: 1,
                wave: 2,
                wave_active: true,
                paused: false,
            },
            small_scene(),
            Vec::new(),
            None,
        );
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.present(&presentation).expect("frame written");

        let written = String::from_utf8(renderer.into_inner()).expect("utf-8 frame");
        assert!(written.contains("[Wave in progress...] [Pause]"));
    }
}
