use std::{fs, path::Path};

use anyhow::{Context, Result};
use hero_defense_core::{CellCoord, EnemyPath, GridSize};
use hero_defense_world::Config;
use serde::Deserialize;

/// On-disk layout of the session configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    starting_gold: Option<u32>,
    starting_lives: Option<u32>,
    starting_wave: Option<u32>,
    id_seed: Option<u64>,
    map: Option<MapSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MapSection {
    columns: u32,
    rows: u32,
    #[serde(default)]
    path: Option<Vec<PathCell>>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathCell {
    column: u32,
    row: u32,
}

/// Loads a session configuration from a TOML file.
pub(crate) fn load(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid configuration {}", path.display()))
}

/// Parses TOML text, filling every missing key with its default.
pub(crate) fn parse(contents: &str) -> Result<Config> {
    let file: ConfigFile = toml::from_str(contents).context("failed to parse TOML")?;
    let defaults = Config::default();

    let (grid, path) = match file.map {
        None => (defaults.grid, defaults.path),
        Some(map) => {
            let grid = GridSize::new(map.columns, map.rows);
            let path = match map.path {
                Some(cells) => EnemyPath::new(
                    cells
                        .into_iter()
                        .map(|cell| CellCoord::new(cell.column, cell.row))
                        .collect(),
                ),
                None => {
                    log::warn!("map section has no path, using the standard route");
                    defaults.path
                }
            };
            (grid, path)
        }
    };

    Ok(Config {
        starting_gold: file.starting_gold.unwrap_or(defaults.starting_gold),
        starting_lives: file.starting_lives.unwrap_or(defaults.starting_lives),
        starting_wave: file.starting_wave.unwrap_or(defaults.starting_wave),
        grid,
        path,
        id_seed: file.id_seed.unwrap_or(defaults.id_seed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("").expect("empty configuration");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn economy_keys_override_defaults() {
        let config = parse(
            r#"
            starting_gold = 2500
            starting_wave = 3
            id_seed = 42
            "#,
        )
        .expect("economy overrides");

        assert_eq!(config.starting_gold, 2500);
        assert_eq!(config.starting_lives, 20);
        assert_eq!(config.starting_wave, 3);
        assert_eq!(config.id_seed, 42);
        assert_eq!(config.grid, GridSize::new(18, 18));
    }

    #[test]
    fn map_section_describes_custom_route() {
        let config = parse(
            r#"
            [map]
            columns = 4
            rows = 3
            path = [
                { column = 0, row = 1 },
                { column = 1, row = 1 },
                { column = 2, row = 1 },
                { column = 3, row = 1 },
            ]
            "#,
        )
        .expect("custom map");

        assert_eq!(config.grid, GridSize::new(4, 3));
        assert_eq!(config.path.len(), 4);
        assert_eq!(config.path.goal(), Some(CellCoord::new(3, 1)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_map_fails_validation() {
        let config = parse(
            r#"
            [map]
            columns = 4294967295
            rows = 4294967295
            path = [{ column = 0, row = 0 }]
            "#,
        )
        .expect("parses");

        let error = config.validate().expect_err("grid too large");
        assert_eq!(
            error.to_string(),
            "grid of 4294967295x4294967295 cells exceeds 256 cells per side"
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = parse("starting_mana = 5").expect_err("unknown key");
        assert!(format!("{error:#}").contains("starting_mana"));
    }
}
