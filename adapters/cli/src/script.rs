use std::str::SplitWhitespace;

use hero_defense_core::{CellCoord, HeroKind, UnknownHeroKind};

/// Single instruction of a session script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScriptCommand {
    Shop(HeroKind),
    Click(CellCoord),
    Hover(CellCoord),
    Leave,
    Sell,
    Wave,
    Pause,
    Show,
    Quit,
}

/// Reasons a script line could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ScriptError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),
    #[error("`{command}` takes no more arguments, found `{extra}`")]
    UnexpectedArgument { command: &'static str, extra: String },
    #[error(transparent)]
    UnknownHero(#[from] UnknownHeroKind),
}

/// Parses one script line. Blank lines and comments yield `None`.
pub(crate) fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let content = line.split('#').next().unwrap_or_default();
    let mut words = content.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "shop" => {
            let name = words.next().ok_or(ScriptError::MissingArgument {
                command: "shop",
                expected: "an archetype name",
            })?;
            ScriptCommand::Shop(name.parse()?)
        }
        "click" => ScriptCommand::Click(coordinate("click", &mut words)?),
        "hover" => ScriptCommand::Hover(coordinate("hover", &mut words)?),
        "leave" => ScriptCommand::Leave,
        "sell" => ScriptCommand::Sell,
        "wave" => ScriptCommand::Wave,
        "pause" => ScriptCommand::Pause,
        "show" => ScriptCommand::Show,
        "quit" | "exit" => ScriptCommand::Quit,
        _ => return Err(ScriptError::UnknownCommand(keyword.to_owned())),
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::UnexpectedArgument {
            command: command.keyword(),
            extra: extra.to_owned(),
        });
    }

    Ok(Some(command))
}

impl ScriptCommand {
    fn keyword(self) -> &'static str {
        match self {
            Self::Shop(_) => "shop",
            Self::Click(_) => "click",
            Self::Hover(_) => "hover",
            Self::Leave => "leave",
            Self::Sell => "sell",
            Self::Wave => "wave",
            Self::Pause => "pause",
            Self::Show => "show",
            Self::Quit => "quit",
        }
    }
}

fn coordinate(
    command: &'static str,
    words: &mut SplitWhitespace<'_>,
) -> Result<CellCoord, ScriptError> {
    let missing = ScriptError::MissingArgument {
        command,
        expected: "a column and a row",
    };
    let column = words.next().ok_or_else(|| missing.clone())?;
    let row = words.next().ok_or(missing)?;
    Ok(CellCoord::new(number(column)?, number(row)?))
}

fn number(word: &str) -> Result<u32, ScriptError> {
    word.parse()
        .map_err(|_| ScriptError::InvalidCoordinate(word.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# place the first archer"), Ok(None));
    }

    #[test]
    fn commands_parse_with_trailing_comments() {
        assert_eq!(
            parse_line("shop Archer  # cheapest"),
            Ok(Some(ScriptCommand::Shop(HeroKind::Archer)))
        );
        assert_eq!(
            parse_line("click 3 4"),
            Ok(Some(ScriptCommand::Click(CellCoord::new(3, 4))))
        );
        assert_eq!(
            parse_line("HOVER 0 17"),
            Ok(Some(ScriptCommand::Hover(CellCoord::new(0, 17))))
        );
        assert_eq!(parse_line("wave"), Ok(Some(ScriptCommand::Wave)));
        assert_eq!(parse_line("exit"), Ok(Some(ScriptCommand::Quit)));
    }

    #[test]
    fn malformed_lines_report_the_problem() {
        assert_eq!(
            parse_line("build 1 1"),
            Err(ScriptError::UnknownCommand("build".to_owned()))
        );
        assert_eq!(
            parse_line("click 3"),
            Err(ScriptError::MissingArgument {
                command: "click",
                expected: "a column and a row",
            })
        );
        assert_eq!(
            parse_line("hover -1 2"),
            Err(ScriptError::InvalidCoordinate("-1".to_owned()))
        );
        assert_eq!(
            parse_line("sell now"),
            Err(ScriptError::UnexpectedArgument {
                command: "sell",
                extra: "now".to_owned(),
            })
        );
        assert_eq!(
            parse_line("shop paladin").map_err(|error| error.to_string()),
            Err("unknown hero archetype `paladin`".to_owned())
        );
    }
}
