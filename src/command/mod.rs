//! Line-oriented command grammar.
//!
//! One input line is one command. Matching is case-sensitive:
//!
//! ```text
//! PLACE <x>,<y>,<NORTH|SOUTH|EAST|WEST>
//! MOVE | LEFT | RIGHT | REPORT | HELP | EXIT
//! ```
//!
//! Any line starting with `PLACE` that does not fit the placement grammar is
//! a syntax error rather than an unknown command.

pub mod error;

pub use error::{CommandError, PLACE_HINT};

use crate::core::{Coordinate, Direction};
use regex::Regex;
use std::sync::LazyLock;

static PLACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PLACE (?<x>[0-9]+),(?<y>[0-9]+),(?<direction>NORTH|SOUTH|EAST|WEST)$")
        .expect("PLACE pattern is a valid regex")
});

/// A parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place {
        coordinate: Coordinate,
        direction: Direction,
    },
    Move,
    Left,
    Right,
    Report,
    Help,
    Exit,
}

impl Command {
    /// Parse a single input line.
    ///
    /// A trailing `\r` is ignored so CRLF input behaves like LF input.
    /// Lines holding only whitespace count as blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridbot::command::{Command, CommandError};
    /// use gridbot::core::{Coordinate, Direction};
    ///
    /// assert_eq!(
    ///     Command::parse("PLACE 1,2,EAST"),
    ///     Ok(Command::Place {
    ///         coordinate: Coordinate::new(1, 2),
    ///         direction: Direction::East,
    ///     })
    /// );
    /// assert_eq!(Command::parse("MOVE"), Ok(Command::Move));
    /// assert_eq!(Command::parse(""), Err(CommandError::Blank));
    /// ```
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        match line {
            _ if line.trim().is_empty() => Err(CommandError::Blank),
            "MOVE" => Ok(Command::Move),
            "LEFT" => Ok(Command::Left),
            "RIGHT" => Ok(Command::Right),
            "REPORT" => Ok(Command::Report),
            "HELP" => Ok(Command::Help),
            "EXIT" => Ok(Command::Exit),
            _ if line.starts_with("PLACE") => parse_place(line),
            _ => Err(CommandError::Unknown {
                line: line.to_string(),
            }),
        }
    }

    /// Protocol keyword, as recorded in the transition history.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Place { .. } => "PLACE",
            Command::Move => "MOVE",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Report => "REPORT",
            Command::Help => "HELP",
            Command::Exit => "EXIT",
        }
    }
}

fn parse_place(line: &str) -> Result<Command, CommandError> {
    let syntax_error = || CommandError::Syntax {
        line: line.to_string(),
    };

    let captures = PLACE_PATTERN.captures(line).ok_or_else(syntax_error)?;
    // Digits that overflow i32 are a syntax problem, not a boundary one.
    let x = captures["x"].parse().map_err(|_| syntax_error())?;
    let y = captures["y"].parse().map_err(|_| syntax_error())?;
    let direction = captures["direction"].parse().map_err(|_| syntax_error())?;

    Ok(Command::Place {
        coordinate: Coordinate::new(x, y),
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(Command::parse("MOVE"), Ok(Command::Move));
        assert_eq!(Command::parse("LEFT"), Ok(Command::Left));
        assert_eq!(Command::parse("RIGHT"), Ok(Command::Right));
        assert_eq!(Command::parse("REPORT"), Ok(Command::Report));
        assert_eq!(Command::parse("HELP"), Ok(Command::Help));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Exit));
    }

    #[test]
    fn parses_place_with_multi_digit_coordinates() {
        assert_eq!(
            Command::parse("PLACE 12,0,WEST"),
            Ok(Command::Place {
                coordinate: Coordinate::new(12, 0),
                direction: Direction::West,
            })
        );
    }

    #[test]
    fn strips_carriage_return() {
        assert_eq!(Command::parse("REPORT\r"), Ok(Command::Report));
        assert_eq!(Command::parse("\r"), Err(CommandError::Blank));
    }

    #[test]
    fn commands_are_case_sensitive() {
        assert_eq!(
            Command::parse("move"),
            Err(CommandError::Unknown {
                line: "move".to_string()
            })
        );
    }

    #[test]
    fn malformed_place_is_a_syntax_error() {
        for line in [
            "PLACE",
            "PLACE 1,1",
            "PLACE 1,1,north",
            "PLACE -1,0,NORTH",
            "PLACE 1, 1,NORTH",
            "PLACE 99999999999,0,NORTH",
            "PLACEMENT",
        ] {
            assert_eq!(
                Command::parse(line),
                Err(CommandError::Syntax {
                    line: line.to_string()
                }),
                "line: {line}"
            );
        }
    }

    #[test]
    fn place_grammar_accepts_ascii_digits_only() {
        let arabic_indic = "PLACE \u{0663},0,NORTH";

        assert!(!PLACE_PATTERN.is_match(arabic_indic));
        assert_eq!(
            Command::parse(arabic_indic),
            Err(CommandError::Syntax {
                line: arabic_indic.to_string()
            })
        );
        assert!(PLACE_PATTERN.is_match("PLACE 3,0,NORTH"));
    }

    #[test]
    fn syntax_error_message_carries_hint() {
        let error = Command::parse("PLACE x,y,UP").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid PLACE arguments: 'PLACE x,y,UP'\n\
             Hint: PLACE <x coordinate>,<y coordinate>,<face direction: NORTH, SOUTH, EAST, WEST>"
        );
    }

    #[test]
    fn unknown_command_echoes_line() {
        let error = Command::parse("PLEASE").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown command 'PLEASE', type 'HELP' to see available commands."
        );
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert_eq!(Command::parse("   "), Err(CommandError::Blank));
        assert_eq!(Command::parse("\t"), Err(CommandError::Blank));
    }

    #[test]
    fn keyword_matches_protocol() {
        assert_eq!(Command::Move.keyword(), "MOVE");
        assert_eq!(
            Command::parse("PLACE 0,0,NORTH").unwrap().keyword(),
            "PLACE"
        );
    }
}
