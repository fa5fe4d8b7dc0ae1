//! Errors produced while reading a command line.

use thiserror::Error;

/// Hint printed after a malformed `PLACE` line.
pub const PLACE_HINT: &str =
    "Hint: PLACE <x coordinate>,<y coordinate>,<face direction: NORTH, SOUTH, EAST, WEST>";

/// A line that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command is blank")]
    Blank,

    #[error("Invalid PLACE arguments: '{}'\n{}", .line, PLACE_HINT)]
    Syntax { line: String },

    #[error("Unknown command '{line}', type 'HELP' to see available commands.")]
    Unknown { line: String },
}
