//! Compass headings and their rotation cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heading of a placed robot.
///
/// Rotation follows the clockwise cycle `NORTH -> EAST -> SOUTH -> WEST -> NORTH`.
/// Turning left walks the same cycle backwards.
///
/// # Example
///
/// ```rust
/// use gridbot::core::Direction;
///
/// assert_eq!(Direction::North.right(), Direction::East);
/// assert_eq!(Direction::North.left(), Direction::West);
/// assert_eq!("SOUTH".parse::<Direction>(), Ok(Direction::South));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order, starting at north.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Next heading counter-clockwise.
    pub fn left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Next heading clockwise.
    pub fn right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Unit offset `(dx, dy)` of one step along this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Protocol token, e.g. `NORTH`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not one of `NORTH`, `EAST`, `SOUTH`, `WEST`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    // Case-sensitive, matching the command protocol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CLOCKWISE
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_walks_clockwise() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::East.right(), Direction::South);
        assert_eq!(Direction::South.right(), Direction::West);
        assert_eq!(Direction::West.right(), Direction::North);
    }

    #[test]
    fn left_walks_counter_clockwise() {
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.left(), Direction::South);
        assert_eq!(Direction::South.left(), Direction::East);
        assert_eq!(Direction::East.left(), Direction::North);
    }

    #[test]
    fn delta_is_a_unit_step() {
        for direction in Direction::CLOCKWISE {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn parse_accepts_protocol_tokens_only() {
        assert_eq!("WEST".parse::<Direction>(), Ok(Direction::West));
        assert!("west".parse::<Direction>().is_err());
        assert!("NORTHEAST".parse::<Direction>().is_err());
    }

    #[test]
    fn display_matches_token() {
        for direction in Direction::CLOCKWISE {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn direction_serializes_as_token() {
        let json = serde_json::to_string(&Direction::North).unwrap();
        assert_eq!(json, "\"NORTH\"");
    }
}
