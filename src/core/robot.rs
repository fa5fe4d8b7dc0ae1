//! The robot state machine.
//!
//! A robot is either unplaced or placed at a coordinate with a heading.
//! Every operation returns a fresh value; on rejection the caller simply
//! keeps the value it already has.

use super::direction::Direction;
use super::plane::{Coordinate, Plane};
use super::state::State;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a robot operation can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobotError {
    #[error("Robot is not placed within {plane}")]
    OutOfBounds { plane: Plane },

    #[error("Robot cannot move there.")]
    BlockedByBoundary,

    #[error("Please place a robot first with 'PLACE' command.")]
    NotPlaced,
}

/// Position and heading of a placed robot.
///
/// Only [`Robot::place`] and [`Placement::advance`] produce placements
/// from coordinates, and both check plane containment first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    coordinate: Coordinate,
    direction: Direction,
}

impl Placement {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Step one unit forward along the current heading.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridbot::core::{Coordinate, Direction, Plane, Robot, RobotError};
    ///
    /// let plane = Plane::default();
    /// let robot = Robot::place(&plane, Coordinate::new(0, 0), Direction::North).unwrap();
    /// let placement = robot.placement().unwrap();
    ///
    /// let moved = placement.advance(&plane).unwrap();
    /// assert_eq!(moved.coordinate(), Coordinate::new(0, 1));
    ///
    /// let facing_south = placement.turn_right().turn_right();
    /// assert_eq!(facing_south.advance(&plane), Err(RobotError::BlockedByBoundary));
    /// ```
    pub fn advance(&self, plane: &Plane) -> Result<Placement, RobotError> {
        let candidate = self.coordinate.step(self.direction);
        match candidate {
            Some(coordinate) if plane.contains(coordinate) => Ok(Placement {
                coordinate,
                direction: self.direction,
            }),
            _ => Err(RobotError::BlockedByBoundary),
        }
    }

    pub fn turn_left(&self) -> Placement {
        Placement {
            direction: self.direction.left(),
            ..*self
        }
    }

    pub fn turn_right(&self) -> Placement {
        Placement {
            direction: self.direction.right(),
            ..*self
        }
    }

    /// Render as `Output: <x>,<y>,<DIRECTION>`.
    pub fn report(&self) -> String {
        format!("Output: {},{}", self.coordinate, self.direction)
    }
}

/// Robot state: unplaced until the first successful placement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Robot {
    #[default]
    Unplaced,
    Placed(Placement),
}

impl Robot {
    /// Place a robot, replacing whatever state came before.
    ///
    /// Fails with [`RobotError::OutOfBounds`] if the plane does not contain
    /// `coordinate`.
    pub fn place(
        plane: &Plane,
        coordinate: Coordinate,
        direction: Direction,
    ) -> Result<Robot, RobotError> {
        if !plane.contains(coordinate) {
            return Err(RobotError::OutOfBounds { plane: *plane });
        }

        Ok(Robot::Placed(Placement {
            coordinate,
            direction,
        }))
    }

    /// The current placement, or [`RobotError::NotPlaced`].
    pub fn placement(&self) -> Result<&Placement, RobotError> {
        match self {
            Robot::Placed(placement) => Ok(placement),
            Robot::Unplaced => Err(RobotError::NotPlaced),
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Robot::Placed(_))
    }
}

impl State for Robot {
    fn name(&self) -> &str {
        match self {
            Self::Unplaced => "Unplaced",
            Self::Placed(_) => "Placed",
        }
    }
}
