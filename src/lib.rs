//! Gridbot: a toy robot on a bounded grid.
//!
//! The robot is a small pure state machine. The shell around it reads one
//! command per line, hands it to a [`session::Session`], and prints whatever
//! comes back.
//!
//! # Modules
//!
//! - [`core`]: plane, headings, robot states and transitions (no I/O)
//! - [`command`]: the line grammar
//! - [`session`]: dispatch of commands against the current robot
//! - [`cli`]: argument parsing, logging setup and the read loop
//!
//! # Example
//!
//! ```rust
//! use gridbot::core::{Coordinate, Direction, Plane, Robot};
//!
//! let plane = Plane::default();
//! let robot = Robot::place(&plane, Coordinate::new(1, 2), Direction::East).unwrap();
//!
//! let placement = robot.placement().unwrap();
//! let placement = placement.advance(&plane).unwrap();
//! let placement = placement.advance(&plane).unwrap().turn_left();
//! let placement = placement.advance(&plane).unwrap();
//!
//! assert_eq!(placement.report(), "Output: 3,3,NORTH");
//! ```

pub mod cli;
pub mod command;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use crate::core::{Coordinate, Direction, Placement, Plane, Robot, RobotError, State};
pub use session::{Control, Outcome, Session, SessionBuilder};
