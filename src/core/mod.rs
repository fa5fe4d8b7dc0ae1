//! Core robot simulation types and logic.
//!
//! This module contains the pure part of the simulator:
//! - The bounded plane and grid coordinates
//! - Headings and their rotation cycle
//! - The robot state machine
//! - Bounded history of accepted transitions
//!
//! Nothing in here performs I/O.

mod direction;
mod history;
mod plane;
mod robot;
mod state;

pub use direction::{Direction, ParseDirectionError};
pub use history::{StateHistory, StateTransition};
pub use plane::{Coordinate, Plane};
pub use robot::{Placement, Robot, RobotError};
pub use state::State;
