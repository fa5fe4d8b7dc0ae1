//! Command dispatch over the robot state machine.
//!
//! A [`Session`] owns the only mutable slot in the program: the current
//! [`Robot`] value. Each command either swaps that slot for a new value or
//! leaves it alone and reports why.

pub mod builder;
pub mod error;

pub use builder::SessionBuilder;
pub use error::BuildError;

use crate::command::Command;
use crate::core::{Placement, Plane, Robot, RobotError, State, StateHistory, StateTransition};
use chrono::Utc;

/// Static text printed for `HELP`.
pub const HELP_TEXT: [&str; 6] = [
    "Type 'PLACE <x,y,NORTH|SOUTH|EAST|WEST>' to place the robot in x & y coordinate with face direction (e.g. PLACE 1,1,NORTH).",
    "Type 'MOVE' to move the robot one unit forward in a direction the robot is facing.",
    "Type 'LEFT' to turn the face direction to the left.",
    "Type 'RIGHT' to turn the face direction to the right.",
    "Type 'REPORT' to announce the robot's current coordinate and its face direction.",
    "Type 'EXIT' to exit the program.",
];

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Text produced by one command, plus what the loop should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: Vec<String>,
    pub control: Control,
}

impl Outcome {
    fn silent() -> Self {
        Self {
            output: Vec::new(),
            control: Control::Continue,
        }
    }

    fn print<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            output: lines.into_iter().map(Into::into).collect(),
            control: Control::Continue,
        }
    }

    fn exit() -> Self {
        Self {
            output: Vec::new(),
            control: Control::Exit,
        }
    }
}

enum Step {
    Transition(Robot),
    Report(String),
}

/// One interactive run: a plane, the current robot, and what happened so far.
#[derive(Debug)]
pub struct Session {
    plane: Plane,
    robot: Robot,
    history: StateHistory<Robot>,
}

impl Session {
    /// Start a session with an unplaced robot.
    pub fn new(plane: Plane) -> Self {
        tracing::debug!(%plane, "session started");
        Self {
            plane,
            robot: Robot::Unplaced,
            history: StateHistory::new(),
        }
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Most recent accepted transitions, oldest first.
    pub fn history(&self) -> &StateHistory<Robot> {
        &self.history
    }

    /// Parse and execute one input line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridbot::core::Plane;
    /// use gridbot::session::{Control, Session};
    ///
    /// let mut session = Session::new(Plane::default());
    /// session.handle_line("PLACE 0,0,NORTH");
    /// session.handle_line("MOVE");
    ///
    /// let outcome = session.handle_line("REPORT");
    /// assert_eq!(outcome.output, vec!["Output: 0,1,NORTH".to_string()]);
    /// assert_eq!(outcome.control, Control::Continue);
    /// ```
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(error) => {
                tracing::info!(%error, "line rejected");
                Outcome::print([error.to_string()])
            }
        }
    }

    /// Execute an already parsed command.
    ///
    /// Rejected commands leave the current robot untouched; the last
    /// successful state always wins.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let step = match command {
            Command::Help => return Outcome::print(HELP_TEXT),
            Command::Exit => return Outcome::exit(),
            Command::Place {
                coordinate,
                direction,
            } => Robot::place(&self.plane, coordinate, direction).map(Step::Transition),
            Command::Move => self
                .placement()
                .and_then(|p| p.advance(&self.plane))
                .map(|p| Step::Transition(Robot::Placed(p))),
            Command::Left => self
                .placement()
                .map(|p| Step::Transition(Robot::Placed(p.turn_left()))),
            Command::Right => self
                .placement()
                .map(|p| Step::Transition(Robot::Placed(p.turn_right()))),
            Command::Report => self.placement().map(|p| Step::Report(p.report())),
        };

        match step {
            Ok(Step::Transition(next)) => {
                self.commit(command, next);
                Outcome::silent()
            }
            Ok(Step::Report(line)) => Outcome::print([line]),
            Err(error) => {
                tracing::info!(command = command.keyword(), %error, "command rejected");
                Outcome::print([error.to_string()])
            }
        }
    }

    fn placement(&self) -> Result<Placement, RobotError> {
        self.robot.placement().copied()
    }

    fn commit(&mut self, command: Command, next: Robot) {
        tracing::debug!(
            command = command.keyword(),
            from = self.robot.name(),
            to = ?next,
            "transition accepted"
        );

        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from: self.robot,
            to: next,
            timestamp: Utc::now(),
            command: command.keyword(),
        });
        self.robot = next;
    }
}
