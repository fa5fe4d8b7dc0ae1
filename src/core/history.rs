//! State transition history tracking.
//!
//! Keeps the most recent accepted transitions of a session. Rejected
//! commands never appear here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single accepted transition.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Protocol keyword of the command that caused it, e.g. `MOVE`
    pub command: &'static str,
}

/// Ordered history of state transitions, bounded to the newest `limit`.
///
/// `record` consumes the history and hands back the extended one, so
/// appending never copies earlier entries.
///
/// # Example
///
/// ```rust
/// use gridbot::core::{Coordinate, Direction, Plane, Robot, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let plane = Plane::default();
/// let placed = Robot::place(&plane, Coordinate::new(0, 0), Direction::North).unwrap();
///
/// let history = StateHistory::new().record(StateTransition {
///     from: Robot::Unplaced,
///     to: placed,
///     timestamp: Utc::now(),
///     command: "PLACE",
/// });
///
/// assert_eq!(history.get_path(), vec![&Robot::Unplaced, &placed]);
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Entries kept by [`StateHistory::new`].
    pub const DEFAULT_LIMIT: usize = 1024;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// History keeping at most `limit` transitions; older ones are dropped.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        if self.limit == 0 {
            return self;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the oldest retained `from` state followed by the `to` state
    /// of each transition, in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last retained transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
