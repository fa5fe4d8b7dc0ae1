//! State trait shared by every value the session can hold.
//!
//! States are plain immutable values. Transitions never mutate a state in
//! place, they produce the next one.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. `Clone` and `PartialEq` are needed for history
/// tracking, the serde bounds let a history be dumped for diagnostics.
///
/// # Example
///
/// ```rust
/// use gridbot::core::{Robot, State};
///
/// let robot = Robot::Unplaced;
/// assert_eq!(robot.name(), "Unplaced");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name for display/logging.
    fn name(&self) -> &str;
}
