//! Builder for constructing sessions.

use crate::core::Plane;
use crate::session::error::BuildError;
use crate::session::Session;

/// Builder for constructing sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use gridbot::session::SessionBuilder;
///
/// let session = SessionBuilder::new().width(9).height(3).build().unwrap();
/// assert_eq!(session.plane().width(), 9);
/// assert_eq!(session.plane().height(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    width: u32,
    height: u32,
}

impl SessionBuilder {
    /// Create a builder for the default 5 x 5 plane.
    pub fn new() -> Self {
        Self {
            width: Plane::DEFAULT_BOUND,
            height: Plane::DEFAULT_BOUND,
        }
    }

    /// Set the largest valid x coordinate.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the largest valid y coordinate.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Build the session.
    /// Returns an error if a bound cannot be reached by any coordinate.
    pub fn build(self) -> Result<Session, BuildError> {
        check_bound("width", self.width)?;
        check_bound("height", self.height)?;

        Ok(Session::new(Plane::new(self.width, self.height)))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_bound(axis: &'static str, value: u32) -> Result<(), BuildError> {
    if i32::try_from(value).is_err() {
        return Err(BuildError::InvalidBound { axis, value });
    }
    Ok(())
}
