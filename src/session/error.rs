//! Errors raised while configuring a session.

use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Plane {axis} bound {value} exceeds the largest coordinate ({max})", max = i32::MAX)]
    InvalidBound { axis: &'static str, value: u32 },
}
