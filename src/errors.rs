use std::fmt;
use std::error::Error;

/// Represents errors raised while constructing simulation objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Indicates a non-positive or non-finite sphere radius.
    InvalidRadius,
    /// Indicates box corners that are not ordered componentwise (min ≤ max).
    InvalidBounds,
    /// Indicates a zero-length plane normal.
    DegenerateNormal,
    /// Indicates a wall rectangle whose corners are not ordered bottom-left to top-right.
    InvalidExtent,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidRadius => write!(f, "Sphere radius must be positive and finite"),
            SimulationError::InvalidBounds => write!(f, "Box min corner must not exceed max corner"),
            SimulationError::DegenerateNormal => write!(f, "Plane normal must have non-zero length"),
            SimulationError::InvalidExtent => write!(f, "Wall corners must run bottom-left to top-right"),
        }
    }
}

impl Error for SimulationError {}
