//! Point loads on members

use serde::{Deserialize, Serialize};

/// Direction of a member load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadDirection {
    /// Force in member's local x direction (axial)
    Fx,
    /// Force in member's local y direction
    Fy,
    /// Force in member's local z direction
    Fz,
    /// Force in global X direction
    FX,
    /// Force in global Y direction
    FY,
    /// Force in global Z direction
    FZ,
}

impl LoadDirection {
    /// Check if this direction is in member-local coordinates
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Fx | Self::Fy | Self::Fz)
    }

    /// Global direction unit vector, if the direction is global
    pub fn global_vector(&self) -> Option<[f64; 3]> {
        match self {
            Self::FX => Some([1.0, 0.0, 0.0]),
            Self::FY => Some([0.0, 1.0, 0.0]),
            Self::FZ => Some([0.0, 0.0, 1.0]),
            _ => None,
        }
    }

    /// Local axis index (0=x, 1=y, 2=z), if the direction is local
    pub fn local_axis(&self) -> Option<usize> {
        match self {
            Self::Fx => Some(0),
            Self::Fy => Some(1),
            Self::Fz => Some(2),
            _ => None,
        }
    }
}

/// A concentrated load on a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude
    pub magnitude: f64,
    /// Distance from i-node
    pub position: f64,
    /// Load direction
    pub direction: LoadDirection,
    /// Load case
    pub case: String,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(magnitude: f64, position: f64, direction: LoadDirection, case: &str) -> Self {
        Self {
            magnitude,
            position,
            direction,
            case: case.to_string(),
        }
    }

    /// Create a downward (negative global Y) point load
    pub fn downward(magnitude: f64, position: f64, case: &str) -> Self {
        Self::new(-magnitude.abs(), position, LoadDirection::FY, case)
    }

    /// Create an axial load (in local x direction)
    pub fn axial(magnitude: f64, position: f64, case: &str) -> Self {
        Self::new(magnitude, position, LoadDirection::Fx, case)
    }
}
