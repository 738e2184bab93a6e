//! Distributed loads on members

use super::point_load::LoadDirection;
use serde::{Deserialize, Serialize};

/// A distributed (line) load applied over the full length of a member
///
/// The intensity varies linearly from `w1` at the i-node to `w2` at the
/// j-node. A uniform load has `w1 == w2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity at the i-node (force per unit length)
    pub w1: f64,
    /// Intensity at the j-node (force per unit length)
    pub w2: f64,
    /// Load direction
    pub direction: LoadDirection,
    /// Load case
    pub case: String,
}

impl DistributedLoad {
    /// Create a new linearly varying distributed load
    pub fn new(w1: f64, w2: f64, direction: LoadDirection, case: &str) -> Self {
        Self {
            w1,
            w2,
            direction,
            case: case.to_string(),
        }
    }

    /// Create a uniform distributed load over the full member length
    pub fn uniform(w: f64, direction: LoadDirection, case: &str) -> Self {
        Self::new(w, w, direction, case)
    }

    /// Create a uniform downward load (negative global Y)
    pub fn uniform_downward(w: f64, case: &str) -> Self {
        Self::uniform(-w.abs(), LoadDirection::FY, case)
    }

    /// Check if the load is uniform (constant intensity)
    pub fn is_uniform(&self) -> bool {
        (self.w1 - self.w2).abs() < 1e-10
    }

    /// Total force resultant over a member of the given length
    pub fn total_force(&self, length: f64) -> f64 {
        (self.w1 + self.w2) / 2.0 * length
    }
}
