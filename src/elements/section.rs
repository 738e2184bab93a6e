//! Section properties for frame elements

use serde::{Deserialize, Serialize};

/// Cross-section properties for frame elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area in m²
    pub a: f64,
    /// Moment of inertia about local y-axis in m⁴
    pub iy: f64,
    /// Moment of inertia about local z-axis in m⁴
    pub iz: f64,
    /// Torsional constant in m⁴
    pub j: f64,
    /// Depth of section (optional) in m
    pub depth: Option<f64>,
    /// Width of section (optional) in m
    pub width: Option<f64>,
}

impl Section {
    /// Create a new section with basic properties
    pub fn new(a: f64, iy: f64, iz: f64, j: f64) -> Self {
        Self {
            a,
            iy,
            iz,
            j,
            depth: None,
            width: None,
        }
    }

    /// Create a rectangular section
    ///
    /// Iy is the strong-axis inertia (bending in the vertical plane for a
    /// horizontal member), Iz the weak-axis inertia.
    pub fn rectangular(width: f64, depth: f64) -> Self {
        let a = width * depth;
        let iy = width * depth.powi(3) / 12.0;
        let iz = depth * width.powi(3) / 12.0;

        // Torsional constant for rectangle (approximate)
        let (a_dim, b_dim) = if width > depth {
            (width, depth)
        } else {
            (depth, width)
        };
        let j = a_dim * b_dim.powi(3) / 3.0 * (1.0 - 0.63 * b_dim / a_dim);

        Self {
            a,
            iy,
            iz,
            j,
            depth: Some(depth),
            width: Some(width),
        }
    }

    /// Check that all stiffness-relevant properties are positive
    pub fn is_physical(&self) -> bool {
        self.a > 0.0 && self.iy > 0.0 && self.iz > 0.0 && self.j > 0.0
    }
}

impl Default for Section {
    fn default() -> Self {
        // Default to a 200mm x 200mm rectangular section
        Self::rectangular(0.2, 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_section() {
        let section = Section::rectangular(0.3, 0.5);
        let expected_a = 0.3 * 0.5;
        let expected_iy = 0.3 * 0.5_f64.powi(3) / 12.0;

        assert!((section.a - expected_a).abs() < 1e-10);
        assert!((section.iy - expected_iy).abs() < 1e-10);
        assert!(section.is_physical());
    }

    #[test]
    fn test_non_physical_section() {
        let section = Section::new(0.15, 0.003125, -0.001125, 0.001);
        assert!(!section.is_physical());
    }
}
