//! Member element - 3D frame element (beam/column)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A 3D frame member (beam or column)
///
/// The member's local coordinate frame follows PyNite: local x runs from the
/// i-node to the j-node, local y/z are set by the member's orientation
/// (vertical members get local y in the XY plane, horizontal members get
/// local y = global Y) plus the optional `rotation` about local x.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Name of the i-node (start)
    pub i_node: String,
    /// Name of the j-node (end)
    pub j_node: String,
    /// Name of the material
    pub material: String,
    /// Name of the section
    pub section: String,
    /// Rotation about longitudinal axis (radians)
    pub rotation: f64,

    /// Calculated length
    #[serde(skip)]
    pub(crate) length: Option<f64>,

    /// Local end forces by load combination
    /// [Fx_i, Fy_i, Fz_i, Mx_i, My_i, Mz_i, Fx_j, Fy_j, Fz_j, Mx_j, My_j, Mz_j]
    #[serde(skip)]
    pub(crate) local_forces: HashMap<String, [f64; 12]>,
}

impl Member {
    /// Create a new member
    pub fn new(i_node: &str, j_node: &str, material: &str, section: &str) -> Self {
        Self {
            i_node: i_node.to_string(),
            j_node: j_node.to_string(),
            material: material.to_string(),
            section: section.to_string(),
            rotation: 0.0,
            length: None,
            local_forces: HashMap::new(),
        }
    }

    /// Set member rotation about its longitudinal axis
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Get the member length (available once the model has been prepared for analysis)
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Get local end forces for a load combination
    /// Returns [Fx_i, Fy_i, Fz_i, Mx_i, My_i, Mz_i, Fx_j, Fy_j, Fz_j, Mx_j, My_j, Mz_j]
    pub fn local_force(&self, combo_name: &str) -> Option<[f64; 12]> {
        self.local_forces.get(combo_name).copied()
    }
}
