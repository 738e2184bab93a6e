//! frame3d - A native Rust 3D frame analysis library
//!
//! Builds 3D frame models (beams and columns), runs linear static analysis,
//! and reports member internal forces in PyNite's local-axis conventions:
//! - Local x: along the member axis (i-node to j-node)
//! - Local y: transverse, in the vertical plane for horizontal members
//! - Local z: transverse, horizontal for horizontal members
//!
//! ## Example
//! ```rust
//! use frame3d::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! model.add_material("Steel", Material::steel()).unwrap();
//! model.add_section("R300x500", Section::rectangular(0.3, 0.5)).unwrap();
//!
//! model.add_node("N1", Node::new(0.0, 0.0, 0.0)).unwrap();
//! model.add_node("N2", Node::new(8.0, 0.0, 0.0)).unwrap();
//! model.add_member("B1", Member::new("N1", "N2", "Steel", "R300x500")).unwrap();
//!
//! model.add_support("N1", Support::fixed()).unwrap();
//! model.add_support("N2", Support::fixed()).unwrap();
//!
//! // 10 kN/m downward, global Y
//! model
//!     .add_member_dist_load("B1", DistributedLoad::uniform(-10000.0, LoadDirection::FY, "Case 1"))
//!     .unwrap();
//!
//! model.analyze_linear().unwrap();
//!
//! let internal = model.member_internal_forces("B1", FrameModel::DEFAULT_COMBO).unwrap();
//! let midspan_mz = internal.moment_z(4.0).unwrap();
//! assert!(midspan_mz.abs() > 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod report;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{Material, Member, Node, Section, Support};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{DistributedLoad, LoadCombination, LoadDirection, NodeLoad, PointLoad};
    pub use crate::model::{FrameModel, Phase};
    pub use crate::results::{MemberForces, MemberInternalForces, NodeDisplacement, Reactions};
}
