//! Load types and load combinations

mod distributed;
mod load_combo;
mod node_load;
mod point_load;

pub use distributed::DistributedLoad;
pub use load_combo::LoadCombination;
pub use node_load::NodeLoad;
pub use point_load::{LoadDirection, PointLoad};
