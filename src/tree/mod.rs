//! Widget tree: arena storage, engine mirroring, paint walk, hit testing.

pub mod node;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Tree;
