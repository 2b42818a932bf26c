//! Domain layer: tree generation, traversal and export
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod graph;
pub mod render;
pub mod traversal;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::{build, label, max_nodes, Layout, TreeBuilder, MAX_LEVELS, MAX_NODES};
pub use error::{DomainError, DomainResult};
pub use graph::{Graph, GraphEdge, GraphNode};
pub use render::{format_sequence, TreeRender};
pub use traversal::{inorder, postorder, preorder, traverse, Order, Traversals};
