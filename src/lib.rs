//! Binary tree generator for teaching depth-first traversals.
//!
//! From a level count and a node count, [`domain::build`] produces one of two
//! trees: a skewed chain when both numbers are equal, otherwise a complete
//! tree filled level by level. [`domain::traverse`] lists the nodes in
//! preorder, inorder and postorder, and [`domain::Graph`] exports nodes and
//! edges for an external graph viewer.
//!
//! ```
//! use treeviz::domain::{build, traverse};
//!
//! let tree = build(3, 5).unwrap();
//! assert_eq!(tree.to_string(), "{A:[B,C], B:[D,E], C:[], D:[], E:[]}");
//!
//! let t = traverse(&tree);
//! assert_eq!(t.inorder, vec!['D', 'B', 'E', 'A', 'C']);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{build, traverse, DomainError, Traversals, TreeArena};
