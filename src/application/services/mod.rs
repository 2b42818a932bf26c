//! Application services

pub mod tree;

pub use tree::{TreeReport, TreeService};
