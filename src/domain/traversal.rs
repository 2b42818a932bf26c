//! Depth-first traversals of a generated tree.
//!
//! Each order is its own recursive walk over the immutable arena. Recursion
//! depth is bounded by the tree depth, which the tool caps at five levels.

use std::fmt;
use std::str::FromStr;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::arena::TreeArena;
use crate::domain::error::DomainError;

/// The three classical depth-first orders.
///
/// Deserializes through [`FromStr`], so config files and `TREEVIZ_ORDERS`
/// take the same spellings as `--order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Order {
    Preorder,
    Inorder,
    Postorder,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];

    /// Heading used when displaying a sequence.
    pub fn title(&self) -> &'static str {
        match self {
            Order::Preorder => "Preorder",
            Order::Inorder => "Inorder",
            Order::Postorder => "Postorder",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Preorder => write!(f, "preorder"),
            Order::Inorder => write!(f, "inorder"),
            Order::Postorder => write!(f, "postorder"),
        }
    }
}

impl FromStr for Order {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" => Ok(Order::Preorder),
            "in" | "inorder" => Ok(Order::Inorder),
            "post" | "postorder" => Ok(Order::Postorder),
            _ => Err(DomainError::UnknownOrder(s.to_string())),
        }
    }
}

impl TryFrom<String> for Order {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Result of traversing one tree in all three orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversals {
    pub preorder: Vec<char>,
    pub inorder: Vec<char>,
    pub postorder: Vec<char>,
}

impl Traversals {
    pub fn get(&self, order: Order) -> &[char] {
        match order {
            Order::Preorder => &self.preorder,
            Order::Inorder => &self.inorder,
            Order::Postorder => &self.postorder,
        }
    }
}

/// Computes all three traversals, starting at the root.
#[instrument(level = "debug", skip(tree), fields(nodes = tree.len()))]
pub fn traverse(tree: &TreeArena) -> Traversals {
    Traversals {
        preorder: preorder(tree),
        inorder: inorder(tree),
        postorder: postorder(tree),
    }
}

/// Node, then left subtree, then right subtree.
pub fn preorder(tree: &TreeArena) -> Vec<char> {
    fn walk(tree: &TreeArena, idx: Index, out: &mut Vec<char>) {
        let Some(node) = tree.get_node(idx) else {
            return;
        };
        out.push(node.data.label);
        if let Some(left) = node.left() {
            walk(tree, left, out);
        }
        if let Some(right) = node.right() {
            walk(tree, right, out);
        }
    }

    collect(tree, walk)
}

/// Left subtree, then node, then right subtree.
pub fn inorder(tree: &TreeArena) -> Vec<char> {
    fn walk(tree: &TreeArena, idx: Index, out: &mut Vec<char>) {
        let Some(node) = tree.get_node(idx) else {
            return;
        };
        if let Some(left) = node.left() {
            walk(tree, left, out);
        }
        out.push(node.data.label);
        if let Some(right) = node.right() {
            walk(tree, right, out);
        }
    }

    collect(tree, walk)
}

/// Left subtree, then right subtree, then node.
pub fn postorder(tree: &TreeArena) -> Vec<char> {
    fn walk(tree: &TreeArena, idx: Index, out: &mut Vec<char>) {
        let Some(node) = tree.get_node(idx) else {
            return;
        };
        if let Some(left) = node.left() {
            walk(tree, left, out);
        }
        if let Some(right) = node.right() {
            walk(tree, right, out);
        }
        out.push(node.data.label);
    }

    collect(tree, walk)
}

fn collect(tree: &TreeArena, walk: fn(&TreeArena, Index, &mut Vec<char>)) -> Vec<char> {
    let mut out = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root() {
        walk(tree, root, &mut out);
    }
    out
}
