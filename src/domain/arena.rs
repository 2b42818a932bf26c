use generational_arena::{Arena, Index};
use std::collections::BTreeMap;
use std::fmt;
use tracing::instrument;

/// Data payload for tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    /// Single character label, `'A'` for the first generated node
    pub label: char,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Tree node in the arena-based binary tree.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Child indices; position 0 is the left child, position 1 the right child
    pub children: Vec<Index>,
}

impl TreeNode {
    pub fn left(&self) -> Option<Index> {
        self.children.first().copied()
    }

    pub fn right(&self) -> Option<Index> {
        self.children.get(1).copied()
    }
}

/// Arena-based binary tree.
///
/// Nodes are only ever appended, in generation order, so `order[i]` is the
/// arena index of the node labelled `label(i)`. Each tree is built fresh by
/// [`TreeBuilder`](crate::domain::TreeBuilder) and is immutable afterwards.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
    order: Vec<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            order: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
            root: None,
            order: Vec::with_capacity(n),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);
        self.order.push(node_idx);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                debug_assert!(parent.children.len() < 2, "binary node overflow");
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Label of the node at `idx`.
    pub fn label(&self, idx: Index) -> Option<char> {
        self.get_node(idx).map(|n| n.data.label)
    }

    /// Labels in generation order.
    pub fn labels(&self) -> Vec<char> {
        self.order.iter().filter_map(|&idx| self.label(idx)).collect()
    }

    pub fn find(&self, label: char) -> Option<Index> {
        self.order
            .iter()
            .copied()
            .find(|&idx| self.label(idx) == Some(label))
    }

    /// Child labels of `label`, left first. None if the label is not in the tree.
    pub fn children_of(&self, label: char) -> Option<Vec<char>> {
        let node = self.get_node(self.find(label)?)?;
        Some(
            node.children
                .iter()
                .filter_map(|&child| self.label(child))
                .collect(),
        )
    }

    /// The label -> children mapping.
    pub fn to_map(&self) -> BTreeMap<char, Vec<char>> {
        self.order
            .iter()
            .filter_map(|&idx| {
                let node = self.get_node(idx)?;
                let children = node
                    .children
                    .iter()
                    .filter_map(|&child| self.label(child))
                    .collect();
                Some((node.data.label, children))
            })
            .collect()
    }

    /// Number of levels, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Labels of all nodes without children, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<char> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<char>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node.data.label);
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }
}

impl PartialEq for TreeArena {
    fn eq(&self, other: &Self) -> bool {
        self.to_map() == other.to_map()
    }
}

impl Eq for TreeArena {}

/// Mapping notation: `{A:[B,C], B:[], C:[]}`.
impl fmt::Display for TreeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, children)) in self.to_map().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:[{}]", label, itertools::join(children, ","))?;
        }
        write!(f, "}}")
    }
}
