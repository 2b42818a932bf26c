//! Tree builder: turns `(levels, nodes)` into one of two teaching layouts.

use std::fmt;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::error::{DomainError, DomainResult};

/// Deepest tree the tool offers.
pub const MAX_LEVELS: u32 = 5;

/// Largest node count the tool accepts as input.
pub const MAX_NODES: usize = 32;

/// Nodes per level of a complete tree, level 0 first.
pub const LEVEL_CAPACITY: [usize; MAX_LEVELS as usize] = [1, 2, 4, 8, 16];

const FIRST_LABEL: u32 = 'A' as u32;

/// Label of the node generated at `index`: `'A'`, `'B'`, ...
///
/// Past `'Z'` the code points continue (`'['`, `'\\'`, ...).
pub fn label(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| FIRST_LABEL.checked_add(i))
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Maximum number of nodes a binary tree with `levels` levels holds: `2^levels - 1`.
pub fn max_nodes(levels: u32) -> usize {
    1usize
        .checked_shl(levels)
        .map_or(usize::MAX, |n| n - 1)
}

/// Width of `level` in a complete tree, saturating past [`LEVEL_CAPACITY`].
fn level_capacity(level: u32) -> usize {
    LEVEL_CAPACITY
        .get(level as usize)
        .copied()
        .unwrap_or_else(|| 1usize.checked_shl(level).unwrap_or(usize::MAX))
}

/// Generation policy, chosen solely by comparing the two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One chain `A -> B -> C ...`, used when `nodes == levels`
    Skewed,
    /// Breadth-first complete tree, used otherwise
    Distributed,
}

impl Layout {
    pub fn select(levels: u32, nodes: usize) -> Self {
        if nodes == levels as usize {
            Layout::Skewed
        } else {
            Layout::Distributed
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Skewed => write!(f, "skewed"),
            Layout::Distributed => write!(f, "distributed"),
        }
    }
}

/// Constructs binary trees from a level count and a node count.
///
/// The builder only checks capacity. Range checks and `nodes >= levels`
/// belong to the caller (see [`TreeRequest`](crate::application::TreeRequest));
/// with `nodes < levels` the distributed layout simply yields a shallower tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, levels: u32, nodes: usize) -> DomainResult<TreeArena> {
        let max = max_nodes(levels);
        if nodes > max {
            debug!(levels, nodes, max, "capacity exceeded");
            return Err(DomainError::Capacity { levels, nodes, max });
        }

        let layout = Layout::select(levels, nodes);
        debug!(%layout, "building tree");
        let tree = match layout {
            Layout::Skewed => self.build_skewed(nodes),
            Layout::Distributed => self.build_distributed(levels, nodes),
        };
        let depth = tree.depth();
        debug!(nodes = tree.len(), depth, "tree built");
        Ok(tree)
    }

    /// Every node but the last has a single child, its successor.
    fn build_skewed(&self, nodes: usize) -> TreeArena {
        let mut tree = TreeArena::with_capacity(nodes);
        let mut parent = None;
        for position in 0..nodes {
            let data = NodeData {
                label: label(position),
            };
            trace!(label = %data.label, "skewed node");
            parent = Some(tree.insert_node(data, parent));
        }
        tree
    }

    /// Level-order fill: node `i` has children `2i+1` and `2i+2` when they exist.
    ///
    /// Nodes are inserted in level order, so the parent `(i-1)/2` of node `i`
    /// is always present and children land left before right.
    fn build_distributed(&self, levels: u32, nodes: usize) -> TreeArena {
        let mut tree = TreeArena::with_capacity(nodes);
        let mut indices: Vec<Index> = Vec::with_capacity(nodes);

        for level in 0..levels {
            let remaining = nodes - indices.len();
            if remaining == 0 {
                break;
            }
            let width = level_capacity(level).min(remaining);
            trace!(level, width, "filling level");
            for _ in 0..width {
                let position = indices.len();
                let parent = position.checked_sub(1).map(|p| indices[p / 2]);
                let data = NodeData {
                    label: label(position),
                };
                indices.push(tree.insert_node(data, parent));
            }
        }
        tree
    }
}

/// Builds a tree with the default builder.
pub fn build(levels: u32, nodes: usize) -> DomainResult<TreeArena> {
    TreeBuilder::new().build(levels, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn map(entries: &[(char, &[char])]) -> BTreeMap<char, Vec<char>> {
        entries.iter().map(|(k, v)| (*k, v.to_vec())).collect()
    }

    #[test]
    fn test_label_sequence() {
        assert_eq!(label(0), 'A');
        assert_eq!(label(25), 'Z');
        assert_eq!(label(26), '[');
        assert_eq!(label(30), '_');
    }

    #[test]
    fn test_max_nodes() {
        assert_eq!(max_nodes(0), 0);
        assert_eq!(max_nodes(1), 1);
        assert_eq!(max_nodes(3), 7);
        assert_eq!(max_nodes(5), 31);
        assert_eq!(max_nodes(200), usize::MAX);
    }

    #[test]
    fn test_layout_selection() {
        assert_eq!(Layout::select(3, 3), Layout::Skewed);
        assert_eq!(Layout::select(3, 4), Layout::Distributed);
        assert_eq!(Layout::select(3, 2), Layout::Distributed);
    }

    #[test]
    fn given_too_many_nodes_when_building_then_capacity_error() {
        let err = build(2, 4).unwrap_err();
        assert_eq!(
            err,
            DomainError::Capacity {
                levels: 2,
                nodes: 4,
                max: 3
            }
        );
        assert!(err.to_string().starts_with("Too many nodes for level 2!"));
    }

    #[test]
    fn given_equal_inputs_when_building_then_skewed_chain() {
        let tree = build(3, 3).unwrap();
        assert_eq!(tree.to_map(), map(&[('A', &['B']), ('B', &['C']), ('C', &[])]));
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn given_full_capacity_when_building_then_complete_tree() {
        let tree = build(3, 7).unwrap();
        assert_eq!(
            tree.to_map(),
            map(&[
                ('A', &['B', 'C']),
                ('B', &['D', 'E']),
                ('C', &['F', 'G']),
                ('D', &[]),
                ('E', &[]),
                ('F', &[]),
                ('G', &[]),
            ])
        );
    }

    #[test]
    fn given_partial_last_level_when_building_then_fills_left_first() {
        let tree = build(3, 5).unwrap();
        assert_eq!(tree.to_string(), "{A:[B,C], B:[D,E], C:[], D:[], E:[]}");
    }

    #[test]
    fn given_fewer_nodes_than_levels_when_building_then_shallower_tree() {
        let tree = build(4, 2).unwrap();
        assert_eq!(tree.to_string(), "{A:[B], B:[]}");
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn given_single_node_when_building_then_lone_root() {
        let tree = build(1, 1).unwrap();
        assert_eq!(tree.to_string(), "{A:[]}");
    }

    #[test]
    fn given_zero_levels_when_building_then_capacity_error() {
        assert!(matches!(build(0, 1), Err(DomainError::Capacity { max: 0, .. })));
    }
}
