//! Node/edge lists for hierarchical graph viewers (vis-network style).

use std::collections::VecDeque;

use serde::Serialize;
use tracing::instrument;

use crate::domain::arena::TreeArena;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: char,
    pub label: String,
    /// Distance from the root, root at 0
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: char,
    pub to: char,
}

/// Hierarchical layout hints for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalLayout {
    pub direction: &'static str,
    pub sort_method: &'static str,
    pub level_separation: u32,
    pub node_spacing: u32,
    pub tree_spacing: u32,
    pub parent_centralization: bool,
}

impl Default for HierarchicalLayout {
    fn default() -> Self {
        Self {
            direction: "UD",
            sort_method: "directed",
            level_separation: 100,
            node_spacing: 150,
            tree_spacing: 150,
            parent_centralization: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphOptions {
    pub hierarchical: HierarchicalLayout,
}

/// Fully materialised graph handed to an external renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub options: GraphOptions,
}

impl Graph {
    /// Breadth-first level assignment from the root.
    ///
    /// Nodes come out level by level, each followed (in `edges`) by its
    /// outgoing edges in child order.
    #[instrument(level = "debug", skip(tree), fields(nodes = tree.len()))]
    pub fn from_tree(tree: &TreeArena) -> Self {
        let mut graph = Graph::default();
        let mut queue = VecDeque::new();
        if let Some(root) = tree.root() {
            queue.push_back((root, 0));
        }

        while let Some((idx, level)) = queue.pop_front() {
            let Some(node) = tree.get_node(idx) else {
                continue;
            };
            let id = node.data.label;
            graph.nodes.push(GraphNode {
                id,
                label: id.to_string(),
                level,
            });
            for &child in &node.children {
                if let Some(to) = tree.label(child) {
                    graph.edges.push(GraphEdge { from: id, to });
                    queue.push_back((child, level + 1));
                }
            }
        }
        graph
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deepest level present, None for an empty graph.
    pub fn max_level(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.level).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::build;

    #[test]
    fn given_complete_tree_when_exporting_then_levels_follow_bfs() {
        let graph = Graph::from_tree(&build(3, 7).unwrap());
        let levels: Vec<(char, usize)> = graph.nodes.iter().map(|n| (n.id, n.level)).collect();
        assert_eq!(
            levels,
            vec![
                ('A', 0),
                ('B', 1),
                ('C', 1),
                ('D', 2),
                ('E', 2),
                ('F', 2),
                ('G', 2)
            ]
        );
        assert_eq!(graph.edges.len(), 6);
        assert_eq!(graph.edges[0], GraphEdge { from: 'A', to: 'B' });
        assert_eq!(graph.edges[5], GraphEdge { from: 'C', to: 'G' });
        assert_eq!(graph.max_level(), Some(2));
    }

    #[test]
    fn given_skewed_tree_when_exporting_then_one_node_per_level() {
        let graph = Graph::from_tree(&build(4, 4).unwrap());
        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.max_level(), Some(3));
        assert!(graph.nodes.iter().enumerate().all(|(i, n)| n.level == i));
    }

    #[test]
    fn given_graph_when_serialized_then_json_uses_viewer_field_names() {
        let graph = Graph::from_tree(&build(2, 2).unwrap());
        let value: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_eq!(value["nodes"][0]["id"], "A");
        assert_eq!(value["nodes"][1]["level"], 1);
        assert_eq!(value["edges"][0]["from"], "A");
        assert_eq!(value["edges"][0]["to"], "B");
        assert_eq!(value["options"]["hierarchical"]["sortMethod"], "directed");
    }

    #[test]
    fn given_empty_tree_when_exporting_then_empty_graph() {
        let graph = Graph::from_tree(&TreeArena::new());
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert_eq!(graph.max_level(), None);
    }
}
