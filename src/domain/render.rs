use generational_arena::Index;
use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::TreeArena;

/// Conversion into a printable `termtree` hierarchy.
pub trait TreeRender {
    fn to_termtree(&self) -> Tree<String>;
}

impl TreeRender for TreeArena {
    #[instrument(level = "debug", skip(self))]
    fn to_termtree(&self) -> Tree<String> {
        fn build_tree(arena: &TreeArena, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = arena.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = arena.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.data.label.to_string());
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root().and_then(|idx| Some((idx, self.get_node(idx)?))) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(root.data.label.to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

/// Space separated labels: `D B E A C`.
pub fn format_sequence(labels: &[char]) -> String {
    labels.iter().join(" ")
}
