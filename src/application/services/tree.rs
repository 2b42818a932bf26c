//! Tree generation service
//!
//! Every call validates the request and builds a fresh tree; nothing is kept
//! between calls.

use tracing::{debug, instrument};

use crate::application::request::fits_level_range;
use crate::application::{ApplicationResult, TreeRequest};
use crate::domain::{traverse, Graph, Layout, Traversals, TreeArena, TreeBuilder};

/// Everything the CLI shows for one request.
#[derive(Debug)]
pub struct TreeReport {
    pub request: TreeRequest,
    pub layout: Layout,
    pub tree: TreeArena,
    pub traversals: Traversals,
    /// False when the node count does not populate exactly `levels` levels
    pub fits_level_range: bool,
}

/// Service wrapping validation around the pure builder and traversals.
#[derive(Debug, Default)]
pub struct TreeService {
    builder: TreeBuilder,
}

impl TreeService {
    pub fn new() -> Self {
        Self {
            builder: TreeBuilder::new(),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn generate(&self, request: &TreeRequest) -> ApplicationResult<TreeArena> {
        request.validate()?;
        let tree = self.builder.build(request.levels, request.nodes)?;
        debug!("generate: {}", tree);
        Ok(tree)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn traverse(&self, request: &TreeRequest) -> ApplicationResult<Traversals> {
        let tree = self.generate(request)?;
        Ok(traverse(&tree))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn graph(&self, request: &TreeRequest) -> ApplicationResult<Graph> {
        let tree = self.generate(request)?;
        Ok(Graph::from_tree(&tree))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn report(&self, request: &TreeRequest) -> ApplicationResult<TreeReport> {
        let tree = self.generate(request)?;
        let traversals = traverse(&tree);
        Ok(TreeReport {
            request: *request,
            layout: Layout::select(request.levels, request.nodes),
            fits_level_range: fits_level_range(request.levels, request.nodes),
            tree,
            traversals,
        })
    }
}
