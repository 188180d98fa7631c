//! Tree expression service
//!
//! Turns tree expressions into node hierarchies and reports on them using
//! the configured output format.

use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{parse_shape, ApplicationResult};
use crate::config::Settings;
use crate::domain::{NodeRef, NodeRefExt, TreeView};

/// Size and shape figures for a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Longest root-to-leaf path, counted in nodes
    pub depth: usize,
    /// All nodes, branches included
    pub nodes: usize,
    /// Non-composite nodes
    pub leaves: usize,
}

/// Service building and evaluating trees from expressions.
pub struct TreeService {
    settings: Settings,
}

impl TreeService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse `expr` and build the tree, returning its root.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, expr: &str) -> ApplicationResult<NodeRef> {
        let shape = parse_shape(expr, self.settings.max_depth)?;
        Ok(shape.build()?)
    }

    /// Run the operation on the root and render the result.
    pub fn evaluate(&self, expr: &str) -> ApplicationResult<String> {
        let root = self.build(expr)?;
        let outcome = root.operation();
        debug!("evaluate: {} leaf units", outcome.units());
        Ok(self.settings.format.render(&outcome))
    }

    pub fn view(&self, expr: &str) -> ApplicationResult<Tree<String>> {
        let root = self.build(expr)?;
        Ok(root.to_tree(&self.settings.format))
    }

    pub fn stats(&self, expr: &str) -> ApplicationResult<TreeStats> {
        let root = self.build(expr)?;
        Ok(TreeStats {
            depth: root.depth(),
            nodes: root.iter().count(),
            leaves: root.leaf_count(),
        })
    }
}
