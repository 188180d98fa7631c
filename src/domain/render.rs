use termtree::Tree;
use tracing::instrument;

use crate::domain::node::{NodeRef, NodeRefExt};
use crate::domain::outcome::OutcomeFormat;

/// Conversion of a node hierarchy into a printable `termtree`.
pub trait TreeView {
    fn to_tree(&self, format: &OutcomeFormat) -> Tree<String>;
}

impl TreeView for NodeRef {
    #[instrument(level = "trace", skip_all)]
    fn to_tree(&self, format: &OutcomeFormat) -> Tree<String> {
        let label = if self.is_composite() {
            format.branch.clone()
        } else {
            format.leaf.clone()
        };

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree(format))
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}
