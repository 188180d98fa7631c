//! Walk-through of the composite tree: build, evaluate, grow.

use tracing::{info, instrument};

use crate::domain::{Branch, DomainResult, Leaf, NodeRef, NodeRefExt, Outcome};

/// One observation made while running the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoStep {
    pub label: &'static str,
    pub outcome: Outcome,
}

impl DemoStep {
    fn observe(label: &'static str, node: &NodeRef) -> Self {
        let outcome = node.operation();
        info!(label, %outcome, "demo step");
        Self { label, outcome }
    }
}

/// Builds the sample trees and records each node's outcome.
///
/// Only construction touches `Leaf`/`Branch`; everything else goes through
/// the node interface.
#[instrument(level = "debug")]
pub fn run_demo() -> DomainResult<Vec<DemoStep>> {
    let mut steps = Vec::new();

    let simple = Leaf::new();
    steps.push(DemoStep::observe("simple leaf", &simple));

    let tree = Branch::new();

    let branch1 = Branch::new();
    branch1.add(&Leaf::new())?;
    branch1.add(&Leaf::new())?;
    steps.push(DemoStep::observe("branch with two leaves", &branch1));

    let branch2 = Branch::new();
    branch2.add(&Leaf::new())?;
    steps.push(DemoStep::observe("branch with one leaf", &branch2));

    tree.add(&branch1)?;
    tree.add(&branch2)?;
    steps.push(DemoStep::observe("composite tree", &tree));

    // only containers accept children
    if tree.is_composite() {
        tree.add(&simple)?;
    }
    steps.push(DemoStep::observe("tree after adding the simple leaf", &tree));

    Ok(steps)
}
