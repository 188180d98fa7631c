use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::node::{Node, NodeRef, WeakNodeRef};
use crate::domain::outcome::Outcome;

/// A node without children: the base case of every traversal.
///
/// `add`/`remove` keep the trait defaults and fail with
/// `UnsupportedOperation`, so nesting under a leaf is caught at the call site.
#[derive(Debug, Default)]
pub struct Leaf {
    parent: Option<WeakNodeRef>,
}

impl Leaf {
    /// Creates an unattached leaf and hands out its owning handle.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> NodeRef {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl Node for Leaf {
    fn parent(&self) -> Option<NodeRef> {
        self.parent.as_ref().and_then(|p| p.upgrade())
    }

    fn set_parent(&mut self, parent: Option<WeakNodeRef>) {
        self.parent = parent;
    }

    fn operation(&self) -> Outcome {
        Outcome::Leaf
    }
}
