//! The shared node capability set and the handle types built around it.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::outcome::Outcome;

/// Owning handle to a node. Held by the client for roots, by a branch for its children.
pub type NodeRef = Rc<RefCell<dyn Node>>;

/// Non-owning back-reference from a child to the branch holding it.
pub type WeakNodeRef = Weak<RefCell<dyn Node>>;

/// Capabilities shared by every tree element.
///
/// Callers hold `NodeRef`s and talk to this trait only. `is_composite` is the
/// one capability check: it tells whether `add`/`remove` are meaningful
/// without inspecting the concrete type. The default `add`/`remove` fail with
/// [`DomainError::UnsupportedOperation`], which is what non-container
/// variants want.
pub trait Node: fmt::Debug {
    /// Current owner branch, `None` for roots, unattached nodes and nodes
    /// whose owner has been dropped.
    fn parent(&self) -> Option<NodeRef>;

    /// Replaces the back-reference. Only branches call this, from `add`/`remove`.
    fn set_parent(&mut self, parent: Option<WeakNodeRef>);

    fn is_composite(&self) -> bool {
        false
    }

    fn add(&mut self, _child: NodeRef) -> DomainResult<()> {
        Err(DomainError::UnsupportedOperation { operation: "add" })
    }

    fn remove(&mut self, _child: &NodeRef) -> DomainResult<()> {
        Err(DomainError::UnsupportedOperation { operation: "remove" })
    }

    /// Child sequence in insertion order; empty for non-containers.
    fn children(&self) -> &[NodeRef] {
        &[]
    }

    /// Computes this node's result from itself and its descendants.
    fn operation(&self) -> Outcome;
}

/// Convenience methods on `NodeRef` so callers never juggle `RefCell` borrows.
///
/// Borrows are released before each call returns. Traversals only take
/// shared borrows, so they can run while other handles to the same nodes
/// are alive.
pub trait NodeRefExt {
    fn parent(&self) -> Option<NodeRef>;
    fn is_composite(&self) -> bool;
    fn add(&self, child: &NodeRef) -> DomainResult<()>;
    fn remove(&self, child: &NodeRef) -> DomainResult<()>;
    fn operation(&self) -> Outcome;
    /// Owned snapshot of the child sequence.
    fn children(&self) -> Vec<NodeRef>;
    /// Removes this node from its current parent, if any.
    fn detach(&self) -> DomainResult<()>;
    /// Parent chain, nearest first.
    fn ancestors(&self) -> Vec<NodeRef>;
    /// Topmost ancestor, or the node itself when unattached.
    fn root(&self) -> NodeRef;
    fn depth(&self) -> usize;
    fn leaf_count(&self) -> usize;
    fn iter(&self) -> PreOrderIter;
}

impl NodeRefExt for NodeRef {
    fn parent(&self) -> Option<NodeRef> {
        self.borrow().parent()
    }

    fn is_composite(&self) -> bool {
        self.borrow().is_composite()
    }

    fn add(&self, child: &NodeRef) -> DomainResult<()> {
        self.borrow_mut().add(Rc::clone(child))
    }

    fn remove(&self, child: &NodeRef) -> DomainResult<()> {
        self.borrow_mut().remove(child)
    }

    fn operation(&self) -> Outcome {
        self.borrow().operation()
    }

    fn children(&self) -> Vec<NodeRef> {
        self.borrow().children().to_vec()
    }

    #[instrument(level = "trace", skip(self))]
    fn detach(&self) -> DomainResult<()> {
        match NodeRefExt::parent(self) {
            Some(parent) => parent.borrow_mut().remove(self),
            None => {
                debug!("detach on unattached node");
                Ok(())
            }
        }
    }

    fn ancestors(&self) -> Vec<NodeRef> {
        let mut chain = Vec::new();
        let mut current = NodeRefExt::parent(self);
        while let Some(node) = current {
            current = NodeRefExt::parent(&node);
            chain.push(node);
        }
        chain
    }

    fn root(&self) -> NodeRef {
        self.ancestors().pop().unwrap_or_else(|| Rc::clone(self))
    }

    #[instrument(level = "trace", skip(self))]
    fn depth(&self) -> usize {
        let node = self.borrow();
        1 + node
            .children()
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    fn leaf_count(&self) -> usize {
        self.iter().filter(|node| !node.is_composite()).count()
    }

    fn iter(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }
}

/// Pre-order, left-to-right traversal over a subtree.
pub struct PreOrderIter {
    stack: Vec<NodeRef>,
}

impl PreOrderIter {
    fn new(start: &NodeRef) -> Self {
        Self {
            stack: vec![Rc::clone(start)],
        }
    }
}

impl Iterator for PreOrderIter {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.borrow().children().iter().rev() {
            self.stack.push(Rc::clone(child));
        }
        Some(current)
    }
}

/// Identity comparison of two handles, ignoring vtable metadata.
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    Rc::ptr_eq(a, b)
}
