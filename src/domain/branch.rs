use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Node, NodeRef, WeakNodeRef};
use crate::domain::outcome::Outcome;

/// A node owning an ordered sequence of children.
///
/// Every child in `children` has its parent back-reference pointing here;
/// `add` and `remove` keep both sides in step. Duplicates are allowed and
/// insertion order is preserved.
#[derive(Debug)]
pub struct Branch {
    parent: Option<WeakNodeRef>,
    children: Vec<NodeRef>,
    /// Handle to ourselves, given to children as their parent.
    me: WeakNodeRef,
}

impl Branch {
    /// Creates an empty, unattached branch and hands out its owning handle.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> NodeRef {
        Rc::new_cyclic(|me: &Weak<RefCell<Branch>>| {
            let me: WeakNodeRef = me.clone();
            RefCell::new(Branch {
                parent: None,
                children: Vec::new(),
                me,
            })
        })
    }

    /// True if this branch can be reached by walking down from `start`.
    ///
    /// Compares handles before borrowing, so the branch currently borrowed
    /// mutably by `add` is never borrowed again.
    fn is_reachable_from(&self, start: &NodeRef) -> bool {
        let mut stack = vec![Rc::clone(start)];
        while let Some(node) = stack.pop() {
            if Weak::ptr_eq(&Rc::downgrade(&node), &self.me) {
                return true;
            }
            stack.extend(node.borrow().children().iter().cloned());
        }
        false
    }
}

impl Node for Branch {
    fn parent(&self) -> Option<NodeRef> {
        self.parent.as_ref().and_then(|p| p.upgrade())
    }

    fn set_parent(&mut self, parent: Option<WeakNodeRef>) {
        self.parent = parent;
    }

    fn is_composite(&self) -> bool {
        true
    }

    #[instrument(level = "trace", skip_all, fields(children = self.children.len()))]
    fn add(&mut self, child: NodeRef) -> DomainResult<()> {
        if self.is_reachable_from(&child) {
            debug!("rejecting add: would create a cycle");
            return Err(DomainError::CycleDetected);
        }
        child.borrow_mut().set_parent(Some(self.me.clone()));
        self.children.push(child);
        Ok(())
    }

    #[instrument(level = "trace", skip_all, fields(children = self.children.len()))]
    fn remove(&mut self, child: &NodeRef) -> DomainResult<()> {
        match self.children.iter().position(|c| Rc::ptr_eq(c, child)) {
            Some(pos) => {
                let removed = self.children.remove(pos);
                removed.borrow_mut().set_parent(None);
            }
            None => debug!("remove of absent child is a no-op"),
        }
        Ok(())
    }

    fn children(&self) -> &[NodeRef] {
        &self.children
    }

    #[instrument(level = "trace", skip_all, fields(children = self.children.len()))]
    fn operation(&self) -> Outcome {
        Outcome::Branch(
            self.children
                .iter()
                .map(|child| child.borrow().operation())
                .collect(),
        )
    }
}
