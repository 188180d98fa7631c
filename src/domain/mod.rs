//! Domain layer: the node capability set, its variants and the fold they compute
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod branch;
pub mod error;
pub mod leaf;
pub mod node;
pub mod outcome;
pub mod render;

pub use branch::Branch;
pub use error::{DomainError, DomainResult};
pub use leaf::Leaf;
pub use node::{same_node, Node, NodeRef, NodeRefExt, PreOrderIter, WeakNodeRef};
pub use outcome::{Outcome, OutcomeFormat};
pub use render::TreeView;
