//! Composite trees.
//!
//! Leaves and branches share one capability set, [`domain::Node`], so a
//! caller can run `operation()` on a root without knowing whether it holds
//! one element or a deep hierarchy. Branches fold their children's results
//! in order; leaves are the base case.
//!
//! ```
//! use comptree::domain::{Branch, Leaf, NodeRefExt};
//!
//! let tree = Branch::new();
//! let pair = Branch::new();
//! pair.add(&Leaf::new()).unwrap();
//! pair.add(&Leaf::new()).unwrap();
//! tree.add(&pair).unwrap();
//! tree.add(&Leaf::new()).unwrap();
//!
//! assert_eq!(tree.operation().to_string(), "BRANCH[BRANCH[LEAF+LEAF]+LEAF]");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
