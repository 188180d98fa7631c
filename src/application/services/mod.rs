//! Application services
//!
//! Concrete services that orchestrate domain logic for the CLI.

mod demo;
mod tree;

pub use demo::{run_demo, DemoStep};
pub use tree::{TreeService, TreeStats};
