//! Application layer: tree expressions and the services that drive the domain
//!
//! Everything here builds trees through `Leaf::new`, `Branch::new` and `add`,
//! then talks to them through the node interface only.

pub mod error;
pub mod parser;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use parser::{parse_shape, Shape};
