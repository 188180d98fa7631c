//! Results produced by `Node::operation` and how they are rendered.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Result of a node operation.
///
/// A branch's outcome holds its children's outcomes in sequence order, so
/// the shape of the fold is preserved until it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single unit of work done at a leaf.
    Leaf,
    /// Combined outcomes of a branch's children.
    Branch(Vec<Outcome>),
}

impl Outcome {
    /// Number of leaf units folded into this outcome.
    pub fn units(&self) -> usize {
        match self {
            Outcome::Leaf => 1,
            Outcome::Branch(parts) => parts.iter().map(Outcome::units).sum(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&OutcomeFormat::default().render(self))
    }
}

/// Markers used when rendering an [`Outcome`] as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutcomeFormat {
    /// Marker for a leaf unit
    pub leaf: String,
    /// Marker written in front of a branch's children
    pub branch: String,
    /// Opens the list of children
    pub open: String,
    /// Closes the list of children
    pub close: String,
    /// Written between two children
    pub separator: String,
}

impl Default for OutcomeFormat {
    fn default() -> Self {
        Self {
            leaf: "LEAF".into(),
            branch: "BRANCH".into(),
            open: "[".into(),
            close: "]".into(),
            separator: "+".into(),
        }
    }
}

impl OutcomeFormat {
    pub fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Leaf => self.leaf.clone(),
            Outcome::Branch(parts) => format!(
                "{}{}{}{}",
                self.branch,
                self.open,
                parts.iter().map(|p| self.render(p)).join(&self.separator),
                self.close
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Outcome {
        Outcome::Branch(vec![
            Outcome::Branch(vec![Outcome::Leaf, Outcome::Leaf]),
            Outcome::Branch(vec![Outcome::Leaf]),
        ])
    }

    #[test]
    fn test_display_uses_default_markers() {
        assert_eq!(Outcome::Leaf.to_string(), "LEAF");
        assert_eq!(
            sample().to_string(),
            "BRANCH[BRANCH[LEAF+LEAF]+BRANCH[LEAF]]"
        );
    }

    #[test]
    fn test_render_with_custom_markers() {
        let format = OutcomeFormat {
            leaf: "x".into(),
            branch: "".into(),
            open: "(".into(),
            close: ")".into(),
            separator: " ".into(),
        };
        assert_eq!(format.render(&sample()), "((x x) (x))");
    }

    #[test]
    fn test_units_counts_leaves() {
        assert_eq!(sample().units(), 3);
        assert_eq!(Outcome::Branch(vec![]).units(), 0);
    }
}
