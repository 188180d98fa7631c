//! Tree expressions: `L` is a leaf, `[ ... ]` a branch.
//!
//! Children inside a branch are separated by whitespace and/or commas,
//! e.g. `[[L L] [L]]` or `[[L, L], [L]]`.

use std::fmt;

use itertools::Itertools;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{recognize, value};
use nom::error::{Error, ErrorKind};
use nom::multi::separated_list0;
use nom::sequence::{delimited, pair, tuple};
use nom::IResult;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Branch, DomainResult, Leaf, NodeRef, NodeRefExt};

/// Parsed shape of a tree, before any nodes exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Leaf,
    Branch(Vec<Shape>),
}

impl Shape {
    /// Builds the nodes described by this shape and returns the root.
    pub fn build(&self) -> DomainResult<NodeRef> {
        match self {
            Shape::Leaf => Ok(Leaf::new()),
            Shape::Branch(children) => {
                let branch = Branch::new();
                for child in children {
                    branch.add(&child.build()?)?;
                }
                Ok(branch)
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Leaf => write!(f, "L"),
            Shape::Branch(children) => write!(f, "[{}]", children.iter().join(" ")),
        }
    }
}

/// Whitespace, a comma, or both.
fn separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((multispace0, char(','), multispace0))),
        multispace1,
    ))(input)
}

fn leaf(input: &str) -> IResult<&str, Shape> {
    value(Shape::Leaf, alt((tag_no_case("leaf"), tag_no_case("l"))))(input)
}

fn shape(input: &str, depth: usize, limit: usize) -> IResult<&str, Shape> {
    // only a node actually starting here counts against the limit
    if depth > limit && input.starts_with(|c: char| c == '[' || c.eq_ignore_ascii_case(&'l')) {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }
    alt((leaf, |i| branch(i, depth, limit)))(input)
}

fn branch(input: &str, depth: usize, limit: usize) -> IResult<&str, Shape> {
    let (input, children) = delimited(
        pair(char('['), multispace0),
        separated_list0(separator, |i| shape(i, depth + 1, limit)),
        pair(multispace0, char(']')),
    )(input)?;
    Ok((input, Shape::Branch(children)))
}

/// Parses a tree expression, refusing nesting deeper than `max_depth`.
#[instrument(level = "debug")]
pub fn parse_shape(source: &str, max_depth: usize) -> ApplicationResult<Shape> {
    let offset = |rest: &str| source.len() - rest.len();

    match delimited(multispace0, |i| shape(i, 1, max_depth), multispace0)(source) {
        Ok(("", parsed)) => {
            debug!("parsed: {}", parsed);
            Ok(parsed)
        }
        Ok((rest, _)) => Err(ApplicationError::Parse {
            position: offset(rest),
            message: "unexpected trailing input".into(),
        }),
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::TooLarge => {
            Err(ApplicationError::DepthExceeded { max: max_depth })
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(ApplicationError::Parse {
            position: offset(e.input),
            message: "expected a leaf `L` or a branch `[...]`".into(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ApplicationError::Parse {
            position: source.len(),
            message: "incomplete input".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaf() {
        assert_eq!(parse_shape("L", 8).unwrap(), Shape::Leaf);
        assert_eq!(parse_shape("  leaf ", 8).unwrap(), Shape::Leaf);
    }

    #[test]
    fn test_parse_nested_branches() {
        let shape = parse_shape("[[L L], [L]]", 8).unwrap();
        assert_eq!(
            shape,
            Shape::Branch(vec![
                Shape::Branch(vec![Shape::Leaf, Shape::Leaf]),
                Shape::Branch(vec![Shape::Leaf]),
            ])
        );
        assert_eq!(shape.to_string(), "[[L L] [L]]");
    }

    #[test]
    fn test_parse_empty_branch() {
        assert_eq!(parse_shape("[ ]", 8).unwrap(), Shape::Branch(vec![]));
    }

    #[test]
    fn test_empty_branch_at_depth_limit() {
        assert_eq!(parse_shape("[]", 1).unwrap(), Shape::Branch(vec![]));
        assert_eq!(
            parse_shape("[L]", 1),
            Err(ApplicationError::DepthExceeded { max: 1 })
        );
    }

    #[test]
    fn test_build_produces_nodes() {
        let root = parse_shape("[[L L] L]", 8).unwrap().build().unwrap();
        assert!(root.is_composite());
        assert_eq!(root.operation().to_string(), "BRANCH[BRANCH[LEAF+LEAF]+LEAF]");
    }
}
