use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A `parent:child` pair, as passed to [`Tree::attach_edges`](crate::Tree::attach_edges).
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    pub parent: T,
    pub child: T,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEdgeError {
    #[error("expected `parent:child`, got {0:?}")]
    MissingSeparator(String),
    #[error("invalid parent {value:?}: {reason}")]
    Parent { value: String, reason: String },
    #[error("invalid child {value:?}: {reason}")]
    Child { value: String, reason: String },
}

impl<T> FromStr for Edge<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ParseEdgeError;

    /// Splits on the first `:`; both sides are trimmed before parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (parent, child) = s
            .split_once(':')
            .ok_or_else(|| ParseEdgeError::MissingSeparator(s.to_string()))?;
        let (parent, child) = (parent.trim(), child.trim());

        let parent = parent.parse().map_err(|err: T::Err| ParseEdgeError::Parent {
            value: parent.to_string(),
            reason: err.to_string(),
        })?;
        let child = child.parse().map_err(|err: T::Err| ParseEdgeError::Child {
            value: child.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Edge { parent, child })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_floats() {
        let edge: Edge<f64> = "1.1:1.2".parse().unwrap();
        assert_eq!(edge, Edge { parent: 1.1, child: 1.2 });
    }

    #[test]
    fn trims_whitespace() {
        let edge: Edge<i32> = " 3 : 4 ".parse().unwrap();
        assert_eq!(edge, Edge { parent: 3, child: 4 });
    }

    #[test]
    fn splits_on_first_colon() {
        let edge: Edge<String> = "a:b:c".parse().unwrap();
        assert_eq!(edge.parent, "a");
        assert_eq!(edge.child, "b:c");
    }

    #[test]
    fn missing_separator() {
        let err = "12".parse::<Edge<i32>>().unwrap_err();
        assert_eq!(err, ParseEdgeError::MissingSeparator("12".to_string()));
        assert_eq!(err.to_string(), "expected `parent:child`, got \"12\"");
    }

    #[test]
    fn bad_sides() {
        assert!(matches!(
            "x:1".parse::<Edge<i32>>(),
            Err(ParseEdgeError::Parent { value, .. }) if value == "x"
        ));
        assert!(matches!(
            "1:".parse::<Edge<i32>>(),
            Err(ParseEdgeError::Child { value, .. }) if value.is_empty()
        ));
    }
}
