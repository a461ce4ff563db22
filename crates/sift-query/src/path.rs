use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parse error for dotted field paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// The path string was empty.
    Empty,
    /// A segment between dots was empty (leading, trailing, or doubled dot).
    EmptySegment { path: String },
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathParseError::Empty => write!(f, "field path must not be empty"),
            PathParseError::EmptySegment { path } => {
                write!(f, "field path '{path}' contains an empty segment")
            }
        }
    }
}

impl std::error::Error for PathParseError {}

/// A dotted field path, e.g. `status` or `address.city`.
///
/// Parsing guarantees at least one segment and no empty segments, so a
/// constructed `FieldPath` is always well-formed. Serializes as its dotted
/// string form; deserialization re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(input: &str) -> Result<Self, PathParseError> {
        if input.is_empty() {
            return Err(PathParseError::Empty);
        }
        let segments: Vec<String> = input.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathParseError::EmptySegment {
                path: input.to_string(),
            });
        }
        Ok(FieldPath { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The terminal segment plus everything before it.
    pub fn split_last(&self) -> (&str, &[String]) {
        match self.segments.split_last() {
            Some((suffix, prefix)) => (suffix.as_str(), prefix),
            None => unreachable!("parse rejects empty paths"),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = PathParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldPath::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}
