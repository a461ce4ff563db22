use std::fmt;

use sift_query::{ParamError, PathParseError};

#[derive(Debug)]
pub enum DbError {
    InvalidPath(PathParseError),
    InvalidParams(ParamError),
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbError::InvalidPath(e) => write!(f, "invalid field path: {e}"),
            DbError::InvalidParams(e) => write!(f, "invalid parameters: {e}"),
        }
    }
}

impl std::error::Error for DbError {}

impl From<PathParseError> for DbError {
    fn from(e: PathParseError) -> Self {
        DbError::InvalidPath(e)
    }
}

impl From<ParamError> for DbError {
    fn from(e: ParamError) -> Self {
        DbError::InvalidParams(e)
    }
}
