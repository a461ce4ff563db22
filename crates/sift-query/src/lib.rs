mod params;
mod path;

pub use params::{DistinctParams, ParamError, parse_distinct_params};
pub use path::{FieldPath, PathParseError};
