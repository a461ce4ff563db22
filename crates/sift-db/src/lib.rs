mod compare;
mod distinct;
mod error;
mod resolve;

pub use bson::{Bson, Document};
pub use compare::{array_contains, compare_values, values_equal};
pub use distinct::distinct_values;
pub use error::DbError;
