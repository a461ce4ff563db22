use bson::{Bson, Document};
use sift_query::FieldPath;

use crate::compare::{array_contains, compare_values};
use crate::error::DbError;
use crate::resolve::resolve_path;

/// Collect the distinct values reachable at `key` across `docs`.
///
/// If the key is missing from a document it contributes nothing. If the
/// value at the key is an array, each element is considered individually;
/// otherwise the value itself is. Intermediate path segments fan out
/// through arrays of documents (see `resolve`).
///
/// The result is pairwise non-equal under `values_equal` and sorted
/// ascending by `compare_values`. The only error is a malformed key.
pub fn distinct_values(docs: &[Document], key: &str) -> Result<Vec<Bson>, DbError> {
    let path: FieldPath = key.parse()?;

    // Capacity is a hint; fan-out and flattening make the true size
    // unknowable up front.
    let mut distinct: Vec<Bson> = Vec::with_capacity(docs.len());

    for doc in docs {
        let (suffix, sub_docs) = resolve_path(doc, &path);

        for sub_doc in sub_docs {
            let Some(value) = sub_doc.get(suffix) else {
                continue;
            };
            match value {
                Bson::Array(elements) => {
                    for element in elements {
                        if !array_contains(&distinct, element) {
                            distinct.push(element.clone());
                        }
                    }
                }
                value => {
                    if !array_contains(&distinct, value) {
                        distinct.push(value.clone());
                    }
                }
            }
        }
    }

    distinct.sort_by(|a, b| compare_values(a, b));

    Ok(distinct)
}
