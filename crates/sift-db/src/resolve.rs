//! Field-path resolution with array fan-out.
//!
//! A path like `a.b` matches both a nested document under `a` and an array
//! of documents under `a`. The walk descends the path prefix and produces
//! every sub-document the terminal segment must be looked up against, in
//! encounter order (document order, then array index order). Branches die
//! silently: a missing field, a scalar in the middle of the path, or a
//! non-document array element contributes nothing.

use bson::{Bson, Document};
use sift_query::FieldPath;

/// Resolve a field path against a document. Returns the terminal segment
/// and every sub-document it must be read from.
pub(crate) fn resolve_path<'d, 'p>(
    doc: &'d Document,
    path: &'p FieldPath,
) -> (&'p str, Vec<&'d Document>) {
    let (suffix, prefix) = path.split_last();
    if prefix.is_empty() {
        return (suffix, vec![doc]);
    }
    let mut sub_docs = Vec::new();
    collect_sub_docs(doc, prefix, 0, &mut sub_docs);
    (suffix, sub_docs)
}

/// Recursion depth is bounded by the number of path segments, not by
/// document size.
fn collect_sub_docs<'d>(
    doc: &'d Document,
    prefix: &[String],
    idx: usize,
    out: &mut Vec<&'d Document>,
) {
    if idx == prefix.len() {
        out.push(doc);
        return;
    }
    let Some(value) = doc.get(&prefix[idx]) else {
        return;
    };
    match value {
        Bson::Document(sub) => collect_sub_docs(sub, prefix, idx + 1, out),
        Bson::Array(elements) => {
            for element in elements {
                if let Bson::Document(sub) = element {
                    collect_sub_docs(sub, prefix, idx + 1, out);
                }
            }
        }
        _ => {}
    }
}
