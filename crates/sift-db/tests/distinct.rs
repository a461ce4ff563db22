use std::cmp::Ordering;

use bson::{Bson, doc};
use sift_db::{DbError, compare_values, distinct_values, values_equal};
use sift_query::parse_distinct_params;

// ── Distinct over flat keys ─────────────────────────────────────

#[test]
fn distinct_scalar_field() {
    let docs = vec![
        doc! { "status": "active" },
        doc! { "status": "inactive" },
        doc! { "status": "active" },
    ];
    let values = distinct_values(&docs, "status").unwrap();
    assert_eq!(
        values,
        vec![
            Bson::String("active".into()),
            Bson::String("inactive".into()),
        ]
    );
}

#[test]
fn distinct_flattens_terminal_arrays() {
    let docs = vec![doc! { "k": [3, 1, 2] }, doc! { "k": 1 }];
    let values = distinct_values(&docs, "k").unwrap();
    assert_eq!(values, vec![Bson::Int32(1), Bson::Int32(2), Bson::Int32(3)]);
}

#[test]
fn distinct_missing_field_skipped() {
    let docs = vec![doc! { "x": 1 }, doc! { "y": 2 }];
    let values = distinct_values(&docs, "y").unwrap();
    assert_eq!(values, vec![Bson::Int32(2)]);
}

#[test]
fn distinct_tags_across_documents() {
    let docs = vec![
        doc! { "tags": ["rust", "db"] },
        doc! { "tags": ["db", "perf"] },
    ];
    let values = distinct_values(&docs, "tags").unwrap();
    assert_eq!(
        values,
        vec![
            Bson::String("db".into()),
            Bson::String("perf".into()),
            Bson::String("rust".into()),
        ]
    );
}

// ── Dotted paths and fan-out ────────────────────────────────────

#[test]
fn distinct_nested_path() {
    let docs = vec![
        doc! { "address": { "city": "Austin" } },
        doc! { "address": { "city": "Denver" } },
        doc! { "address": { "city": "Austin" } },
    ];
    let values = distinct_values(&docs, "address.city").unwrap();
    assert_eq!(
        values,
        vec![Bson::String("Austin".into()), Bson::String("Denver".into())]
    );
}

#[test]
fn distinct_fans_out_through_arrays() {
    let docs = vec![doc! { "a": [{ "b": 1 }, { "b": 2 }, { "b": 1 }] }];
    let values = distinct_values(&docs, "a.b").unwrap();
    assert_eq!(values, vec![Bson::Int32(1), Bson::Int32(2)]);
}

#[test]
fn distinct_fan_out_mixes_with_nested_documents() {
    let docs = vec![
        doc! { "a": { "b": 10 } },
        doc! { "a": [{ "b": 20 }, { "b": 10 }, 7, "noise"] },
        doc! { "a": "scalar blocks descent" },
    ];
    let values = distinct_values(&docs, "a.b").unwrap();
    assert_eq!(values, vec![Bson::Int32(10), Bson::Int32(20)]);
}

#[test]
fn distinct_deep_fan_out() {
    let docs = vec![doc! {
        "orders": [
            { "lines": [{ "sku": "b" }, { "sku": "a" }] },
            { "lines": [{ "sku": "a" }] },
        ]
    }];
    let values = distinct_values(&docs, "orders.lines.sku").unwrap();
    assert_eq!(
        values,
        vec![Bson::String("a".into()), Bson::String("b".into())]
    );
}

#[test]
fn distinct_array_values_under_fan_out_are_flattened() {
    let docs = vec![doc! { "a": [{ "b": [1, 2] }, { "b": [2, 3] }] }];
    let values = distinct_values(&docs, "a.b").unwrap();
    assert_eq!(values, vec![Bson::Int32(1), Bson::Int32(2), Bson::Int32(3)]);
}

// ── Required result properties ──────────────────────────────────

#[test]
fn repeated_calls_are_identical() {
    let docs = vec![
        doc! { "v": [3, "x", 1] },
        doc! { "v": Bson::Null },
        doc! { "v": { "nested": true } },
        doc! { "v": 2.5 },
    ];
    let first = distinct_values(&docs, "v").unwrap();
    let second = distinct_values(&docs, "v").unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_is_pairwise_distinct() {
    let docs = vec![
        doc! { "v": 1 },
        doc! { "v": 1_i64 },
        doc! { "v": [1.0, 2, "a"] },
        doc! { "v": "a" },
    ];
    let values = distinct_values(&docs, "v").unwrap();
    for i in 0..values.len() {
        for j in 0..values.len() {
            if i != j {
                assert!(
                    !values_equal(&values[i], &values[j]),
                    "{:?} and {:?} should be distinct",
                    values[i],
                    values[j]
                );
            }
        }
    }
}

#[test]
fn result_is_sorted_ascending() {
    let docs = vec![
        doc! { "v": "zebra" },
        doc! { "v": 10 },
        doc! { "v": Bson::Null },
        doc! { "v": true },
        doc! { "v": 2.5 },
        doc! { "v": "apple" },
    ];
    let values = distinct_values(&docs, "v").unwrap();
    for pair in values.windows(2) {
        assert_ne!(
            compare_values(&pair[0], &pair[1]),
            Ordering::Greater,
            "{:?} sorted after {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn mixed_types_follow_rank_order_not_insertion_order() {
    let docs = vec![
        doc! { "v": "text" },
        doc! { "v": 7 },
        doc! { "v": Bson::Null },
    ];
    let values = distinct_values(&docs, "v").unwrap();
    assert_eq!(
        values,
        vec![Bson::Null, Bson::Int32(7), Bson::String("text".into())]
    );
}

#[test]
fn document_values_dedup_by_key_order() {
    let docs = vec![
        doc! { "v": { "a": 1, "b": 2 } },
        doc! { "v": { "b": 2, "a": 1 } },
        doc! { "v": { "a": 1, "b": 2 } },
    ];
    let values = distinct_values(&docs, "v").unwrap();
    assert_eq!(values.len(), 2);
}

// ── Errors ──────────────────────────────────────────────────────

#[test]
fn malformed_paths_rejected() {
    let docs = vec![doc! { "a": 1 }];
    for bad in ["", "a..b", ".a", "a."] {
        let err = distinct_values(&docs, bad).unwrap_err();
        assert!(
            matches!(err, DbError::InvalidPath(_)),
            "key {bad:?} should be an invalid path, got {err}"
        );
    }
}

#[test]
fn path_error_message_names_the_path() {
    let docs = vec![doc! { "a": 1 }];
    let err = distinct_values(&docs, "a..b").unwrap_err();
    assert!(err.to_string().contains("a..b"), "got: {err}");
}

// ── Command parameters feeding the collector ────────────────────

#[test]
fn params_to_values_pipeline() {
    let cmd = doc! { "distinct": "orders", "key": "items.sku" };
    let docs = vec![
        doc! { "items": [{ "sku": "B" }, { "sku": "A" }] },
        doc! { "items": [{ "sku": "A" }] },
    ];

    let run = |cmd: &bson::Document| -> Result<Vec<Bson>, DbError> {
        let params = parse_distinct_params(cmd)?;
        distinct_values(&docs, &params.key)
    };

    let values = run(&cmd).unwrap();
    assert_eq!(
        values,
        vec![Bson::String("A".into()), Bson::String("B".into())]
    );

    // malformed key passes parameter extraction, fails path parsing
    let bad = doc! { "distinct": "orders", "key": "items..sku" };
    assert!(matches!(run(&bad), Err(DbError::InvalidPath(_))));

    // empty key never reaches the collector
    let empty = doc! { "distinct": "orders", "key": "" };
    assert!(matches!(run(&empty), Err(DbError::InvalidParams(_))));
}
