//! Type-aware comparison over BSON values.
//!
//! All values share one total order: a fixed type-class rank decides first,
//! then a type-appropriate comparison within the class. Numbers compare by
//! numeric value across Int32/Int64/Double, so `Int32(1)`, `Int64(1)` and
//! `Double(1.0)` are one distinct value. The same order defines equality
//! for deduplication (`values_equal` is `compare_values == Equal`).

use std::cmp::Ordering;

use bson::Bson;

// ── Type-class ranking ──────────────────────────────────────────

/// BSON comparison order. Values of different classes never interleave.
fn type_rank(value: &Bson) -> u8 {
    match value {
        Bson::MinKey => 0,
        Bson::Null => 1,
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) => 2,
        Bson::String(_) => 3,
        Bson::Document(_) => 4,
        Bson::Array(_) => 5,
        Bson::Binary(_) => 6,
        Bson::ObjectId(_) => 7,
        Bson::Boolean(_) => 8,
        Bson::DateTime(_) => 9,
        Bson::Timestamp(_) => 10,
        Bson::RegularExpression(_) => 11,
        Bson::MaxKey => 12,
        // Decimal128, code, symbols and other kinds outside the value model
        _ => 13,
    }
}

// ── Total order ─────────────────────────────────────────────────

/// Three-way comparison between two values, usable as a `sort_by`
/// comparator. Integer pairs compare as `i64`; any pair involving a double
/// compares via `f64::total_cmp`, which keeps NaN deterministic.
pub fn compare_values(a: &Bson, b: &Bson) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }
    match (a, b) {
        // ── Numbers: cross-subtype by numeric value ─────────────
        (Bson::Int32(a), Bson::Int32(b)) => a.cmp(b),
        (Bson::Int64(a), Bson::Int64(b)) => a.cmp(b),
        (Bson::Int32(a), Bson::Int64(b)) => (*a as i64).cmp(b),
        (Bson::Int64(a), Bson::Int32(b)) => a.cmp(&(*b as i64)),
        (Bson::Double(a), Bson::Double(b)) => a.total_cmp(b),
        (Bson::Double(a), Bson::Int32(b)) => a.total_cmp(&(*b as f64)),
        (Bson::Double(a), Bson::Int64(b)) => a.total_cmp(&(*b as f64)),
        (Bson::Int32(a), Bson::Double(b)) => (*a as f64).total_cmp(b),
        (Bson::Int64(a), Bson::Double(b)) => (*a as f64).total_cmp(b),

        // ── Scalars ─────────────────────────────────────────────
        (Bson::String(a), Bson::String(b)) => a.cmp(b),
        (Bson::Boolean(a), Bson::Boolean(b)) => a.cmp(b),
        (Bson::DateTime(a), Bson::DateTime(b)) => {
            a.timestamp_millis().cmp(&b.timestamp_millis())
        }
        (Bson::Timestamp(a), Bson::Timestamp(b)) => {
            (a.time, a.increment).cmp(&(b.time, b.increment))
        }
        (Bson::ObjectId(a), Bson::ObjectId(b)) => a.bytes().cmp(&b.bytes()),
        (Bson::Binary(a), Bson::Binary(b)) => a
            .bytes
            .len()
            .cmp(&b.bytes.len())
            .then_with(|| u8::from(a.subtype).cmp(&u8::from(b.subtype)))
            .then_with(|| a.bytes.cmp(&b.bytes)),
        (Bson::RegularExpression(a), Bson::RegularExpression(b)) => a
            .pattern
            .cmp(&b.pattern)
            .then_with(|| a.options.cmp(&b.options)),

        // ── Containers ──────────────────────────────────────────
        (Bson::Document(a), Bson::Document(b)) => compare_documents(a, b),
        (Bson::Array(a), Bson::Array(b)) => compare_arrays(a, b),

        // Null/MinKey/MaxKey pairs, plus kinds outside the value model
        _ => Ordering::Equal,
    }
}

/// Documents compare pairwise in field order: key name first, then value.
/// A document that is a strict prefix of another sorts first. Key order is
/// significant, so `{a: 1, b: 2}` and `{b: 2, a: 1}` are distinct.
fn compare_documents(a: &bson::Document, b: &bson::Document) -> Ordering {
    for ((key_a, val_a), (key_b, val_b)) in a.iter().zip(b.iter()) {
        let key_ord = key_a.as_str().cmp(key_b.as_str());
        if key_ord != Ordering::Equal {
            return key_ord;
        }
        let val_ord = compare_values(val_a, val_b);
        if val_ord != Ordering::Equal {
            return val_ord;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_arrays(a: &[Bson], b: &[Bson]) -> Ordering {
    for (elem_a, elem_b) in a.iter().zip(b.iter()) {
        let ord = compare_values(elem_a, elem_b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

// ── Equality & membership ───────────────────────────────────────

/// Deduplication equality: same type class, equal value.
pub fn values_equal(a: &Bson, b: &Bson) -> bool {
    compare_values(a, b) == Ordering::Equal
}

/// Membership test over an accumulating value list, using `values_equal`.
pub fn array_contains(values: &[Bson], candidate: &Bson) -> bool {
    values.iter().any(|value| values_equal(value, candidate))
}
