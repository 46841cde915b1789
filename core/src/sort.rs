//! Index-tracking merge sort.
//!
//! Elements are enumerated once and sorted as `(position value)` pairs. The
//! positions of every subproblem form a contiguous range, so the split point
//! is `first position + len / 2` and each half is selected by position with
//! [`try_filter`]. The comparator only ever sees values.
//!
//! The merge takes from the left half only when the comparator says the left
//! value strictly precedes the right one. Equal elements straddling a split
//! therefore come out right-first: the sort is not stable.

use tracing::{instrument, trace};

use crate::concat::concat_into;
use crate::enumerate::enumerate;
use crate::error::{Result, SeqError};
use crate::language::{Seq, Value};
use crate::primitives::{expect_seq, front, pop_front, second};
use crate::transform::{cut_map, try_filter};

/// Sort `seq` ascending under `compare`, read as "strictly precedes".
///
/// The result has the kind of `seq`. Comparator failures are returned
/// unchanged.
#[instrument(level = "trace", skip_all, fields(len = seq.len()))]
pub fn merge_sort<C>(seq: &Seq, mut compare: C) -> Result<Seq>
where
    C: FnMut(&Value, &Value) -> Result<bool>,
{
    let sorted = sort_indexed(enumerate(seq), &mut compare)?;
    Ok(cut_map(&sorted)?.with_kind(seq.kind()))
}

/// [`merge_sort`] with a comparator that cannot fail.
pub fn merge_sort_by<C>(seq: &Seq, mut less: C) -> Result<Seq>
where
    C: FnMut(&Value, &Value) -> bool,
{
    merge_sort(seq, |a, b| Ok(less(a, b)))
}

fn sort_indexed<C>(indexed: Seq, compare: &mut C) -> Result<Seq>
where
    C: FnMut(&Value, &Value) -> Result<bool>,
{
    if indexed.len() < 2 {
        return Ok(indexed);
    }

    let low = position(front(&indexed)?)?;
    let mid = low + indexed.len() / 2;
    trace!(low, mid, len = indexed.len(), "split");

    let left = try_filter(|entry| Ok(position(entry)? < mid), &indexed)?;
    let right = try_filter(|entry| Ok(position(entry)? >= mid), &indexed)?;

    let left = sort_indexed(left, compare)?;
    let right = sort_indexed(right, compare)?;
    merge(left, right, compare)
}

fn merge<C>(mut left: Seq, mut right: Seq, compare: &mut C) -> Result<Seq>
where
    C: FnMut(&Value, &Value) -> Result<bool>,
{
    let kind = left.kind();
    let mut emitted = Vec::with_capacity(left.len() + right.len());

    while let (Some(l), Some(r)) = (left.get(0), right.get(0)) {
        if compare(carried(l)?, carried(r)?)? {
            emitted.push(l.clone());
            left = pop_front(&left)?;
        } else {
            emitted.push(r.clone());
            right = pop_front(&right)?;
        }
    }

    // at most one of the halves is non-empty here
    Ok(concat_into(kind, [Seq::new(kind, emitted), left, right]))
}

fn position(entry: &Value) -> Result<usize> {
    let pair = expect_seq("merge_sort", entry)?;
    front(pair)?
        .as_index()
        .ok_or_else(|| SeqError::shape("merge_sort", "an indexed entry", entry.clone()))
}

fn carried(entry: &Value) -> Result<&Value> {
    second(expect_seq("merge_sort", entry)?)
}

// ============================================================================
// Comparators
// ============================================================================

/// Numeric order on indices. Anything else is rejected.
pub fn index_less(a: &Value, b: &Value) -> Result<bool> {
    match (a, b) {
        (Value::Index(x), Value::Index(y)) => Ok(x < y),
        _ => Err(SeqError::IllFormedPredicate {
            op: "index_less",
            reason: format!("cannot order {a} and {b} as indices"),
        }),
    }
}

/// Lexicographic order on symbol names. Anything else is rejected.
pub fn name_less(a: &Value, b: &Value) -> Result<bool> {
    match (a, b) {
        (Value::Symbol(x), Value::Symbol(y)) => Ok(x.resolve() < y.resolve()),
        _ => Err(SeqError::IllFormedPredicate {
            op: "name_less",
            reason: format!("cannot order {a} and {b} by name"),
        }),
    }
}
