//! Predicate-based selection and pairwise projection.

use crate::concat::concat_into;
use crate::error::{Result, SeqError};
use crate::language::{Seq, Value, conditional};
use crate::primitives::{expect_seq, front, second};

// ============================================================================
// Filter
// ============================================================================

/// Elements of `seq` satisfying `pred`, in their original order.
pub fn filter<P>(mut pred: P, seq: &Seq) -> Seq
where
    P: FnMut(&Value) -> bool,
{
    let kind = seq.kind();
    let pieces = seq.iter().map(|elem| {
        conditional(
            pred(elem),
            Seq::singleton(kind, elem.clone()),
            Seq::empty(kind),
        )
    });
    concat_into(kind, pieces)
}

/// Like [`filter`], with a predicate that may fail. The first failure is
/// returned unchanged.
pub fn try_filter<P>(mut pred: P, seq: &Seq) -> Result<Seq>
where
    P: FnMut(&Value) -> Result<bool>,
{
    let kind = seq.kind();
    let pieces = seq
        .iter()
        .map(|elem| {
            Ok(conditional(
                pred(elem)?,
                Seq::singleton(kind, elem.clone()),
                Seq::empty(kind),
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(concat_into(kind, pieces))
}

// ============================================================================
// Pair Projections
// ============================================================================

/// Swap the two components of a pair, keeping its kind.
pub fn flip_pair(pair: &Seq) -> Result<Seq> {
    match (pair.len(), pair.get(0), pair.get(1)) {
        (2, Some(key), Some(value)) => Ok(pair.kind().construct(&[value.clone(), key.clone()])),
        _ => Err(SeqError::shape("flip", "a pair", pair.clone())),
    }
}

/// Swap every entry of an association.
pub fn flip(assoc: &Seq) -> Result<Seq> {
    let entries = assoc
        .iter()
        .map(|entry| flip_pair(expect_seq("flip", entry)?).map(Value::Seq))
        .collect::<Result<Vec<_>>>()?;
    Ok(Seq::new(assoc.kind(), entries))
}

/// The values of an association, keys dropped.
pub fn cut_map(assoc: &Seq) -> Result<Seq> {
    project(assoc, "cut_map", second)
}

/// The keys of an association, values dropped.
pub fn keys(assoc: &Seq) -> Result<Seq> {
    project(assoc, "keys", front)
}

fn project(assoc: &Seq, op: &'static str, component: fn(&Seq) -> Result<&Value>) -> Result<Seq> {
    let values = assoc
        .iter()
        .map(|entry| component(expect_seq(op, entry)?).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(Seq::new(assoc.kind(), values))
}
