//! Positional tagging of sequence elements.

use crate::error::{Result, SeqError};
use crate::language::{Seq, Value};
use crate::map::map_find;
use crate::primitives::second;
use crate::transform::flip;

/// Pair each element with its zero-based position: `((0 e0) (1 e1) ...)`.
///
/// The result is always a list of list pairs, whatever the input kind, and
/// its indices are exactly `0..len` in order.
pub fn enumerate(seq: &Seq) -> Seq {
    Seq::list(
        seq.iter()
            .enumerate()
            .map(|(i, elem)| Seq::pair(Value::Index(i), elem.clone())),
    )
}

/// Position of `value` in `seq`, which must contain it exactly once.
pub fn index_of_unique(value: &Value, seq: &Seq) -> Result<usize> {
    let by_element = flip(&enumerate(seq))?;
    let entry = map_find(value, &by_element).map_err(|err| match err {
        SeqError::KeyNotFound { key, .. } => SeqError::KeyNotFound {
            op: "index_of_unique",
            key,
        },
        SeqError::AmbiguousKey {
            key, occurrences, ..
        } => SeqError::AmbiguousKey {
            op: "index_of_unique",
            key,
            occurrences,
        },
        other => other,
    })?;
    let position = second(&entry)?;
    position
        .as_index()
        .ok_or_else(|| SeqError::shape("index_of_unique", "an index", position.clone()))
}
