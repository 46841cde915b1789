//! Depth-first collapse of nested sequences.

use tracing::trace;

use crate::concat::concat_into;
use crate::language::{Kind, Seq, Value};

/// Collapse nested sequences depth-first into one sequence of `seq`'s kind.
///
/// Symbols and indices are leaves and pass through unchanged; nested
/// sequences of any kind are replaced by their own flattened contents.
pub fn flatten(seq: &Seq) -> Seq {
    trace!(len = seq.len(), "flatten");
    let pieces = seq.iter().map(|elem| match elem {
        Value::Seq(inner) => flatten(inner),
        leaf => Seq::singleton(Kind::list(), leaf.clone()),
    });
    concat_into(seq.kind(), pieces).with_kind(seq.kind())
}
