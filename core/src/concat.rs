//! Variadic concatenation.
//!
//! Two sequences are combined in a single splice of their element vectors
//! (an RRB concatenation, logarithmic in the sizes involved) instead of being
//! rebuilt element by element, and any number of inputs is folded through
//! that splice. Filter, flatten and merge all build their results this way.

use crate::language::{Kind, Seq};

/// Combine two sequences in one step. The result keeps `left`'s kind.
pub fn splice(left: Seq, right: &Seq) -> Seq {
    let (kind, mut elements) = left.into_parts();
    let (_, tail) = right.clone().into_parts();
    elements.append(tail);
    Seq::from_parts(kind, elements)
}

/// Concatenate `seqs` in order; the identity is an empty list.
pub fn concat<I>(seqs: I) -> Seq
where
    I: IntoIterator<Item = Seq>,
{
    concat_into(Kind::list(), seqs)
}

/// Concatenate `seqs` in order.
///
/// The result takes the kind of the first input, or `identity` when there
/// are no inputs.
pub fn concat_into<I>(identity: Kind, seqs: I) -> Seq
where
    I: IntoIterator<Item = Seq>,
{
    let mut seqs = seqs.into_iter();
    match seqs.next() {
        Some(first) => seqs.fold(first, |acc, next| splice(acc, &next)),
        None => Seq::empty(identity),
    }
}
