//! Structural decomposition and reconstruction of sequences.

use crate::error::{Result, SeqError};
use crate::language::{Kind, Seq, Value};

// ============================================================================
// Decomposition
// ============================================================================

/// First element of a non-empty sequence.
pub fn front(seq: &Seq) -> Result<&Value> {
    seq.get(0).ok_or_else(|| SeqError::empty("front"))
}

/// Everything but the first element, in the same kind.
pub fn pop_front(seq: &Seq) -> Result<Seq> {
    if seq.is_empty() {
        return Err(SeqError::empty("pop_front"));
    }
    let (kind, mut elements) = seq.clone().into_parts();
    elements.pop_front();
    Ok(Seq::from_parts(kind, elements))
}

/// Second element of a sequence with at least two elements.
pub fn second(seq: &Seq) -> Result<&Value> {
    seq.get(1)
        .ok_or_else(|| SeqError::shape("second", "a sequence of at least 2 elements", seq.clone()))
}

pub fn count(seq: &Seq) -> usize {
    seq.len()
}

/// Whether `value` is identical to some element of `seq`.
pub fn contains(value: &Value, seq: &Seq) -> bool {
    seq.iter().any(|elem| elem == value)
}

/// Views `value` as a sequence, or reports which operation needed one.
pub(crate) fn expect_seq<'a>(op: &'static str, value: &'a Value) -> Result<&'a Seq> {
    value
        .as_seq()
        .ok_or_else(|| SeqError::shape(op, "a sequence", value.clone()))
}

// ============================================================================
// Apply
// ============================================================================

/// Something that can be invoked with a sequence's elements as a flat
/// argument list.
///
/// `Kind` rewraps the arguments under that constructor; any
/// `Fn(&[Value]) -> Result<T>` computes an arbitrary result and may reject
/// its arguments with [`SeqError::IllFormedTransformer`].
pub trait Transformer {
    type Output;

    fn transform(&self, args: &[Value]) -> Result<Self::Output>;
}

impl Transformer for Kind {
    type Output = Seq;

    fn transform(&self, args: &[Value]) -> Result<Seq> {
        Ok(self.construct(args))
    }
}

impl<T, F> Transformer for F
where
    F: Fn(&[Value]) -> Result<T>,
{
    type Output = T;

    fn transform(&self, args: &[Value]) -> Result<T> {
        self(args)
    }
}

/// Invoke `transformer` with the elements of `seq`.
pub fn apply<F: Transformer>(transformer: &F, seq: &Seq) -> Result<F::Output> {
    transformer.transform(&seq.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Seq {
        Seq::list(["a", "b", "c"])
    }

    #[test]
    fn test_front() {
        assert_eq!(front(&abc()), Ok(&Value::symbol("a")));
    }

    #[test]
    fn test_front_of_empty_fails() {
        assert_eq!(
            front(&Seq::empty(Kind::list())),
            Err(SeqError::EmptySequenceDecomposition { op: "front" })
        );
    }

    #[test]
    fn test_pop_front_keeps_kind() {
        let row = Seq::new(Kind::new("row"), ["a", "b"]);
        let rest = pop_front(&row).unwrap();
        assert_eq!(rest, Seq::new(Kind::new("row"), ["b"]));
        // input is untouched
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_pop_front_of_empty_fails() {
        assert_eq!(
            pop_front(&Seq::empty(Kind::list())),
            Err(SeqError::EmptySequenceDecomposition { op: "pop_front" })
        );
    }

    #[test]
    fn test_second() {
        assert_eq!(second(&abc()), Ok(&Value::symbol("b")));
        assert!(matches!(
            second(&Seq::list(["a"])),
            Err(SeqError::ShapeMismatch { op: "second", .. })
        ));
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&abc()), 3);
        assert_eq!(count(&Seq::empty(Kind::list())), 0);
    }

    #[test]
    fn test_contains_is_identity_based() {
        let seq = Seq::list([Value::symbol("a"), Value::index(1)]);
        assert!(contains(&Value::symbol("a"), &seq));
        assert!(contains(&Value::index(1), &seq));
        assert!(!contains(&Value::symbol("1"), &seq));
        assert!(!contains(&Value::symbol("a"), &Seq::empty(Kind::list())));
    }

    #[test]
    fn test_apply_kind_changes_constructor() {
        let tuple = Kind::new("tuple");
        let result = apply(&tuple, &abc()).unwrap();
        assert_eq!(result.kind(), tuple);
        assert_eq!(result.to_vec(), abc().to_vec());
    }

    fn arity(args: &[Value]) -> Result<usize> {
        Ok(args.len())
    }

    fn binary(args: &[Value]) -> Result<Seq> {
        match args {
            [a, b] => Ok(Seq::pair(b.clone(), a.clone())),
            _ => Err(SeqError::IllFormedTransformer {
                op: "binary",
                reason: format!("expected 2 arguments, got {}", args.len()),
            }),
        }
    }

    #[test]
    fn test_apply_function_transformer() {
        assert_eq!(apply(&arity, &abc()), Ok(3));
        assert_eq!(
            apply(&binary, &Seq::list(["x", "y"])),
            Ok(Seq::list(["y", "x"]))
        );
    }

    #[test]
    fn test_apply_rejected_arguments() {
        assert!(matches!(
            apply(&binary, &abc()),
            Err(SeqError::IllFormedTransformer { op: "binary", .. })
        ));
    }
}
