//! Failure taxonomy shared by every sequence operation.

use thiserror::Error;

use crate::language::Value;

/// Errors that can occur when decomposing, searching or reordering sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// `front`/`pop_front` (or anything built on them) met an empty sequence.
    #[error("{op}: cannot decompose an empty sequence")]
    EmptySequenceDecomposition {
        /// Operation that attempted the decomposition.
        op: &'static str,
    },

    /// No association entry has the requested key.
    #[error("{op}: key {key} not found")]
    KeyNotFound {
        /// Operation performing the lookup.
        op: &'static str,
        /// The key that was searched for.
        key: Value,
    },

    /// The requested key is carried by more than one entry.
    #[error("{op}: key {key} is ambiguous ({occurrences} occurrences)")]
    AmbiguousKey {
        /// Operation performing the lookup.
        op: &'static str,
        /// The duplicated key.
        key: Value,
        /// How many entries carry it.
        occurrences: usize,
    },

    /// A transformer refused the argument list it was applied to.
    #[error("{op}: ill-formed transformer: {reason}")]
    IllFormedTransformer {
        op: &'static str,
        reason: String,
    },

    /// A predicate or comparator could not be evaluated on its arguments.
    #[error("{op}: ill-formed predicate: {reason}")]
    IllFormedPredicate {
        op: &'static str,
        reason: String,
    },

    /// An argument does not have the shape the operation decomposes.
    #[error("{op}: expected {expected}, got {found}")]
    ShapeMismatch {
        op: &'static str,
        expected: &'static str,
        found: Value,
    },

    /// A sequence literal could not be read.
    #[error("parse error: {message}")]
    Parse { message: String },
}

impl SeqError {
    pub(crate) fn empty(op: &'static str) -> Self {
        SeqError::EmptySequenceDecomposition { op }
    }

    pub(crate) fn shape(op: &'static str, expected: &'static str, found: impl Into<Value>) -> Self {
        SeqError::ShapeMismatch {
            op,
            expected,
            found: found.into(),
        }
    }

    #[cfg(feature = "reader")]
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        SeqError::Parse {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;
