//! Immutable sequences of opaque symbols.
//!
//! A [`Seq`] is an ordered, kind-tagged list of [`Value`]s: interned symbols,
//! index literals and nested sequences. The crate provides the algebra over
//! them: decomposition, fast concatenation, filtering and pair projection,
//! unique-key lookup, enumeration, flattening and an index-tracking merge
//! sort. Every operation is pure and returns a new sequence; failures are
//! reported as [`SeqError`] values.

pub mod concat;
pub mod enumerate;
pub mod error;
pub mod flatten;
pub mod interner;
pub mod language;
#[cfg(feature = "reader")]
pub mod lexer;
pub mod map;
#[cfg(feature = "reader")]
pub mod parser;
pub mod primitives;
pub mod sort;
pub mod transform;

// Re-export commonly used items for convenience
pub use concat::{concat, concat_into, splice};
pub use enumerate::{enumerate, index_of_unique};
pub use error::{Result, SeqError};
pub use flatten::flatten;
pub use interner::InternedSymbol;
pub use language::{Kind, Seq, Value, conditional};
pub use map::{Assoc, map_find};
#[cfg(feature = "reader")]
pub use parser::{parse, parse_seq};
pub use primitives::{Transformer, apply, contains, count, front, pop_front, second};
pub use sort::{index_less, merge_sort, merge_sort_by, name_less};
pub use transform::{cut_map, filter, flip, flip_pair, keys, try_filter};
