//! Unique-key lookup over associations.
//!
//! An association is a sequence whose entries are sequences headed by a key.
//! A key is well-defined only when exactly one entry carries it; lookups
//! report a missing key and a repeated key as distinct failures and never
//! pick one of several matches.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Result, SeqError};
use crate::language::{Seq, Value};
use crate::primitives::{expect_seq, front, second};
use crate::transform::flip;

/// The entry of `assoc` whose first component is `key`.
pub fn map_find(key: &Value, assoc: &Seq) -> Result<Seq> {
    let mut found: Option<&Seq> = None;
    let mut occurrences = 0;

    for entry in assoc {
        let entry = expect_seq("map_find", entry)?;
        let Some(head) = entry.get(0) else {
            return Err(SeqError::shape("map_find", "a non-empty entry", entry.clone()));
        };
        if head == key {
            occurrences += 1;
            found.get_or_insert(entry);
        }
    }

    match (found, occurrences) {
        (Some(entry), 1) => Ok(entry.clone()),
        (None, _) => Err(SeqError::KeyNotFound {
            op: "map_find",
            key: key.clone(),
        }),
        (Some(_), _) => Err(SeqError::AmbiguousKey {
            op: "map_find",
            key: key.clone(),
            occurrences,
        }),
    }
}

// ============================================================================
// Assoc
// ============================================================================

/// A validated association with a key index.
///
/// Construction checks every entry up front: each must be a sequence of at
/// least two elements and no key may repeat. Lookups afterwards cannot be
/// ambiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assoc {
    entries: Seq,
    positions: FxHashMap<Value, usize>,
}

impl Assoc {
    pub fn new(entries: Seq) -> Result<Self> {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());

        for (position, entry) in entries.iter().enumerate() {
            let entry = expect_seq("assoc", entry)?;
            if entry.len() < 2 {
                return Err(SeqError::shape("assoc", "a key-value entry", entry.clone()));
            }
            let key = front(entry)?;
            if positions.insert(key.clone(), position).is_some() {
                let occurrences = entries
                    .iter()
                    .filter_map(Value::as_seq)
                    .filter(|e| e.get(0) == Some(key))
                    .count();
                return Err(SeqError::AmbiguousKey {
                    op: "assoc",
                    key: key.clone(),
                    occurrences,
                });
            }
        }

        debug!(entries = entries.len(), kind = %entries.kind(), "built association index");
        Ok(Assoc { entries, positions })
    }

    /// The entry whose key is `key`.
    pub fn find(&self, key: &Value) -> Result<&Seq> {
        self.positions
            .get(key)
            .and_then(|&position| self.entries.get(position))
            .and_then(Value::as_seq)
            .ok_or_else(|| SeqError::KeyNotFound {
                op: "assoc",
                key: key.clone(),
            })
    }

    /// The value associated with `key`.
    pub fn get(&self, key: &Value) -> Result<&Value> {
        second(self.find(key)?)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Seq> {
        self.entries.iter().filter_map(Value::as_seq)
    }

    pub fn as_seq(&self) -> &Seq {
        &self.entries
    }

    pub fn into_seq(self) -> Seq {
        self.entries
    }

    /// Swap keys and values. Fails if two entries share a value.
    pub fn flip(&self) -> Result<Assoc> {
        Assoc::new(flip(&self.entries)?)
    }
}

impl TryFrom<Seq> for Assoc {
    type Error = SeqError;

    fn try_from(entries: Seq) -> Result<Self> {
        Assoc::new(entries)
    }
}
