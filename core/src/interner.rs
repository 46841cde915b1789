//! Process-wide symbol interning.
//!
//! Symbols carry no structure of their own: two symbols are the same symbol
//! exactly when they were interned from the same name.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

// The interner only ever grows, so a poisoned lock still guards a
// consistent table and is recovered rather than propagated.
static INTERNER: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

/// An opaque identity, compared by interned name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InternedSymbol(DefaultSymbol);

impl InternedSymbol {
    /// Intern a name and return its symbol
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER.write().unwrap_or_else(PoisonError::into_inner);
        InternedSymbol(interner.get_or_intern(name))
    }

    /// Resolve the symbol back to an owned name
    pub fn resolve(&self) -> String {
        self.with_str(str::to_string)
    }

    /// Resolve the symbol and run a function with the name, without allocating
    pub fn with_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let interner = INTERNER.read().unwrap_or_else(PoisonError::into_inner);
        // Every `InternedSymbol` is minted by this interner.
        f(interner.resolve(self.0).unwrap_or_default())
    }
}

impl fmt::Display for InternedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| write!(f, "{s}"))
    }
}
