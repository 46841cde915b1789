use std::fmt;

use im::Vector as ImVector;

use crate::interner::InternedSymbol;

// ============================================================================
// Core Type System
// ============================================================================

/// The constructor identity a sequence is tagged with.
///
/// Results of sequence operations are rewrapped in the kind of their input,
/// so a `#row(a b)` filtered is still a `#row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind(InternedSymbol);

impl Kind {
    pub const LIST_NAME: &'static str = "list";

    pub fn new(name: &str) -> Self {
        Kind(InternedSymbol::new(name))
    }

    /// The default kind, used for pairs, enumerations and the concat identity
    pub fn list() -> Self {
        Kind::new(Self::LIST_NAME)
    }

    pub fn is_list(&self) -> bool {
        self.0.with_str(|s| s == Self::LIST_NAME)
    }

    pub fn name(&self) -> InternedSymbol {
        self.0
    }

    /// Rebuild an argument list as a sequence of this kind
    pub fn construct(&self, args: &[Value]) -> Seq {
        Seq::new(*self, args.iter().cloned())
    }
}

/// A sequence element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Opaque identity
    Symbol(InternedSymbol),
    /// Natural number literal, as produced by enumeration
    Index(usize),
    /// Nested sequence
    Seq(Seq),
}

impl Value {
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(InternedSymbol::new(name))
    }

    pub fn index(n: usize) -> Self {
        Value::Index(n)
    }

    pub fn as_seq(&self) -> Option<&Seq> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Value::Index(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<InternedSymbol> {
        match self {
            Value::Symbol(s) => Some(*s),
            _ => None,
        }
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }
}

impl From<Seq> for Value {
    fn from(seq: Seq) -> Self {
        Value::Seq(seq)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Index(n)
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Value::symbol(name)
    }
}

impl From<InternedSymbol> for Value {
    fn from(sym: InternedSymbol) -> Self {
        Value::Symbol(sym)
    }
}

/// Immutable, ordered, kind-tagged sequence with structural sharing.
///
/// Cloning is O(1); every operation returns a new sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Seq {
    kind: Kind,
    elements: ImVector<Value>,
}

impl Seq {
    pub fn empty(kind: Kind) -> Self {
        Seq {
            kind,
            elements: ImVector::new(),
        }
    }

    pub fn singleton(kind: Kind, value: Value) -> Self {
        Seq {
            kind,
            elements: ImVector::unit(value),
        }
    }

    pub fn new<I, V>(kind: Kind, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Seq {
            kind,
            elements: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A list-kind sequence
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Seq::new(Kind::list(), values)
    }

    /// A two-element list-kind sequence
    pub fn pair(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Seq::list([first.into(), second.into()])
    }

    pub(crate) fn from_parts(kind: Kind, elements: ImVector<Value>) -> Self {
        Seq { kind, elements }
    }

    pub(crate) fn into_parts(self) -> (Kind, ImVector<Value>) {
        (self.kind, self.elements)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Same elements under another kind
    pub fn with_kind(&self, kind: Kind) -> Seq {
        Seq {
            kind,
            elements: self.elements.clone(),
        }
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.elements.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a Seq {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<Value> for Seq {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Seq::list(iter)
    }
}

/// Pure selection: `t` when `b` holds, `f` otherwise.
pub fn conditional<T>(b: bool, t: T, f: T) -> T {
    if b { t } else { f }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Characters a name may contain and still be written without quotes.
pub(crate) fn is_bare_name_char(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(
            c,
            '-' | '_' | '+' | '*' | '!' | '?' | '<' | '>' | '=' | '%' | ':' | '/' | '.' | '&'
        )
}

/// Whether `name` reads back as the same symbol when written bare.
///
/// Empty names, names with other characters, and all-digit names (which
/// read as indices) are not.
pub(crate) fn is_bare_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(is_bare_name_char)
        && !name.chars().all(|c| c.is_ascii_digit())
}

/// Write a name bare when possible, otherwise as `|...|` with `|` and `\`
/// escaped by a backslash.
fn write_name(f: &mut fmt::Formatter, name: &str) -> fmt::Result {
    if is_bare_name(name) {
        return write!(f, "{name}");
    }
    write!(f, "|")?;
    for c in name.chars() {
        if matches!(c, '|' | '\\') {
            write!(f, "\\")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, "|")
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.with_str(|name| write_name(f, name))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Symbol(s) => s.with_str(|name| write_name(f, name)),
            Value::Index(n) => write!(f, "{n}"),
            Value::Seq(seq) => write!(f, "{seq}"),
        }
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.kind.is_list() {
            write!(f, "#{}", self.kind)?;
        }
        write!(f, "(")?;
        for (i, elem) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, ")")
    }
}
