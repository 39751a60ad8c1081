//! Symbol module - interned names with constant-time equality.
//!
//! This module provides the [`Symbol`] type, a two-word `Copy` handle to the
//! canonical copy of a name stored by a [`SymbolTable`].
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Symbol::intern()` (hit) | O(n) | Hash of the name under the table lock |
//! | `Symbol::intern()` (miss) | O(n) | Plus one allocation of the name |
//! | `Symbol` comparison | O(1) | Address comparison, text never read |
//! | `Symbol` hashing | O(1) | Hashes the address |
//! | `Symbol::as_str()` | O(1) | No lock, no lookup |
//!
//! # The nil symbol
//!
//! `Symbol::default()` is the symbol named [`NIL_NAME`]. It exists without
//! any table and interning `"nil"` in any table returns it:
//!
//! ```
//! use symbols::{Symbol, SymbolTable, NIL_NAME};
//!
//! let zero = Symbol::default();
//! assert_eq!(zero.as_str(), "nil");
//! assert_eq!(Symbol::intern(NIL_NAME), zero);
//! assert_eq!(SymbolTable::new().intern("nil"), zero);
//! ```
//!
//! # Thread Safety
//!
//! ```
//! use symbols::Symbol;
//! use std::thread;
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| thread::spawn(|| Symbol::intern("shared")))
//!     .collect();
//!
//! let symbols: Vec<_> = handles.into_iter()
//!     .map(|h| h.join().unwrap())
//!     .collect();
//!
//! assert!(symbols.iter().all(|&s| s == symbols[0]));
//! ```

mod table;

pub use table::{SymbolTable, DEFAULT_CAPACITY};

use std::hash::{Hash, Hasher};

use crate::error::SymbolResult;

/// Name of the zero-value symbol
///
/// Another reasonable choice would be the empty string, but `"nil"` reads
/// better in debug output.
pub const NIL_NAME: &str = "nil";

/// Statistics about a symbol table for profiling
///
/// # Fields
///
/// * `count` - Number of canonical copies held by the table
/// * `capacity` - Hash map capacity
/// * `hits` - Number of times an already-interned name was requested
/// * `misses` - Number of times a new canonical copy was allocated
///
/// Interning the nil-name never reaches the table and counts as neither.
///
/// # Examples
///
/// ```
/// use symbols::SymbolTable;
///
/// let table = SymbolTable::new();
/// table.intern("a");
/// table.intern("a");
///
/// let stats = table.stats();
/// assert_eq!(stats.count, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of interned names
    pub count: usize,
    /// Hash map capacity
    pub capacity: usize,
    /// Number of lookups that found an existing entry
    pub hits: usize,
    /// Number of lookups that allocated a new entry
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values
    pub const fn new(count: usize, capacity: usize, hits: usize, misses: usize) -> Self {
        Self {
            count,
            capacity,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity)
    ///
    /// Returns 0.0 if capacity is 0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations that reached the table
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

/// Symbol - An interned name
///
/// A symbol is uniquely identified by its name: if two symbols have equal
/// names, the symbols are equal. Creating one costs a hash table lookup (and
/// an allocation the first time a name is seen), but comparing and hashing
/// symbols is O(1) regardless of name length.
///
/// Store and pass symbols by value. They are `Copy` and two words wide.
///
/// # Lifetime
///
/// The canonical copy of a name is never freed, even when no symbol refers
/// to it any more. Avoid interning many large distinct names.
///
/// # Examples
///
/// ```
/// use symbols::Symbol;
///
/// let keyword = Symbol::intern("fn");
/// let name = Symbol::intern("main");
///
/// assert_eq!(keyword.as_str(), "fn");
/// assert_eq!(name.to_string(), "main");
/// assert_eq!(keyword, Symbol::intern("fn"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct Symbol {
    /// Canonical copy of the name, or `None` for the nil symbol
    name: Option<&'static str>,
}

impl Symbol {
    /// The zero-value symbol, named [`NIL_NAME`]
    pub const NIL: Symbol = Symbol { name: None };

    /// Wrap a canonical copy owned by a table
    #[inline]
    pub(crate) const fn from_canonical(name: &'static str) -> Self {
        Self { name: Some(name) }
    }

    /// Intern `name` in the global table, returning its symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use symbols::Symbol;
    ///
    /// let mut buf = String::from("foo");
    /// let foo = Symbol::intern(&buf);
    /// buf.replace_range(0..1, "g");
    ///
    /// assert_eq!(foo.as_str(), "foo");
    /// assert_ne!(Symbol::intern(&buf), foo);
    /// ```
    #[inline]
    pub fn intern(name: &str) -> Self {
        SymbolTable::global().intern(name)
    }

    /// Intern a UTF-8 byte buffer in the global table
    ///
    /// # Errors
    ///
    /// Fails with [`SymbolError::InvalidUtf8`](crate::SymbolError::InvalidUtf8)
    /// if `bytes` is not valid UTF-8.
    #[inline]
    pub fn try_intern_utf8(bytes: &[u8]) -> SymbolResult<Self> {
        SymbolTable::global().try_intern_utf8(bytes)
    }

    /// Get the name of this symbol
    ///
    /// Never locks: canonical copies are immutable once published.
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.name.unwrap_or(NIL_NAME)
    }

    /// Returns true for the zero-value symbol
    #[inline]
    pub fn is_nil(self) -> bool {
        self.name.is_none()
    }

    /// Length of the name in bytes
    #[inline]
    pub fn len(self) -> usize {
        self.as_str().len()
    }

    /// Returns true if the name is the empty string
    ///
    /// The nil symbol is named `"nil"` and is not empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.as_str().is_empty()
    }

    /// Compare the name with a `&str`
    ///
    /// This reads the text and costs O(n); compare symbols with `==` instead
    /// whenever both sides are interned.
    #[inline]
    pub fn eq_str(self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Get statistics about the global table
    #[inline]
    pub fn stats() -> InternerStats {
        SymbolTable::global().stats()
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

// Identity, not text: a table holds one canonical copy per name, so equal
// addresses and equal names coincide. `ptr::eq` on `&str` also compares the
// length, which keeps the zero-length copy distinct from any other name.
impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.name, other.name) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.map(str::as_ptr).hash(state);
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    /// Interns into the global table
    fn from(name: &str) -> Self {
        Self::intern(name)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

static_assertions::assert_impl_all!(Symbol: Send, Sync, Copy);
static_assertions::assert_eq_size!(Symbol, &'static str);
