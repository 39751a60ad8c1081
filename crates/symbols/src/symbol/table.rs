//! Symbol table: the mutex-guarded registry behind [`Symbol::intern`].
//!
//! - One `parking_lot::Mutex` per table, held only for lookup-or-insert
//! - Canonical copies are leaked `Box<str>` with `'static` lifetime
//! - Hit/miss counters for profiling
//!
//! # Thread Safety
//!
//! The table is `Sync + Send`. Concurrent `intern` calls for the same name
//! serialize on the mutex, so exactly one of them allocates the canonical
//! copy and every caller gets the same identity. The copy is written before
//! the mutex is released, which orders it before any other thread can obtain
//! the symbol; readers of [`Symbol::as_str`] need no further synchronization.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

use super::{InternerStats, Symbol, NIL_NAME};
use crate::error::SymbolResult;

/// Process-wide table used by [`Symbol::intern`]
///
/// Initialized on first use via `LazyLock` and never torn down.
static GLOBAL: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::unlogged(DEFAULT_CAPACITY));

/// Initial map capacity used by [`SymbolTable::new`]
pub const DEFAULT_CAPACITY: usize = 256;

/// A registry mapping names to their unique [`Symbol`]
///
/// # Memory
///
/// Each distinct name costs one heap allocation that is never freed, even
/// if the table itself is dropped: symbols handed out must stay valid for the
/// rest of the process. Dropping a table only releases its map.
///
/// The nil-name is never stored. `intern(NIL_NAME)` answers with the zero
/// symbol, so the default value and the interned `"nil"` are one identity.
///
/// # Identity
///
/// Equality of symbols is only meaningful within one table. Interning the
/// same text in two tables yields two unequal symbols, except for the
/// nil-name (the zero symbol belongs to no table) and the empty name (its
/// zero-length copy may share an address across tables). Use
/// [`SymbolTable::global`] everywhere unless tables are kept strictly apart.
///
/// ```
/// use symbols::{Symbol, SymbolTable};
///
/// let a = SymbolTable::new();
/// let b = SymbolTable::new();
/// assert_ne!(a.intern("foo"), b.intern("foo"));
/// assert_eq!(a.intern("nil"), b.intern("nil"));
/// assert_eq!(a.intern("nil"), Symbol::default());
/// ```
pub struct SymbolTable {
    /// Canonical copy of each name, keyed by itself
    map: Mutex<FxHashMap<&'static str, Symbol>>,

    /// Number of `intern` calls that found an existing entry
    hits: AtomicUsize,

    /// Number of `intern` calls that allocated a new entry
    misses: AtomicUsize,
}

impl SymbolTable {
    /// Create an empty table with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty table sized for `capacity` distinct names
    pub fn with_capacity(capacity: usize) -> Self {
        log::debug!("creating symbol table with capacity {}", capacity);
        Self::unlogged(capacity)
    }

    /// Build a table without emitting a log record
    ///
    /// Used for [`GLOBAL`], whose initializer must not call into a logger
    /// that could itself reach `Symbol::intern`.
    fn unlogged(capacity: usize) -> Self {
        Self {
            map: Mutex::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// The process-wide table
    #[inline]
    pub fn global() -> &'static SymbolTable {
        &GLOBAL
    }

    /// Intern `name`, returning its symbol
    ///
    /// Returns the existing symbol when `name` was seen before. Otherwise
    /// copies `name` once into a canonical allocation and records it. The
    /// caller's buffer is never aliased.
    ///
    /// # Performance
    ///
    /// - **Hit**: one hash of `name` under the lock
    /// - **Miss**: hash + one allocation of `name.len()` bytes + insert
    pub fn intern(&self, name: &str) -> Symbol {
        // An entry for the nil-name would be a second identity named "nil",
        // unequal to the zero value.
        if name == NIL_NAME {
            return Symbol::NIL;
        }

        let (symbol, len) = {
            let mut map = self.map.lock();
            if let Some(&symbol) = map.get(name) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return symbol;
            }

            let canonical: &'static str = Box::leak(Box::<str>::from(name));
            let symbol = Symbol::from_canonical(canonical);
            map.insert(canonical, symbol);
            self.misses.fetch_add(1, Ordering::Relaxed);
            (symbol, map.len())
        };

        // Logged after the guard is dropped: a logger may intern too.
        log::trace!(
            "interned new symbol ({} bytes, {} in table)",
            symbol.len(),
            len
        );
        symbol
    }

    /// Intern a name held in a raw byte buffer
    ///
    /// The bytes are copied, so the caller may reuse or mutate the buffer
    /// afterwards without affecting the returned symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidUtf8`](crate::SymbolError::InvalidUtf8)
    /// if `bytes` is not valid UTF-8. Nothing is interned in that case.
    pub fn try_intern_utf8(&self, bytes: &[u8]) -> SymbolResult<Symbol> {
        let name = std::str::from_utf8(bytes)?;
        Ok(self.intern(name))
    }

    /// Look up `name` without interning it
    ///
    /// The nil-name is always present.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        if name == NIL_NAME {
            return Some(Symbol::NIL);
        }
        self.map.lock().get(name).copied()
    }

    /// Number of canonical copies held by this table
    ///
    /// The nil-name is never stored and is not counted.
    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    /// Returns true if nothing has been interned yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get statistics about the table for profiling
    ///
    /// Counters are updated with relaxed ordering and may lag concurrent
    /// `intern` calls.
    pub fn stats(&self) -> InternerStats {
        let (count, capacity) = {
            let map = self.map.lock();
            (map.len(), map.capacity())
        };
        InternerStats {
            count,
            capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SymbolTable: Send, Sync);
