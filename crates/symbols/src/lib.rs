//! symbols - Process-wide symbol interning
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! A [`Symbol`] is a small `Copy` handle that stands for a name. Two symbols
//! are equal exactly when their names are equal, and comparing them never
//! looks at the text: equality and hashing run on the address of the single
//! canonical copy of the name held by the [`SymbolTable`].
//!
//! The zero value of `Symbol` is the symbol named [`NIL_NAME`] (`"nil"`).
//! It can be obtained with `Symbol::default()` without touching any table,
//! and `Symbol::intern("nil")` returns that same identity.
//!
//! ```
//! use symbols::{Symbol, NIL_NAME};
//!
//! let a = Symbol::intern("foo");
//! let b = Symbol::intern(&String::from("foo"));
//! assert_eq!(a, b);
//! assert_ne!(a, Symbol::intern("bar"));
//!
//! assert_eq!(Symbol::default().as_str(), NIL_NAME);
//! assert_eq!(Symbol::intern("nil"), Symbol::default());
//! ```
//
// MEMORY:
// -------
// Every distinct name ever interned stays allocated until the process exits.
// Nothing is reference counted or evicted, so symbols stay valid forever.
// Interning an unbounded number of distinct large names grows memory without
// bound; callers own that tradeoff.
//
// CONCURRENCY:
// ------------
// Each table guards its map with one mutex, held only for the
// lookup-or-insert step of `intern`. Reading a symbol's text takes no lock.

pub mod error;
pub mod symbol;

pub use error::{SymbolError, SymbolResult};
pub use symbol::{InternerStats, Symbol, SymbolTable, DEFAULT_CAPACITY, NIL_NAME};
