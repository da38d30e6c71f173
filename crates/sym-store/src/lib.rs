#![deny(missing_docs)]
#![doc = "Interned permutation store and set algebra for the SYM engine."]
//!
//! Permutations are interned once in a [`PermStore`] and referenced
//! everywhere else by dense [`PermId`](sym_core::PermId) identifiers. The
//! store deduplicates through a radix trie over image values and supports
//! dynamic degree growth; [`PermSet`] layers sorted-unique set algebra and
//! orbit/coset machinery over the IDs, and [`generate`] closes a generating
//! set into the full group.

mod closure;
mod cycles;
mod set;
mod store;

pub use closure::generate;
pub use cycles::{format_cycles, parse_cycles};
pub use set::PermSet;
pub use store::PermStore;
