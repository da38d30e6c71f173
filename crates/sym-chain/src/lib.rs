#![deny(missing_docs)]
#![doc = "Schreier-Sims stabiliser chains: base, strong generators, and \
transversals for finite permutation groups of any size."]
//!
//! A [`StabilizerChain`] answers order and membership queries without ever
//! materialising the group. Sifting runs over raw image rows in reusable
//! scratch buffers; only strong generators and coset representatives are
//! interned in the backing [`PermStore`](sym_store::PermStore).

mod chain;

pub use chain::StabilizerChain;
