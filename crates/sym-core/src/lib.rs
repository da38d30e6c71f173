#![deny(missing_docs)]
#![doc = "Core identifiers, error taxonomy, deterministic RNG, and sorted-set \
utilities shared by the SYM permutation group engine."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod intset;
pub mod rng;

pub use errors::{ErrorInfo, SymError};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier of an interned permutation within a store.
///
/// Identifiers are dense small integers assigned at interning time and stay
/// valid until the owning store is reset. The identity permutation always
/// owns ID 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PermId(u32);

impl PermId {
    /// The identity permutation's identifier in every store.
    pub const IDENTITY: PermId = PermId(0);

    /// Creates an identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns whether this identifier denotes the identity permutation.
    pub fn is_identity(&self) -> bool {
        self.0 == 0
    }
}

/// Outcome of a decision procedure whose strict solution is out of scope.
///
/// Simplicity and isomorphism queries answer with this type instead of
/// raising: `Unknown` is a first-class result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tri {
    /// The property definitely does not hold.
    No,
    /// The property definitely holds.
    Yes,
    /// The engine cannot decide within its contract.
    Unknown,
}

impl Tri {
    /// Renders the conventional integer encoding: -1 unknown, 0 no, 1 yes.
    pub fn as_i8(&self) -> i8 {
        match self {
            Tri::No => 0,
            Tri::Yes => 1,
            Tri::Unknown => -1,
        }
    }
}
