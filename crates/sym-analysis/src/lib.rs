#![deny(missing_docs)]
#![doc = "Structural analysis of finite permutation groups layered on the \
SYM store and stabiliser chains."]
//!
//! Every routine accepts a [`Group`] (generators plus a lazily built
//! chain) and answers with a group, a report, or a
//! [`Tri`](sym_core::Tri) verdict. Safety bounds for the iterative and
//! randomised algorithms live in [`AnalysisOpts`]; exceeding one is a
//! typed `Limit` error, never a silent timeout.

mod arith;
/// Commutator subgroups, derived and lower central series, solvability.
pub mod commutator;
/// Fundamental/redundant generator classification.
pub mod generators;
mod group;
/// Subgroup and normality tests, normal closures.
pub mod normal;
mod opts;
/// Quotient construction by coset enumeration.
pub mod quotient;
/// Heuristic simplicity decision.
pub mod simplicity;
/// Randomised Sylow p-subgroup search.
pub mod sylow;
mod isomorphism;

pub use commutator::{
    commutator_subgroup, derived_series, is_nilpotent, is_perfect, is_solvable,
    lower_central_series, mixed_commutator,
};
pub use generators::{analyze_generators, GeneratorEntry, GeneratorReport, GeneratorRole};
pub use group::Group;
pub use isomorphism::isomorphic;
pub use normal::{is_normal, is_subgroup, normal_closure};
pub use opts::AnalysisOpts;
pub use quotient::{quotient, QuotientMap};
pub use simplicity::is_simple;
pub use sylow::sylow_subgroup;
