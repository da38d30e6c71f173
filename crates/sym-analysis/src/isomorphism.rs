use sym_core::{SymError, Tri};
use sym_store::PermStore;

use crate::commutator::{derived_series, series_orders};
use crate::group::Group;
use crate::opts::AnalysisOpts;

/// Compares cheap isomorphism invariants of two groups.
///
/// A mismatch in order, commutativity, or the order profile of the derived
/// series refutes isomorphism. Matching invariants prove nothing, so the
/// positive answer is never produced; `Unknown` is the best this contract
/// offers.
pub fn isomorphic(
    store: &mut PermStore,
    a: &mut Group,
    b: &mut Group,
    opts: &AnalysisOpts,
) -> Result<Tri, SymError> {
    if a.order(store) != b.order(store) {
        return Ok(Tri::No);
    }
    if a.is_abelian(store) != b.is_abelian(store) {
        return Ok(Tri::No);
    }
    let mut series_a = derived_series(store, a, opts)?;
    let mut series_b = derived_series(store, b, opts)?;
    if series_orders(store, &mut series_a) != series_orders(store, &mut series_b) {
        return Ok(Tri::No);
    }
    Ok(Tri::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sym_store::parse_cycles;

    #[test]
    fn order_mismatch_refutes() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let mut g = Group::from_generators([a]);
        let mut h = Group::from_generators([b]);
        assert_eq!(
            isomorphic(&mut store, &mut g, &mut h, &AnalysisOpts::default()).unwrap(),
            Tri::No
        );
    }

    #[test]
    fn abelian_mismatch_refutes() {
        let mut store = PermStore::new();
        // S3 versus C6: same order, only one is abelian
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let c = store
            .register(&parse_cycles("(1 2)(3 4 5)").unwrap())
            .unwrap();
        let mut s3 = Group::from_generators([a, b]);
        let mut c6 = Group::from_generators([c]);
        assert_eq!(
            isomorphic(&mut store, &mut s3, &mut c6, &AnalysisOpts::default()).unwrap(),
            Tri::No
        );
    }

    #[test]
    fn matching_invariants_stay_unknown() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(4 5 6)").unwrap()).unwrap();
        let mut g = Group::from_generators([a]);
        let mut h = Group::from_generators([b]);
        assert_eq!(
            isomorphic(&mut store, &mut g, &mut h, &AnalysisOpts::default()).unwrap(),
            Tri::Unknown
        );
    }
}
