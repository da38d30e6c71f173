use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use sym_core::{ErrorInfo, PermId, SymError};
use sym_store::{generate, PermSet, PermStore};

use crate::group::Group;
use crate::normal::is_subgroup;
use crate::opts::AnalysisOpts;

/// Result of a quotient construction `G/N`.
///
/// Coset 0 is always represented by the identity. The quotient group is a
/// permutation group on the coset indices, closed under multiplication and
/// registered in the same store as the original group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotientMap {
    /// One representative per coset, in enumeration order.
    pub reps: Vec<PermId>,
    /// The induced permutation group on the coset indices.
    pub group: PermSet,
}

/// Builds the quotient `G/N` by right-coset enumeration.
///
/// Preconditions are checked in order: `|N|` must divide `|G|` (divisor
/// error), `N` must be a subgroup of `G` (subgroup error), and the index
/// must not exceed `max_quotient_index` (limit error). Normality of `N` is
/// the caller's responsibility; without it the induced action is not well
/// defined.
///
/// Cosets are discovered breadth-first: each known representative is
/// multiplied by every generator of `G`, and the product opens a new coset
/// unless `candidate·repᵢ⁻¹ ∈ N` for an existing representative. Each
/// generator then induces a permutation of the coset indices, and the
/// quotient group is the closure of those permutations.
pub fn quotient(
    store: &mut PermStore,
    g: &mut Group,
    n: &mut Group,
    opts: &AnalysisOpts,
) -> Result<QuotientMap, SymError> {
    let g_order = g.order(store);
    let n_order = n.order(store);
    let (index, remainder) = g_order.div_rem(&n_order);
    if !remainder.is_zero() {
        return Err(SymError::Divisor(
            ErrorInfo::new("order-divisor", "subgroup order does not divide the group order")
                .with_context("group_order", &g_order)
                .with_context("subgroup_order", &n_order),
        ));
    }
    if !is_subgroup(store, g, n) {
        return Err(SymError::Subgroup(
            ErrorInfo::new("not-subgroup", "quotient modulus is not a subgroup"),
        ));
    }
    let index = match index.to_usize() {
        Some(idx) if idx <= opts.max_quotient_index => idx,
        _ => {
            return Err(SymError::Limit(
                ErrorInfo::new("quotient-index", "coset count exceeds the configured bound")
                    .with_context("bound", opts.max_quotient_index)
                    .with_context("index", &index),
            ));
        }
    };

    let mut reps: Vec<PermId> = vec![PermId::IDENTITY];
    let mut head = 0;
    while head < reps.len() {
        let rep = reps[head];
        head += 1;
        for &gen in g.generators() {
            let candidate = store.multiply(rep, gen);
            if coset_index(store, n, &reps, candidate).is_none() {
                reps.push(candidate);
            }
        }
    }
    debug_assert_eq!(reps.len(), index);

    let mut action_gens = Vec::with_capacity(g.generators().len());
    for &gen in g.generators() {
        let mut image = Vec::with_capacity(reps.len());
        for &rep in &reps {
            let moved = store.multiply(rep, gen);
            let target = coset_index(store, n, &reps, moved).ok_or_else(|| {
                SymError::Subgroup(
                    ErrorInfo::new("coset-action", "coset enumeration is not closed")
                        .with_hint("the quotient modulus is likely not normal"),
                )
            })?;
            image.push(target as u32);
        }
        action_gens.push(store.register(&image)?);
    }

    let group = generate(store, &PermSet::from_ids(action_gens));
    Ok(QuotientMap { reps, group })
}

/// Finds the existing coset containing `candidate`, testing membership of
/// `candidate·repᵢ⁻¹` in `n`.
fn coset_index(
    store: &mut PermStore,
    n: &mut Group,
    reps: &[PermId],
    candidate: PermId,
) -> Option<usize> {
    for (idx, &rep) in reps.iter().enumerate() {
        let rep_inv = store.inverse(rep);
        let shifted = store.multiply(candidate, rep_inv);
        if n.contains(store, shifted) {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use sym_store::parse_cycles;

    #[test]
    fn s3_mod_a3_has_order_two() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let mut g = Group::from_generators([a, b]);
        let mut n = Group::from_generators([b]);

        let map = quotient(&mut store, &mut g, &mut n, &AnalysisOpts::default()).unwrap();
        assert_eq!(map.reps.len(), 2);
        assert_eq!(map.reps[0], PermId::IDENTITY);
        assert_eq!(map.group.len(), 2);
        assert!(map.group.is_group());
    }

    #[test]
    fn divisor_violation_is_rejected() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let c = store.register(&parse_cycles("(4 5 6 7)").unwrap()).unwrap();
        let mut g = Group::from_generators([a, b]);
        let mut n = Group::from_generators([c]);

        // |N| = 4 does not divide |G| = 6
        let err = quotient(&mut store, &mut g, &mut n, &AnalysisOpts::default()).unwrap_err();
        assert!(matches!(err, SymError::Divisor(_)));
    }

    #[test]
    fn non_subgroup_is_rejected() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let outside = store.register(&parse_cycles("(4 5)").unwrap()).unwrap();
        let mut g = Group::from_generators([a, b]);
        let mut n = Group::from_generators([outside]);

        let err = quotient(&mut store, &mut g, &mut n, &AnalysisOpts::default()).unwrap_err();
        assert!(matches!(err, SymError::Subgroup(_)));
    }

    #[test]
    fn index_bound_is_enforced() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let mut g = Group::from_generators([a, b]);
        let mut n = Group::trivial();

        let opts = AnalysisOpts {
            max_quotient_index: 3,
            ..AnalysisOpts::default()
        };
        let err = quotient(&mut store, &mut g, &mut n, &opts).unwrap_err();
        assert!(matches!(err, SymError::Limit(_)));

        let full = quotient(&mut store, &mut g, &mut n, &AnalysisOpts::default()).unwrap();
        assert_eq!(full.reps.len(), 6);
        assert_eq!(full.group.len(), 6);
        assert_eq!(
            BigUint::from(full.group.len()),
            g.order(&mut store)
        );
    }
}
