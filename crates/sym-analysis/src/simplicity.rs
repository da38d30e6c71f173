use num_traits::{One, ToPrimitive};
use sym_core::{PermId, RngHandle, Tri};
use sym_store::PermStore;

use crate::arith::{is_prime, SMALL_PRIME_LIMIT};
use crate::commutator::commutator_subgroup;
use crate::group::Group;
use crate::normal::normal_closure;
use crate::opts::AnalysisOpts;

/// Heuristic simplicity test.
///
/// Definite answers: the trivial group is not simple; an abelian group is
/// simple exactly when its order is prime (undecided beyond the native
/// primality range); a non-perfect non-abelian group has its derived
/// subgroup as a proper normal subgroup. Otherwise the normal closures of
/// every generator and of `simplicity_samples` random elements are probed;
/// any proper one denies simplicity, and exhausting the probes yields
/// `Unknown`: likely simple, but unproven.
pub fn is_simple(
    store: &mut PermStore,
    g: &mut Group,
    opts: &AnalysisOpts,
    rng: &mut RngHandle,
) -> Tri {
    let order = g.order(store);
    if order.is_one() {
        return Tri::No;
    }
    if g.is_abelian(store) {
        return match order.to_u64() {
            Some(n) if n <= SMALL_PRIME_LIMIT => {
                if is_prime(n) {
                    Tri::Yes
                } else {
                    Tri::No
                }
            }
            _ => Tri::Unknown,
        };
    }
    {
        let mut derived = commutator_subgroup(store, g);
        if derived.order(store) < order {
            return Tri::No;
        }
    }

    let mut probes: Vec<PermId> = g
        .generators()
        .iter()
        .copied()
        .filter(|id| !id.is_identity())
        .collect();
    {
        let chain = g.chain(store);
        for _ in 0..opts.simplicity_samples {
            let sample = chain.random_element(store, rng);
            if !sample.is_identity() {
                probes.push(sample);
            }
        }
    }

    for probe in probes {
        let mut closure = normal_closure(store, g, &[probe]);
        let closure_order = closure.order(store);
        if closure_order > num_bigint::BigUint::one() && closure_order < order {
            return Tri::No;
        }
    }
    Tri::Unknown
}
