use sym_chain::StabilizerChain;
use sym_core::{ErrorInfo, PermId, RngHandle, SymError};
use sym_store::PermStore;

use crate::arith::{element_order, is_p_power, is_prime, p_power_part, power};
use crate::group::Group;
use crate::opts::AnalysisOpts;

/// Finds a Sylow p-subgroup of `g` by randomised greedy accumulation.
///
/// The target order is the full p-power part of `|G|`. Starting from the
/// trivial subgroup, random elements are drawn from the chain, reduced to
/// their p-parts (`g^(|g| / p^a)` where `p^a` exhausts `p` in `|g|`), and
/// accepted whenever the extended subgroup is still a p-group. A restart
/// clears the accumulator after `sylow_trials` draws without reaching the
/// target; exhausting `sylow_restarts` restarts is a limit error.
pub fn sylow_subgroup(
    store: &mut PermStore,
    g: &mut Group,
    p: u64,
    opts: &AnalysisOpts,
    rng: &mut RngHandle,
) -> Result<Group, SymError> {
    if !is_prime(p) {
        return Err(SymError::Input(
            ErrorInfo::new("sylow-prime", "p must be a prime").with_context("p", p),
        ));
    }
    let order = g.order(store);
    let (target, exponent) = p_power_part(&order, p);
    if exponent == 0 {
        return Ok(Group::trivial());
    }

    g.chain(store);
    for _ in 0..opts.sylow_restarts {
        let mut accumulated = StabilizerChain::new();
        let mut accumulated_gens: Vec<PermId> = Vec::new();
        for _ in 0..opts.sylow_trials {
            if accumulated.order() == target {
                return Ok(Group::from_parts(accumulated_gens, accumulated));
            }
            let sample = {
                // the chain was built above; rebuilding is a no-op
                let chain = g.chain(store);
                chain.random_element(store, rng)
            };
            let sample_order = element_order(store, sample);
            let (p_power, p_exponent) = split_u64(sample_order, p);
            if p_exponent == 0 {
                continue;
            }
            let p_part = power(store, sample, sample_order / p_power);
            if accumulated.contains(store, p_part) {
                continue;
            }
            let mut extended = accumulated.clone();
            extended.insert(store, p_part);
            if is_p_power(&extended.order(), p) {
                accumulated = extended;
                accumulated_gens.push(p_part);
            }
        }
        if accumulated.order() == target {
            return Ok(Group::from_parts(accumulated_gens, accumulated));
        }
    }
    Err(SymError::Limit(
        ErrorInfo::new("sylow-budget", "restart budget exhausted before reaching the target")
            .with_context("p", p)
            .with_context("target", &target)
            .with_hint("raise sylow_trials or sylow_restarts in AnalysisOpts"),
    ))
}

/// Splits `n` as `p^a · q` with `p` not dividing `q`; returns `(p^a, a)`.
fn split_u64(mut n: u64, p: u64) -> (u64, u32) {
    let mut part = 1u64;
    let mut exponent = 0u32;
    while n % p == 0 {
        n /= p;
        part *= p;
        exponent += 1;
    }
    (part, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use sym_store::parse_cycles;

    #[test]
    fn sylow_of_s4() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3 4)").unwrap()).unwrap();
        let mut g = Group::from_generators([a, b]);
        let mut rng = RngHandle::from_seed(11);

        let mut p2 = sylow_subgroup(&mut store, &mut g, 2, &AnalysisOpts::default(), &mut rng)
            .unwrap();
        assert_eq!(p2.order(&mut store), BigUint::from(8u32));

        let mut p3 = sylow_subgroup(&mut store, &mut g, 3, &AnalysisOpts::default(), &mut rng)
            .unwrap();
        assert_eq!(p3.order(&mut store), BigUint::from(3u32));

        let mut p5 = sylow_subgroup(&mut store, &mut g, 5, &AnalysisOpts::default(), &mut rng)
            .unwrap();
        assert!(p5.is_trivial(&mut store));
    }

    #[test]
    fn composite_p_is_rejected() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let mut g = Group::from_generators([a]);
        let mut rng = RngHandle::from_seed(11);
        let err = sylow_subgroup(&mut store, &mut g, 6, &AnalysisOpts::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, SymError::Input(_)));
    }
}
