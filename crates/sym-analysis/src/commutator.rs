use num_bigint::BigUint;
use num_traits::One;
use sym_core::{ErrorInfo, SymError};
use sym_store::PermStore;

use crate::group::Group;
use crate::normal::normal_closure;
use crate::opts::AnalysisOpts;

/// The derived subgroup `[G, G]`: the normal closure in `g` of the
/// commutators of all ordered generator pairs.
pub fn commutator_subgroup(store: &mut PermStore, g: &Group) -> Group {
    let gens = g.generators();
    let mut seeds = Vec::new();
    for (i, &a) in gens.iter().enumerate() {
        for (j, &b) in gens.iter().enumerate() {
            if i == j {
                continue;
            }
            let c = store.commutator(a, b);
            if !c.is_identity() {
                seeds.push(c);
            }
        }
    }
    normal_closure(store, g, &seeds)
}

/// The mixed commutator `[A, B]`: the normal closure in `⟨A ∪ B⟩` of the
/// commutators of all cross pairs of generators.
pub fn mixed_commutator(store: &mut PermStore, a: &Group, b: &Group) -> Group {
    let mut seeds = Vec::new();
    for &x in a.generators() {
        for &y in b.generators() {
            let c = store.commutator(x, y);
            if !c.is_identity() {
                seeds.push(c);
            }
        }
    }
    let ambient = Group::from_generators(
        a.generators().iter().chain(b.generators()).copied(),
    );
    normal_closure(store, &ambient, &seeds)
}

/// The derived series `G ⊵ [G,G] ⊵ [[G,G],[G,G]] ⊵ …`.
///
/// The series is strict: it ends at the first trivial term, or at the last
/// strictly smaller term when the order stabilises (a perfect tail is not
/// repeated). Exceeding `derived_depth` is a limit error.
pub fn derived_series(
    store: &mut PermStore,
    g: &mut Group,
    opts: &AnalysisOpts,
) -> Result<Vec<Group>, SymError> {
    let mut current_order = g.order(store);
    let mut series = vec![g.clone()];
    for _ in 0..opts.derived_depth {
        let mut next = commutator_subgroup(store, series.last().unwrap());
        let next_order = next.order(store);
        if next_order == current_order {
            return Ok(series);
        }
        let reached_identity = next_order.is_one();
        series.push(next);
        if reached_identity {
            return Ok(series);
        }
        current_order = next_order;
    }
    Err(depth_error("derived-depth", opts.derived_depth))
}

/// The lower central series `G ⊵ [G,G] ⊵ [[G,G],G] ⊵ …`, strict like the
/// derived series. Exceeding `central_depth` is a limit error.
pub fn lower_central_series(
    store: &mut PermStore,
    g: &mut Group,
    opts: &AnalysisOpts,
) -> Result<Vec<Group>, SymError> {
    let mut current_order = g.order(store);
    let mut series = vec![g.clone()];
    for _ in 0..opts.central_depth {
        let mut next = mixed_commutator(store, series.last().unwrap(), g);
        let next_order = next.order(store);
        if next_order == current_order {
            return Ok(series);
        }
        let reached_identity = next_order.is_one();
        series.push(next);
        if reached_identity {
            return Ok(series);
        }
        current_order = next_order;
    }
    Err(depth_error("central-depth", opts.central_depth))
}

/// A group is solvable iff its derived series reaches the trivial group.
pub fn is_solvable(
    store: &mut PermStore,
    g: &mut Group,
    opts: &AnalysisOpts,
) -> Result<bool, SymError> {
    let mut series = derived_series(store, g, opts)?;
    Ok(series.last_mut().unwrap().order(store).is_one())
}

/// A group is nilpotent iff its lower central series reaches the trivial
/// group. Nilpotent groups are solvable.
pub fn is_nilpotent(
    store: &mut PermStore,
    g: &mut Group,
    opts: &AnalysisOpts,
) -> Result<bool, SymError> {
    let mut series = lower_central_series(store, g, opts)?;
    Ok(series.last_mut().unwrap().order(store).is_one())
}

/// A group is perfect iff it equals its derived subgroup.
pub fn is_perfect(store: &mut PermStore, g: &mut Group) -> bool {
    let order = g.order(store);
    let mut derived = commutator_subgroup(store, g);
    derived.order(store) == order
}

/// Collects the orders along a series, for invariant comparison.
pub(crate) fn series_orders(store: &mut PermStore, series: &mut [Group]) -> Vec<BigUint> {
    series.iter_mut().map(|g| g.order(store)).collect()
}

fn depth_error(code: &str, depth: usize) -> SymError {
    SymError::Limit(
        ErrorInfo::new(code, "series did not stabilise within the safety depth")
            .with_context("depth", depth)
            .with_hint("raise the series depth in AnalysisOpts"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sym_store::parse_cycles;

    #[test]
    fn s3_derived_series_reaches_identity_in_two_steps() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let mut g = Group::from_generators([a, b]);

        let mut series = derived_series(&mut store, &mut g, &AnalysisOpts::default()).unwrap();
        let orders = series_orders(&mut store, &mut series);
        let expected: Vec<BigUint> =
            [6u32, 3, 1].iter().map(|&n| BigUint::from(n)).collect();
        assert_eq!(orders, expected);
        assert!(is_solvable(&mut store, &mut g, &AnalysisOpts::default()).unwrap());
        assert!(!is_nilpotent(&mut store, &mut g, &AnalysisOpts::default()).unwrap());
    }

    #[test]
    fn abelian_groups_are_nilpotent() {
        let mut store = PermStore::new();
        let r = store.register(&parse_cycles("(1 2 3 4)").unwrap()).unwrap();
        let mut g = Group::from_generators([r]);
        assert!(is_nilpotent(&mut store, &mut g, &AnalysisOpts::default()).unwrap());
        assert!(!is_perfect(&mut store, &mut g));
    }
}
