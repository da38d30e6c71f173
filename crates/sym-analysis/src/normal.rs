use sym_chain::StabilizerChain;
use sym_core::PermId;
use sym_store::PermStore;

use crate::group::Group;

/// Returns whether every generator of `h` lies in `g`.
pub fn is_subgroup(store: &mut PermStore, g: &mut Group, h: &Group) -> bool {
    h.generators().iter().all(|&gen| g.contains(store, gen))
}

/// Returns whether `n` is normalised by `g`: every conjugate of a
/// generator of `n` by a generator of `g` must sift back into `n`.
pub fn is_normal(store: &mut PermStore, g: &Group, n: &mut Group) -> bool {
    let n_gens: Vec<PermId> = n.generators().to_vec();
    for &outer in g.generators() {
        for &inner in &n_gens {
            let conjugate = store.conjugate(outer, inner);
            if !n.contains(store, conjugate) {
                return false;
            }
        }
    }
    true
}

/// Smallest normal subgroup of `g` containing `seed`.
///
/// A queue seeded with the given IDs is drained breadth-first: each popped
/// element is conjugated by every generator of `g`, and conjugates not yet
/// captured by the accumulating chain are inserted and enqueued. The queue
/// is an array with a moving head; nothing is ever dequeued.
pub fn normal_closure(store: &mut PermStore, g: &Group, seed: &[PermId]) -> Group {
    let mut chain = StabilizerChain::new();
    let mut closure_gens = Vec::new();
    let mut queue: Vec<PermId> = Vec::with_capacity(seed.len());
    for &s in seed {
        if chain.insert(store, s) {
            closure_gens.push(s);
        }
        queue.push(s);
    }

    let mut head = 0;
    while head < queue.len() {
        let element = queue[head];
        head += 1;
        for &gen in g.generators() {
            let conjugate = store.conjugate(gen, element);
            if !chain.contains(store, conjugate) {
                chain.insert(store, conjugate);
                closure_gens.push(conjugate);
                queue.push(conjugate);
            }
        }
    }
    Group::from_parts(closure_gens, chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use sym_store::parse_cycles;

    fn s3(store: &mut PermStore) -> Group {
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        Group::from_generators([a, b])
    }

    #[test]
    fn rotation_subgroup_is_normal_in_s3() {
        let mut store = PermStore::new();
        let mut g = s3(&mut store);
        let rot = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let mut n = Group::from_generators([rot]);
        assert!(is_subgroup(&mut store, &mut g, &n));
        assert!(is_normal(&mut store, &g, &mut n));

        let swap = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let mut reflections = Group::from_generators([swap]);
        assert!(!is_normal(&mut store, &g, &mut reflections));
    }

    #[test]
    fn normal_closure_is_idempotent() {
        let mut store = PermStore::new();
        let g = s3(&mut store);
        let swap = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();

        let mut first = normal_closure(&mut store, &g, &[swap]);
        // the conjugates of a transposition generate all of S3
        assert_eq!(first.order(&mut store), BigUint::from(6u32));

        let seed: Vec<PermId> = first.generators().to_vec();
        let mut second = normal_closure(&mut store, &g, &seed);
        assert_eq!(second.order(&mut store), first.order(&mut store));
    }
}
