use num_bigint::BigUint;
use num_traits::One;
use sym_chain::StabilizerChain;
use sym_core::PermId;
use sym_store::{PermSet, PermStore};

/// A group given by generators, with a lazily built stabiliser chain.
///
/// Generators are kept in input order so that analyses walking them (the
/// fundamental/redundant classification in particular) are deterministic
/// for a given input. The chain is constructed on first use and shared by
/// every subsequent order or membership query.
#[derive(Debug, Clone)]
pub struct Group {
    gens: Vec<PermId>,
    chain: Option<StabilizerChain>,
}

impl Group {
    /// Builds a group from generator IDs, preserving their order.
    pub fn from_generators(gens: impl IntoIterator<Item = PermId>) -> Self {
        Self {
            gens: gens.into_iter().collect(),
            chain: None,
        }
    }

    /// Builds a group from a permutation set, walking it in ascending order.
    pub fn from_set(set: &PermSet) -> Self {
        Self::from_generators(set.iter())
    }

    /// The trivial group.
    pub fn trivial() -> Self {
        Self {
            gens: Vec::new(),
            chain: Some(StabilizerChain::new()),
        }
    }

    pub(crate) fn from_parts(gens: Vec<PermId>, chain: StabilizerChain) -> Self {
        Self {
            gens,
            chain: Some(chain),
        }
    }

    /// The generators in input order.
    pub fn generators(&self) -> &[PermId] {
        &self.gens
    }

    /// The stabiliser chain, built on first call.
    pub fn chain(&mut self, store: &mut PermStore) -> &StabilizerChain {
        self.chain
            .get_or_insert_with(|| StabilizerChain::from_generators(store, &self.gens))
    }

    /// Group order via the chain.
    pub fn order(&mut self, store: &mut PermStore) -> BigUint {
        self.chain(store).order()
    }

    /// Membership via sifting.
    pub fn contains(&mut self, store: &mut PermStore, id: PermId) -> bool {
        self.chain(store);
        self.chain.as_ref().unwrap().contains(store, id)
    }

    /// Returns whether the group is trivial.
    pub fn is_trivial(&mut self, store: &mut PermStore) -> bool {
        self.order(store).is_one()
    }

    /// A finitely generated group is abelian iff its generators pairwise
    /// commute; checked positionwise over image rows without interning.
    pub fn is_abelian(&self, store: &PermStore) -> bool {
        let degree = store.degree();
        for (i, &a) in self.gens.iter().enumerate() {
            for &b in &self.gens[i + 1..] {
                let row_a = store.get(a);
                let row_b = store.get(b);
                for k in 0..degree {
                    if row_a[row_b[k] as usize] != row_b[row_a[k] as usize] {
                        return false;
                    }
                }
            }
        }
        true
    }
}
