use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sym_core::{intset, ErrorInfo, PermId, SymError};

use crate::store::PermStore;

/// A finite set of interned permutations.
///
/// IDs are kept ascending and unique. The `is_group` flag records whether
/// the set has been verified to be closed under the group operations; set
/// algebra clears it conservatively whenever closure is no longer
/// guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermSet {
    ids: Vec<PermId>,
    is_group: bool,
}

impl PermSet {
    /// Builds a set from arbitrary IDs, normalising to ascending unique order.
    pub fn from_ids(ids: impl IntoIterator<Item = PermId>) -> Self {
        let raw = intset::sort_unique(ids.into_iter().map(|id| id.as_raw()).collect());
        Self {
            ids: raw.into_iter().map(PermId::from_raw).collect(),
            is_group: false,
        }
    }

    /// Builds a set from IDs the caller certifies to be ascending and unique.
    pub fn from_sorted(ids: Vec<PermId>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        Self {
            ids,
            is_group: false,
        }
    }

    /// The singleton `{identity}`, trivially a group.
    pub fn identity() -> Self {
        Self {
            ids: vec![PermId::IDENTITY],
            is_group: true,
        }
    }

    /// Number of permutations in the set.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The IDs in ascending order.
    pub fn ids(&self) -> &[PermId] {
        &self.ids
    }

    /// Indexed access in ascending ID order.
    pub fn get(&self, index: usize) -> PermId {
        self.ids[index]
    }

    /// Iterates the IDs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PermId> + '_ {
        self.ids.iter().copied()
    }

    /// Whether the set has been verified to be a group.
    pub fn is_group(&self) -> bool {
        self.is_group
    }

    /// Marks the set as a verified group.
    ///
    /// Callers must only invoke this when closure under multiplication and
    /// inversion has been established elsewhere, e.g. by [`generate`]
    /// (crate::generate) or by enumerating a stabiliser chain.
    pub fn into_group(mut self) -> Self {
        self.is_group = true;
        self
    }

    /// Membership by binary search.
    pub fn contains(&self, id: PermId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Elementwise product `{a·b | a ∈ self, b ∈ other}`.
    ///
    /// The outer loop runs over the smaller operand so the larger operand's
    /// image rows stay hot in cache. The result is not a group in general.
    pub fn product(&self, store: &mut PermStore, other: &PermSet) -> PermSet {
        let mut raw = Vec::with_capacity(self.len().saturating_mul(other.len()));
        if self.len() <= other.len() {
            for &a in &self.ids {
                for &b in &other.ids {
                    raw.push(store.multiply(a, b).as_raw());
                }
            }
        } else {
            for &b in &other.ids {
                for &a in &self.ids {
                    raw.push(store.multiply(a, b).as_raw());
                }
            }
        }
        let raw = intset::sort_unique(raw);
        PermSet {
            ids: raw.into_iter().map(PermId::from_raw).collect(),
            is_group: false,
        }
    }

    /// Elementwise inverse. A verified group is closed under inversion, so
    /// the flag survives.
    pub fn inverse(&self, store: &mut PermStore) -> PermSet {
        let raw = intset::sort_unique(
            self.ids.iter().map(|&id| store.inverse(id).as_raw()).collect(),
        );
        PermSet {
            ids: raw.into_iter().map(PermId::from_raw).collect(),
            is_group: self.is_group,
        }
    }

    /// Set union over IDs.
    pub fn union(&self, other: &PermSet) -> PermSet {
        let raw = intset::union(&self.raw_ids(), &other.raw_ids());
        PermSet {
            ids: raw.into_iter().map(PermId::from_raw).collect(),
            is_group: false,
        }
    }

    /// Set intersection over IDs. The intersection of two groups is a group.
    pub fn intersect(&self, other: &PermSet) -> PermSet {
        let raw = intset::intersect(&self.raw_ids(), &other.raw_ids());
        PermSet {
            ids: raw.into_iter().map(PermId::from_raw).collect(),
            is_group: self.is_group && other.is_group,
        }
    }

    /// Set difference over IDs.
    pub fn difference(&self, other: &PermSet) -> PermSet {
        let raw = intset::difference(&self.raw_ids(), &other.raw_ids());
        PermSet {
            ids: raw.into_iter().map(PermId::from_raw).collect(),
            is_group: false,
        }
    }

    /// Returns whether every element of `other` lies in this set.
    pub fn superset_of(&self, other: &PermSet) -> bool {
        let mut i = 0;
        for &id in &other.ids {
            while i < self.ids.len() && self.ids[i] < id {
                i += 1;
            }
            if i == self.ids.len() || self.ids[i] != id {
                return false;
            }
        }
        true
    }

    /// Returns whether every element of this set lies in `other`.
    pub fn subset_of(&self, other: &PermSet) -> bool {
        other.superset_of(self)
    }

    /// Checks that every pair of elements commutes, comparing product
    /// images positionwise without interning anything.
    pub fn is_abelian(&self, store: &PermStore) -> bool {
        let degree = store.degree();
        for (&a, &b) in self.ids.iter().tuple_combinations() {
            let row_a = store.get(a);
            let row_b = store.get(b);
            for k in 0..degree {
                if row_a[row_b[k] as usize] != row_b[row_a[k] as usize] {
                    return false;
                }
            }
        }
        true
    }

    /// The orbit of a point under the set, as an ascending unique sequence.
    pub fn orbit(&self, store: &PermStore, point: u32) -> Result<Vec<u32>, SymError> {
        let degree = store.degree();
        if point as usize >= degree {
            return Err(SymError::Bounds(
                ErrorInfo::new("orbit-point", "point lies outside the current degree")
                    .with_context("point", point)
                    .with_context("degree", degree),
            ));
        }
        let mut seen = vec![false; degree];
        seen[point as usize] = true;
        let mut queue = vec![point];
        let mut head = 0;
        while head < queue.len() {
            let p = queue[head];
            head += 1;
            for &id in &self.ids {
                let q = store.get(id)[p as usize];
                if !seen[q as usize] {
                    seen[q as usize] = true;
                    queue.push(q);
                }
            }
        }
        Ok((0..degree as u32).filter(|&p| seen[p as usize]).collect())
    }

    /// Decomposes this set into right cosets of `h`.
    ///
    /// Elements are walked in ascending ID order; the first unvisited
    /// element opens the coset `h·g`, whose members are then marked
    /// visited. Cosets are returned in encounter order.
    pub fn right_cosets(&self, store: &mut PermStore, h: &PermSet) -> Vec<PermSet> {
        let mut visited = vec![false; self.len()];
        let mut cosets = Vec::new();
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let rep = PermSet::from_sorted(vec![self.ids[start]]);
            let coset = h.product(store, &rep);
            for id in coset.iter() {
                if let Ok(idx) = self.ids.binary_search(&id) {
                    visited[idx] = true;
                }
            }
            cosets.push(coset);
        }
        cosets
    }

    fn raw_ids(&self) -> Vec<u32> {
        self.ids.iter().map(|id| id.as_raw()).collect()
    }
}

impl PartialEq for PermSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl Eq for PermSet {}
