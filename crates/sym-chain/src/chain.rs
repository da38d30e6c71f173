use std::collections::BTreeMap;

use num_bigint::BigUint;
use num_traits::One;
use sym_core::{PermId, RngHandle};
use sym_store::{PermSet, PermStore};

/// One level of the chain: a base point, the strong generators fixing every
/// earlier base point, and the transversal of the base point's orbit.
#[derive(Debug, Clone)]
struct Level {
    beta: u32,
    gens: Vec<PermId>,
    /// Orbit point -> coset representative u with u(beta) = point.
    transversal: BTreeMap<u32, PermId>,
    /// Orbit points in discovery order; `orbit[0] == beta`.
    orbit: Vec<u32>,
    /// Watermarks over the (orbit point, generator) rectangle whose
    /// Schreier generators have already been sifted.
    points_done: usize,
    gens_done: usize,
}

impl Level {
    fn new(beta: u32) -> Self {
        let mut transversal = BTreeMap::new();
        transversal.insert(beta, PermId::IDENTITY);
        Self {
            beta,
            gens: Vec::new(),
            transversal,
            orbit: vec![beta],
            points_done: 0,
            gens_done: 0,
        }
    }
}

/// Scratch buffers reused across the image-space sifts of one public call.
///
/// Sifting composes raw image rows instead of interning every intermediate
/// product; only residues that become strong generators and transversal
/// representatives ever reach the store.
#[derive(Debug, Default)]
struct Workspace {
    h: Vec<u32>,
    inv: Vec<u32>,
}

impl Workspace {
    fn load(&mut self, store: &PermStore, id: PermId) {
        self.h.clear();
        self.h.extend_from_slice(store.get(id));
    }

    /// Replaces `h` with `u⁻¹ ∘ h`.
    fn strip_rep(&mut self, store: &PermStore, u: PermId) {
        if u.is_identity() {
            return;
        }
        let row = store.get(u);
        self.inv.clear();
        self.inv.resize(row.len(), 0);
        for (k, &v) in row.iter().enumerate() {
            self.inv[v as usize] = k as u32;
        }
        for x in self.h.iter_mut() {
            *x = self.inv[*x as usize];
        }
    }

    fn is_identity(&self) -> bool {
        self.h.iter().enumerate().all(|(k, &v)| v == k as u32)
    }

    fn first_moved_point(&self) -> u32 {
        self.h
            .iter()
            .enumerate()
            .find(|(k, &v)| v != *k as u32)
            .map(|(k, _)| k as u32)
            .expect("residue must move a point")
    }
}

/// Base and strong generating set with transversals (Schreier-Sims).
///
/// The chain answers membership by sifting and maintains, after every
/// insertion, the strong generating property: the product of the
/// transversal sizes is exactly the order of the generated group. Orders
/// never decrease across insertions.
#[derive(Debug, Clone, Default)]
pub struct StabilizerChain {
    levels: Vec<Level>,
}

impl StabilizerChain {
    /// Creates the chain of the trivial group.
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Builds a chain by inserting every generator in input order.
    pub fn from_generators(store: &mut PermStore, generators: &[PermId]) -> Self {
        let mut chain = Self::new();
        for &g in generators {
            chain.insert(store, g);
        }
        chain
    }

    /// Number of levels (equals the base length).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The ordered base points.
    pub fn base(&self) -> Vec<u32> {
        self.levels.iter().map(|level| level.beta).collect()
    }

    /// The strong generators recorded at a level.
    pub fn strong_generators(&self, level: usize) -> &[PermId] {
        &self.levels[level].gens
    }

    /// The transversal at a level: orbit point -> coset representative.
    pub fn transversal(&self, level: usize) -> &BTreeMap<u32, PermId> {
        &self.levels[level].transversal
    }

    /// Order of the generated group: the product of the transversal sizes.
    pub fn order(&self) -> BigUint {
        let mut order = BigUint::one();
        for level in &self.levels {
            order *= BigUint::from(level.transversal.len() as u64);
        }
        order
    }

    /// Membership test by sifting. Never mutates the chain or the store.
    pub fn contains(&self, store: &PermStore, g: PermId) -> bool {
        if g.is_identity() {
            return true;
        }
        let mut ws = Workspace::default();
        ws.load(store, g);
        let level = self.sift(store, &mut ws, 0);
        level == self.levels.len() && ws.is_identity()
    }

    /// Sifts `g` and, when a non-identity residue remains, grows the chain
    /// to absorb it. Returns whether the group grew.
    ///
    /// The residue becomes a strong generator at every level whose base
    /// prefix it fixes; when it survives the whole chain, the base is
    /// extended by the first point it moves. Transversals are then
    /// re-extended and the Schreier generators of every touched level are
    /// sifted into the deeper chain until the strong generating property
    /// holds again.
    pub fn insert(&mut self, store: &mut PermStore, g: PermId) -> bool {
        let mut ws = Workspace::default();
        ws.load(store, g);
        self.insert_images(store, &mut ws, 0)
    }

    /// Draws one representative per transversal uniformly and multiplies
    /// them in base order.
    ///
    /// This samples every chain coset equally but is not uniform over the
    /// group; callers treat it as a pragmatic sampler.
    pub fn random_element(&self, store: &mut PermStore, rng: &mut RngHandle) -> PermId {
        let mut acc = PermId::IDENTITY;
        for level in &self.levels {
            let point = level.orbit[rng.index(level.orbit.len())];
            let rep = level.transversal[&point];
            acc = store.multiply(acc, rep);
        }
        acc
    }

    /// Enumerates every element of the generated group.
    ///
    /// Materialises the full group through the transversal factorisation;
    /// only sensible for small groups.
    pub fn elements(&self, store: &mut PermStore) -> PermSet {
        let mut ids = vec![PermId::IDENTITY];
        for level in self.levels.iter().rev() {
            let mut next = Vec::with_capacity(ids.len() * level.transversal.len());
            for &rep in level.transversal.values() {
                for &tail in &ids {
                    next.push(store.multiply(rep, tail));
                }
            }
            ids = next;
        }
        PermSet::from_ids(ids).into_group()
    }

    /// Sifts the workspace element from `start`, stripping one coset
    /// representative per level. Returns the level at which the element
    /// left the transversal, or the depth when it passed every level.
    fn sift(&self, store: &PermStore, ws: &mut Workspace, start: usize) -> usize {
        for (idx, level) in self.levels.iter().enumerate().skip(start) {
            let delta = ws.h[level.beta as usize];
            match level.transversal.get(&delta) {
                None => return idx,
                Some(&u) => ws.strip_rep(store, u),
            }
        }
        self.levels.len()
    }

    /// Core insertion: `ws.h` holds an element fixing the first `start`
    /// base points. Returns whether the group grew.
    fn insert_images(&mut self, store: &mut PermStore, ws: &mut Workspace, start: usize) -> bool {
        let stuck = self.sift(store, ws, start);
        if stuck == self.levels.len() && ws.is_identity() {
            return false;
        }
        let residue = store.intern_padded(&ws.h);
        if stuck == self.levels.len() {
            self.levels.push(Level::new(ws.first_moved_point()));
        }
        for level in &mut self.levels[start..=stuck] {
            level.gens.push(residue);
        }
        for idx in (start..=stuck).rev() {
            self.close_level(store, ws, idx);
        }
        true
    }

    /// Re-establishes the strong generating property at one level: extends
    /// the transversal to the full orbit under the current generators and
    /// sifts every unprocessed Schreier generator into the deeper chain.
    fn close_level(&mut self, store: &mut PermStore, ws: &mut Workspace, idx: usize) {
        loop {
            self.extend_transversal(store, idx);
            let level = &self.levels[idx];
            let points_total = level.orbit.len();
            let gens_total = level.gens.len();
            let points_done = level.points_done;
            let gens_done = level.gens_done;
            if points_done == points_total && gens_done == gens_total {
                return;
            }

            let mut pairs = Vec::new();
            for pi in 0..points_total {
                for gi in 0..gens_total {
                    if pi < points_done && gi < gens_done {
                        continue;
                    }
                    pairs.push((level.orbit[pi], level.gens[gi]));
                }
            }
            self.levels[idx].points_done = points_total;
            self.levels[idx].gens_done = gens_total;

            for (delta, s) in pairs {
                if self.load_schreier(store, ws, idx, delta, s) {
                    // deeper levels only; this level's orbit and
                    // generators are untouched by the recursion
                    self.insert_images(store, ws, idx + 1);
                }
            }
        }
    }

    /// Grows the orbit and transversal at a level until no generator maps
    /// an orbit point outside it. New representatives are `s·u_δ`.
    fn extend_transversal(&mut self, store: &mut PermStore, idx: usize) {
        let mut head = 0;
        while head < self.levels[idx].orbit.len() {
            let delta = self.levels[idx].orbit[head];
            head += 1;
            let u_delta = self.levels[idx].transversal[&delta];
            for gi in 0..self.levels[idx].gens.len() {
                let s = self.levels[idx].gens[gi];
                let gamma = store.image(s, delta);
                if !self.levels[idx].transversal.contains_key(&gamma) {
                    let rep = store.multiply(s, u_delta);
                    self.levels[idx].transversal.insert(gamma, rep);
                    self.levels[idx].orbit.push(gamma);
                }
            }
        }
    }

    /// Composes the Schreier generator `u_{s(δ)}⁻¹ · s · u_δ` of a level
    /// into the workspace. Returns false when it is the identity.
    fn load_schreier(
        &self,
        store: &PermStore,
        ws: &mut Workspace,
        idx: usize,
        delta: u32,
        s: PermId,
    ) -> bool {
        let level = &self.levels[idx];
        let u_delta = level.transversal[&delta];
        let gamma = store.image(s, delta);
        let u_gamma = level.transversal[&gamma];

        let row_s = store.get(s);
        ws.h.clear();
        if u_delta.is_identity() {
            ws.h.extend_from_slice(row_s);
        } else {
            let row_ud = store.get(u_delta);
            ws.h.extend(row_ud.iter().map(|&v| row_s[v as usize]));
        }
        debug_assert_eq!(ws.h.len(), store.degree());
        ws.strip_rep(store, u_gamma);
        !ws.is_identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sym_store::parse_cycles;

    #[test]
    fn trivial_chain() {
        let store = PermStore::new();
        let chain = StabilizerChain::new();
        assert_eq!(chain.order(), BigUint::one());
        assert!(chain.contains(&store, PermId::IDENTITY));
    }

    #[test]
    fn single_generator_order_is_element_order() {
        let mut store = PermStore::new();
        // (1 2)(3 4 5) has order lcm(2, 3) = 6
        let g = store
            .register(&parse_cycles("(1 2)(3 4 5)").unwrap())
            .unwrap();
        let chain = StabilizerChain::from_generators(&mut store, &[g]);
        assert_eq!(chain.order(), BigUint::from(6u32));
        let g2 = store.multiply(g, g);
        assert!(chain.contains(&store, g2));
    }

    #[test]
    fn redundant_insertions_do_not_grow() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let mut chain = StabilizerChain::from_generators(&mut store, &[a, b]);
        assert_eq!(chain.order(), BigUint::from(6u32));
        let ab = store.multiply(a, b);
        assert!(!chain.insert(&mut store, ab));
        assert!(!chain.insert(&mut store, a));
        assert_eq!(chain.order(), BigUint::from(6u32));
    }
}
