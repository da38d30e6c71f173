use sym_core::{ErrorInfo, PermId, SymError};

use crate::cycles::format_cycles;

const NIL: i32 = -1;

/// Interning arena for permutations on `{0, …, degree-1}`.
///
/// The store owns two growable buffers: a dense image table holding the
/// images of every interned permutation consecutively per ID, and a radix
/// trie over image values that maps each permutation to its stable ID. A
/// trie node occupies `degree + 1` slots: the ID slot followed by one child
/// offset per image value, with `-1` as the null sentinel.
///
/// The degree only ever grows. Registering a permutation longer than the
/// current degree triggers a stop-the-world upgrade: the image table is
/// re-strided with fixed-point padding and the trie is rebuilt at the new
/// depth. IDs survive upgrades; raw image views do not.
///
/// The identity permutation is interned at construction and always owns
/// ID 0. Stores are plain owned values; tests needing isolation construct
/// their own instead of sharing a process-wide instance.
#[derive(Debug, Clone)]
pub struct PermStore {
    degree: usize,
    count: usize,
    images: Vec<u32>,
    trie: Vec<i32>,
    scratch: Vec<u32>,
}

impl PermStore {
    /// Creates an empty store holding only the identity permutation.
    pub fn new() -> Self {
        let mut store = Self {
            degree: 0,
            count: 0,
            images: Vec::new(),
            trie: vec![NIL],
            scratch: Vec::new(),
        };
        let id = store.intern_padded(&[]);
        debug_assert!(id.is_identity());
        store
    }

    /// Current global degree N.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of interned permutations, identity included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Interns a permutation given by its image sequence and returns its ID.
    ///
    /// Inputs shorter than the current degree are implicitly extended with
    /// fixed points; longer inputs upgrade the degree first. Registration is
    /// idempotent: the same permutation always yields the same ID.
    pub fn register(&mut self, image: &[u32]) -> Result<PermId, SymError> {
        let target = image.len().max(self.degree);
        self.validate(image, target)?;
        if image.len() > self.degree {
            self.upgrade(image.len());
        }
        Ok(self.intern_padded(image))
    }

    /// Returns the image row of an interned permutation.
    ///
    /// The view is invalidated by any subsequent degree upgrade; the ID
    /// stays valid. Panics when the ID did not come from this store.
    pub fn get(&self, id: PermId) -> &[u32] {
        let row = id.as_raw() as usize;
        &self.images[row * self.degree..(row + 1) * self.degree]
    }

    /// Returns the image of a single point under an interned permutation.
    ///
    /// Points at or beyond the degree are fixed by convention.
    pub fn image(&self, id: PermId, point: u32) -> u32 {
        if (point as usize) < self.degree {
            self.get(id)[point as usize]
        } else {
            point
        }
    }

    /// Composes two permutations: `(A·B)(x) = A(B(x))`.
    pub fn multiply(&mut self, a: PermId, b: PermId) -> PermId {
        if a.is_identity() {
            return b;
        }
        if b.is_identity() {
            return a;
        }
        let mut buf = std::mem::take(&mut self.scratch);
        buf.clear();
        {
            let row_a = self.get(a);
            let row_b = self.get(b);
            buf.extend(row_b.iter().map(|&v| row_a[v as usize]));
        }
        let id = self.intern_padded(&buf);
        self.scratch = buf;
        id
    }

    /// Interns the inverse of a permutation: `c[a[k]] = k`.
    pub fn inverse(&mut self, a: PermId) -> PermId {
        if a.is_identity() {
            return a;
        }
        let mut buf = std::mem::take(&mut self.scratch);
        buf.clear();
        buf.resize(self.degree, 0);
        for (k, &v) in self.get(a).iter().enumerate() {
            buf[v as usize] = k as u32;
        }
        let id = self.intern_padded(&buf);
        self.scratch = buf;
        id
    }

    /// Conjugation `g·h·g⁻¹`.
    pub fn conjugate(&mut self, g: PermId, h: PermId) -> PermId {
        let gh = self.multiply(g, h);
        let g_inv = self.inverse(g);
        self.multiply(gh, g_inv)
    }

    /// Commutator `a⁻¹·b⁻¹·a·b`.
    pub fn commutator(&mut self, a: PermId, b: PermId) -> PermId {
        let a_inv = self.inverse(a);
        let b_inv = self.inverse(b);
        let left = self.multiply(a_inv, b_inv);
        let right = self.multiply(a, b);
        self.multiply(left, right)
    }

    /// Renders the permutation in disjoint 1-based cycle notation.
    ///
    /// Fixed points are omitted; the identity renders as `"()"`.
    pub fn cycles(&self, id: PermId) -> String {
        format_cycles(self, id)
    }

    /// Replaces the store with a fresh one. Every outstanding ID becomes
    /// invalid.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Interns a permutation known to be valid at the current degree.
    ///
    /// Inputs shorter than the degree are treated as fixed beyond their
    /// length. Used internally by composition and by the chain crate for
    /// residues assembled in scratch buffers.
    pub fn intern_padded(&mut self, image: &[u32]) -> PermId {
        let stride = self.degree + 1;
        let mut node = 0usize;
        for i in 0..self.degree {
            let value = if i < image.len() { image[i] } else { i as u32 } as usize;
            let slot = node + 1 + value;
            let child = self.trie[slot];
            node = if child == NIL {
                let fresh = self.trie.len();
                self.trie.resize(fresh + stride, NIL);
                self.trie[slot] = fresh as i32;
                fresh
            } else {
                child as usize
            };
        }
        if self.trie[node] != NIL {
            return PermId::from_raw(self.trie[node] as u32);
        }
        let id = self.count as u32;
        self.trie[node] = id as i32;
        for i in 0..self.degree {
            let value = if i < image.len() { image[i] } else { i as u32 };
            self.images.push(value);
        }
        self.count += 1;
        PermId::from_raw(id)
    }

    /// Checks that `image`, padded with fixed points up to `target`, is a
    /// bijection on `{0, …, target-1}`.
    fn validate(&self, image: &[u32], target: usize) -> Result<(), SymError> {
        let mut seen = vec![false; target];
        for i in 0..target {
            let value = if i < image.len() { image[i] } else { i as u32 } as usize;
            if value >= target {
                return Err(SymError::Input(
                    ErrorInfo::new("image-out-of-range", "image value exceeds the degree")
                        .with_context("position", i)
                        .with_context("value", value)
                        .with_context("degree", target),
                ));
            }
            if seen[value] {
                return Err(SymError::Input(
                    ErrorInfo::new("image-not-injective", "image value occurs twice")
                        .with_context("position", i)
                        .with_context("value", value),
                ));
            }
            seen[value] = true;
        }
        Ok(())
    }

    /// Grows the degree, re-strides the image table with fixed-point
    /// padding, and rebuilds the trie at the new depth. IDs are preserved.
    fn upgrade(&mut self, new_degree: usize) {
        debug_assert!(new_degree > self.degree);
        let old_degree = self.degree;
        let mut images = Vec::with_capacity(self.count * new_degree);
        for row in 0..self.count {
            images.extend_from_slice(&self.images[row * old_degree..(row + 1) * old_degree]);
            images.extend((old_degree..new_degree).map(|k| k as u32));
        }
        self.images = images;
        self.degree = new_degree;

        let stride = new_degree + 1;
        self.trie.clear();
        self.trie.resize(stride, NIL);
        for row in 0..self.count {
            let mut node = 0usize;
            for i in 0..new_degree {
                let value = self.images[row * new_degree + i] as usize;
                let slot = node + 1 + value;
                let child = self.trie[slot];
                node = if child == NIL {
                    let fresh = self.trie.len();
                    self.trie.resize(fresh + stride, NIL);
                    self.trie[slot] = fresh as i32;
                    fresh
                } else {
                    child as usize
                };
            }
            self.trie[node] = row as i32;
        }
    }
}

impl Default for PermStore {
    fn default() -> Self {
        Self::new()
    }
}
