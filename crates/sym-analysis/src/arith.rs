use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use sym_core::PermId;
use sym_store::PermStore;

/// Largest order accepted by the native primality test; beyond it the
/// simplicity heuristic answers `Unknown` instead of trial-dividing.
pub(crate) const SMALL_PRIME_LIMIT: u64 = 1 << 40;

/// Deterministic trial-division primality for the small-prime range.
pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Order of a permutation: the lcm of its cycle lengths.
pub(crate) fn element_order(store: &PermStore, id: PermId) -> u64 {
    let image = store.get(id);
    let mut seen = vec![false; image.len()];
    let mut order = 1u64;
    for start in 0..image.len() {
        if seen[start] {
            continue;
        }
        let mut length = 0u64;
        let mut point = start;
        loop {
            seen[point] = true;
            length += 1;
            point = image[point] as usize;
            if point == start {
                break;
            }
        }
        order = order.lcm(&length);
    }
    order
}

/// Interned power `g^e` by square-and-multiply.
pub(crate) fn power(store: &mut PermStore, g: PermId, mut e: u64) -> PermId {
    let mut result = PermId::IDENTITY;
    let mut base = g;
    while e > 0 {
        if e & 1 == 1 {
            result = store.multiply(result, base);
        }
        base = store.multiply(base, base);
        e >>= 1;
    }
    result
}

/// Splits `order` as `p^a · q` with `p` not dividing `q`; returns `(p^a, a)`.
pub(crate) fn p_power_part(order: &BigUint, p: u64) -> (BigUint, u32) {
    let p_big = BigUint::from(p);
    let mut rest = order.clone();
    let mut part = BigUint::one();
    let mut exponent = 0u32;
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&p_big);
        if !remainder.is_zero() {
            break;
        }
        rest = quotient;
        part *= &p_big;
        exponent += 1;
    }
    (part, exponent)
}

/// Returns whether `order` is a power of `p` (including `p^0 = 1`).
pub(crate) fn is_p_power(order: &BigUint, p: u64) -> bool {
    let p_big = BigUint::from(p);
    let mut rest = order.clone();
    while rest > BigUint::one() {
        let (quotient, remainder) = rest.div_rem(&p_big);
        if !remainder.is_zero() {
            return false;
        }
        rest = quotient;
    }
    rest.is_one()
}
