use crate::set::PermSet;
use crate::store::PermStore;

/// Generates the full group from a finite generating set.
///
/// Starts from `S ∪ S⁻¹ ∪ {e}` and multiplies by the generators until the
/// size is stationary. The fixed point is closed under multiplication and
/// inversion and contains the identity, so the result is flagged as a
/// verified group. Intended for small groups; use a stabiliser chain when
/// only order and membership are needed.
pub fn generate(store: &mut PermStore, generators: &PermSet) -> PermSet {
    let mut group = generators
        .union(&generators.inverse(store))
        .union(&PermSet::identity());
    loop {
        let grown = group.union(&group.product(store, generators));
        if grown.len() == group.len() {
            break;
        }
        group = grown;
    }
    group.into_group()
}
