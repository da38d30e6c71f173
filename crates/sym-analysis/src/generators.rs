use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sym_chain::StabilizerChain;
use sym_core::PermId;
use sym_store::PermStore;

/// Classification of one candidate generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorRole {
    /// The candidate enlarged the group generated by its predecessors.
    Fundamental,
    /// The candidate was already contained in the accumulated group.
    Redundant,
}

/// Per-candidate verdict in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorEntry {
    /// The candidate ID.
    pub id: PermId,
    /// Whether it extended the accumulated group.
    pub role: GeneratorRole,
}

/// Summary of a greedy generator scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorReport {
    /// Verdicts in the order the candidates were supplied.
    pub entries: Vec<GeneratorEntry>,
    /// Number of fundamental candidates.
    pub fundamental: usize,
    /// Order of the group generated by all candidates.
    pub order: BigUint,
}

/// Greedily inserts the candidates into an accumulating chain, in input
/// order, classifying each as fundamental or redundant. The walk order is
/// part of the contract: the same input always yields the same verdicts.
pub fn analyze_generators(store: &mut PermStore, candidates: &[PermId]) -> GeneratorReport {
    let mut chain = StabilizerChain::new();
    let mut entries = Vec::with_capacity(candidates.len());
    let mut fundamental = 0;
    for &id in candidates {
        let role = if chain.insert(store, id) {
            fundamental += 1;
            GeneratorRole::Fundamental
        } else {
            GeneratorRole::Redundant
        };
        entries.push(GeneratorEntry { id, role });
    }
    GeneratorReport {
        entries,
        fundamental,
        order: chain.order(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sym_store::parse_cycles;

    #[test]
    fn classification_follows_input_order() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let b = store.register(&parse_cycles("(1 2 3)").unwrap()).unwrap();
        let ab = store.multiply(a, b);

        let report = analyze_generators(&mut store, &[a, b, ab, a]);
        let roles: Vec<GeneratorRole> = report.entries.iter().map(|e| e.role).collect();
        assert_eq!(
            roles,
            vec![
                GeneratorRole::Fundamental,
                GeneratorRole::Fundamental,
                GeneratorRole::Redundant,
                GeneratorRole::Redundant,
            ]
        );
        assert_eq!(report.fundamental, 2);
        assert_eq!(report.order, BigUint::from(6u32));

        // the product first: now it is fundamental and `b` becomes redundant
        let flipped = analyze_generators(&mut store, &[ab, b, a]);
        assert_eq!(flipped.entries[0].role, GeneratorRole::Fundamental);
        assert_eq!(flipped.order, BigUint::from(6u32));
    }

    #[test]
    fn report_serialises() {
        let mut store = PermStore::new();
        let a = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
        let report = analyze_generators(&mut store, &[a]);
        let json = serde_json::to_string(&report).unwrap();
        let back: GeneratorReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
