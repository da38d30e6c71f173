use criterion::{criterion_group, criterion_main, Criterion};
use sym_chain::StabilizerChain;
use sym_core::RngHandle;
use sym_store::{parse_cycles, PermStore};

fn symmetric_generators(store: &mut PermStore, degree: u32) -> Vec<sym_core::PermId> {
    let swap = store.register(&parse_cycles("(1 2)").unwrap()).unwrap();
    let cycle_text = format!(
        "({})",
        (1..=degree).map(|p| p.to_string()).collect::<Vec<_>>().join(" ")
    );
    let cycle = store.register(&parse_cycles(&cycle_text).unwrap()).unwrap();
    vec![swap, cycle]
}

fn bench_chain_build(c: &mut Criterion) {
    c.bench_function("chain_build_s8", |b| {
        b.iter(|| {
            let mut store = PermStore::new();
            let gens = symmetric_generators(&mut store, 8);
            let chain = StabilizerChain::from_generators(&mut store, &gens);
            assert_eq!(chain.depth(), 7);
            chain
        })
    });
}

fn bench_membership(c: &mut Criterion) {
    let mut store = PermStore::new();
    let gens = symmetric_generators(&mut store, 10);
    let chain = StabilizerChain::from_generators(&mut store, &gens);
    let mut rng = RngHandle::from_seed(99);
    let probes: Vec<_> = (0..64)
        .map(|_| chain.random_element(&mut store, &mut rng))
        .collect();

    c.bench_function("chain_contains_s10", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &g in &probes {
                if chain.contains(&store, g) {
                    hits += 1;
                }
            }
            assert_eq!(hits, probes.len());
            hits
        })
    });
}

criterion_group!(benches, bench_chain_build, bench_membership);
criterion_main!(benches);
