use maxplus_lookup::*;
use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        filling_owned_lookup,
        reading_default_lookup,
        walking_int_lookup,
        initializing_random_strategy,
        following_strategy_play,
}

const STATES: usize = 1 << 12;
const DEGREE: usize = 4;

/// Bipartite game: even states belong to V0, odd to V1, every edge crosses sides.
fn bipartite() -> GameAutomaton {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut game = GameAutomaton::new();
    let states = (0..STATES)
        .map(|t| game.add_state(StateLabel::new(0, t)))
        .collect::<Vec<_>>();
    for (i, &src) in states.iter().enumerate() {
        match i % 2 {
            0 => game.add_v0(src),
            _ => game.add_v1(src),
        }
        for _ in 0..DEGREE {
            let j = rng.random_range(0..STATES / 2) * 2 + (1 - i % 2);
            let label = RewardLabel::new(rng.random_range(1.0..8.0), "A", rng.random());
            game.add_edge(src, label, states[j]);
        }
    }
    game
}

fn filling_owned_lookup(c: &mut criterion::Criterion) {
    c.bench_function("put 4K owned values", |b| {
        b.iter(|| {
            let mut lookup = Lookup::<NodeIndex, Vec<u8>>::new();
            for i in 0..STATES {
                lookup.put(NodeIndex::new(i), vec![0; 8]);
            }
            lookup
        })
    });
}

fn reading_default_lookup(c: &mut criterion::Criterion) {
    c.bench_function("materialize 4K default values", |b| {
        b.iter(|| {
            let mut lookup = DefaultLookup::<NodeIndex, f64>::new(f64::NEG_INFINITY);
            (0..STATES)
                .map(|i| lookup.get(NodeIndex::new(i)))
                .fold(0.0, f64::max)
        })
    });
}

fn walking_int_lookup(c: &mut criterion::Criterion) {
    let lookup = (0..STATES as i32).map(|i| (i, i)).collect::<IntIntLookup>();
    c.bench_function("iterate 4K int-int entries", |b| {
        b.iter(|| lookup.iter().map(|(_, v)| v as i64).sum::<i64>())
    });
}

fn initializing_random_strategy(c: &mut criterion::Criterion) {
    #[cfg(feature = "logging")]
    maxplus_lookup::log("logs", log::LevelFilter::Debug).expect("initialize bench logging");
    let game = bipartite();
    c.bench_function("initialize strategy over 2K controlled states", |b| {
        let mut strategy = StrategyVector::<NodeIndex, EdgeIndex>::default();
        b.iter(|| strategy.initialize_random_strategy(&game).expect("total game"))
    });
}

fn following_strategy_play(c: &mut criterion::Criterion) {
    let game = bipartite();
    let mut v0 = StrategyVector::<NodeIndex, EdgeIndex>::new(Player::V0);
    let mut v1 = StrategyVector::<NodeIndex, EdgeIndex>::new(Player::V1);
    v0.initialize_random_strategy(&game).expect("total game");
    v1.initialize_random_strategy(&game).expect("total game");
    c.bench_function("follow play to its cycle", |b| {
        b.iter(|| Play::follow(&game, &v0, &v1, NodeIndex::new(0)).expect("fixed strategies"))
    });
}
