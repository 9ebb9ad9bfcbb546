use rust_ctp::core::{TravellerConfig, VertexId};
use rust_ctp::game::{EdgeBanValidator, EdgeStepValidator, PassiveAdversary, RandomBanAdversary, Roles, Round};
use rust_ctp::graph::{Graph, GraphBuilder, GraphView};
use rust_ctp::travellers::{AdaptiveTraveller, ShortestPathTraveller};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        computing_grid_shortest_path,
        cloning_grid_snapshot,
        playing_shortest_path_round,
        playing_adaptive_round_under_random_bans,
}

const SIDE: u32 = 24;

/// `SIDE x SIDE` grid, vertex `r * SIDE + c + 1`.
fn grid() -> Graph {
    let id = |r: u32, c: u32| VertexId(r * SIDE + c + 1);
    let mut builder = GraphBuilder::undirected();
    for r in 0..SIDE {
        for c in 0..SIDE {
            if c + 1 < SIDE {
                builder = builder.with_edge(id(r, c), id(r, c + 1));
            }
            if r + 1 < SIDE {
                builder = builder.with_edge(id(r, c), id(r + 1, c));
            }
        }
    }
    builder.build().expect("grid is valid")
}

fn corners() -> (VertexId, VertexId) {
    (VertexId(1), VertexId(SIDE * SIDE))
}

fn computing_grid_shortest_path(c: &mut criterion::Criterion) {
    let graph = grid();
    let (source, target) = corners();
    c.bench_function("shortest path across a 24x24 grid", |b| {
        b.iter(|| graph.shortest_path(source, target))
    });
}

fn cloning_grid_snapshot(c: &mut criterion::Criterion) {
    let graph = grid();
    c.bench_function("snapshot a 24x24 grid", |b| b.iter(|| graph.clone()));
}

fn playing_shortest_path_round(c: &mut criterion::Criterion) {
    let graph = grid();
    let (source, target) = corners();
    c.bench_function("play a passive round with the shortest-path traveller", |b| {
        b.iter(|| {
            let roles = Roles::new(
                ShortestPathTraveller::new(target),
                PassiveAdversary,
                EdgeBanValidator,
                EdgeStepValidator,
            );
            Round::new(graph.clone(), source, target, roles).run()
        })
    });
}

fn playing_adaptive_round_under_random_bans(c: &mut criterion::Criterion) {
    let graph = grid();
    let (source, target) = corners();
    c.bench_function("play an adaptive round against 64 random bans", |b| {
        b.iter(|| {
            let traveller = AdaptiveTraveller::new(&graph, source, target, TravellerConfig::default())
                .expect("corners are connected");
            let adversary = RandomBanAdversary::new(&graph, 64, 7);
            let roles = Roles::new(traveller, adversary, EdgeBanValidator, EdgeStepValidator);
            Round::new(graph.clone(), source, target, roles).run()
        })
    });
}
