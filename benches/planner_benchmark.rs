use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use route_planner::prelude::*;

/// A square grid with roughly `blocked_percent` percent of the cells blocked
fn random_grid(size: usize, blocked_percent: u32, connectivity: Connectivity) -> GridGraph {
    let mut rng = WyRand::new_seed(4);
    let mut grid = GridGraph::from_fn((size, size), connectivity, |_, _| {
        rng.generate_range(0_u32..100) < blocked_percent
    });
    grid.set_blocked(0, 0, false);
    grid.set_blocked(size - 1, size - 1, false);
    grid
}

/// A road map with `size * size` crossings, connected by horizontal and vertical ways
fn road_map(size: usize) -> MapGraph {
    let mut builder = MapGraph::builder();
    let step = 1.0 / (size - 1) as f64;
    let mut ids = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            ids.push(builder.add_node((x as f64 * step, y as f64 * step)).unwrap());
        }
    }
    for i in 0..size {
        let row = (0..size).map(|x| ids[x + i * size]).collect::<Vec<_>>();
        let column = (0..size).map(|y| ids[i + y * size]).collect::<Vec<_>>();
        builder.add_way(&row).unwrap();
        builder.add_way(&column).unwrap();
    }
    builder.metric_scale(10_000.0).build().unwrap()
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to log every expansion.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid Search");
    group.sample_size(10);

    // init();

    for size in [64, 256] {
        for (name, config) in [
            ("First Discovery", PlannerConfig::default()),
            ("Classical", PlannerConfig::CLASSICAL),
        ] {
            let grid = GridGraph::new(size, size, Connectivity::Eight);
            let id = format!("Uniform Grid, {}, Size: ({}, {})", name, size, size);
            group.bench_function(&id, |b| {
                b.iter(|| {
                    let mut planner =
                        RoutePlanner::with_config(&grid, (0.0, 0.0), (100.0, 100.0), config)
                            .unwrap();
                    planner.run_search()
                })
            });

            let grid = random_grid(size, 25, Connectivity::Four);
            let id = format!("Random Grid, {}, Size: ({}, {})", name, size, size);
            group.bench_function(&id, |b| {
                b.iter(|| {
                    let mut planner =
                        RoutePlanner::with_config(&grid, (0.0, 0.0), (100.0, 100.0), config)
                            .unwrap();
                    planner.run_search()
                })
            });
        }
    }
}

fn bench_map_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Map Search");
    group.sample_size(10);

    let graph = road_map(100);

    group.bench_function("Closest Node, 100x100 crossings", |b| {
        b.iter(|| graph.find_closest_node((0.37, 0.81)))
    });

    group.bench_function("Route, 100x100 crossings", |b| {
        b.iter(|| {
            let mut planner = RoutePlanner::new(&graph, (2.0, 3.0), (97.0, 95.0)).unwrap();
            planner.run_search()
        })
    });

    // the Planner owns its search state, so repeated searches reuse the allocations
    let mut planner = RoutePlanner::new(&graph, (2.0, 97.0), (97.0, 2.0)).unwrap();
    group.bench_function("Repeated Route, 100x100 crossings", |b| {
        b.iter(|| planner.run_search())
    });
}

criterion_group!(benches, bench_grid_search, bench_map_search);
criterion_main!(benches);
