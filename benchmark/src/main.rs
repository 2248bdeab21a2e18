use fnv::FnvHashMap;
use rand::Rng;
use rayon::prelude::*;
use road_search::{prelude::*, BuildConfig};
use std::time::{Duration, Instant};

const DEFAULT_ROUNDS: usize = 20;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: benchmark <graph.json> [rounds]");
        std::process::exit(1);
    };
    let rounds = args
        .next()
        .and_then(|rounds| rounds.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);

    let start_time = Instant::now();
    let graph = match WeightedGraph::from_path_with_config(&path, BuildConfig::TOLERANT) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("failed to load {}: {}", path, err);
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} Nodes and {} Edges in {:.3}ms",
        graph.node_count(),
        graph.edge_count(),
        as_millis(start_time.elapsed())
    );

    let mut ids: Vec<NodeID> = graph.nodes().map(|node| node.id).collect();
    ids.sort_unstable();
    if ids.len() < 2 {
        eprintln!("graph needs at least two Nodes");
        std::process::exit(1);
    }

    let mut rng = rand::thread_rng();

    // (time, visited, path cost)
    let mut results: FnvHashMap<Algorithm, Vec<(Duration, usize, Option<f64>)>> =
        Algorithm::ALL.iter().map(|&a| (a, vec![])).collect();

    for _ in 0..rounds {
        let start = ids[rng.gen_range(0..ids.len())];
        let end = ids[rng.gen_range(0..ids.len())];

        let timed: Vec<_> = Algorithm::ALL
            .par_iter()
            .map(|&algorithm| {
                let start_time = Instant::now();
                let result = algorithm.run(&graph, start, end);
                (algorithm, start_time.elapsed(), result)
            })
            .collect();

        for (algorithm, dt, result) in timed {
            let result = match result {
                Ok(result) => result,
                Err(err) => {
                    log::warn!("{} {} -> {}: {}", algorithm, start, end, err);
                    continue;
                }
            };
            let cost = result.is_found().then(|| result.cost(&graph));
            if let Some(entries) = results.get_mut(&algorithm) {
                entries.push((dt, result.visited_in_order.len(), cost));
            }
        }
    }

    let best: Vec<Option<f64>> = results[&Algorithm::Dijkstra]
        .iter()
        .map(|(_, _, cost)| *cost)
        .collect();

    println!("algorithm | min - max; avg time | avg visited | avg cost vs. optimal");
    for algorithm in Algorithm::ALL {
        let results = &results[&algorithm];
        if results.is_empty() {
            continue;
        }
        let times = results.iter().map(|r| as_millis(r.0));
        let min_time = times.clone().fold(f64::INFINITY, f64::min);
        let max_time = times.clone().fold(0.0_f64, f64::max);
        let avg_time = times.sum::<f64>() / results.len() as f64;
        let avg_visited =
            results.iter().map(|r| r.1).sum::<usize>() as f64 / results.len() as f64;

        let ratios: Vec<f64> = results
            .iter()
            .zip(best.iter())
            .filter_map(|(r, best)| match (r.2, best) {
                (Some(cost), Some(best)) if *best > 0.0 => Some(cost / best),
                _ => None,
            })
            .collect();
        let avg_ratio = if ratios.is_empty() {
            1.0
        } else {
            ratios.iter().sum::<f64>() / ratios.len() as f64
        };

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | {:.1} | {:.2}%",
            algorithm,
            min_time,
            max_time,
            avg_time,
            avg_visited,
            avg_ratio * 100.0,
        );
    }
}

fn as_millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
