use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use redblue::graph::{Color, ColoredGraph, GraphError};
use redblue::greedy::greedy_max_run;
use redblue::ordering::ordered_heuristic_max_run;
use redblue::path::PathGraph;
use redblue::search::{exists_run, maximize_run};
use std::time::Instant;

/// Probability values swept for node and edge colors.
const SWEEP_GRID: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];

struct SweepConfig {
    capacity: usize,
    trials: usize,
    seed: Option<u64>,
    exact: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            trials: 200,
            seed: None,
            exact: false,
        }
    }
}

fn main() {
    let mut cfg = SweepConfig::default();
    let mut mode: Option<&str> = None;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "demo" if mode.is_none() => {
                mode = Some("demo");
                i += 1;
            }
            "sweep" if mode.is_none() => {
                mode = Some("sweep");
                i += 1;
            }
            "--capacity" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.capacity = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--trials" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.trials = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--seed" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.seed = Some(v.parse().unwrap_or_else(|_| usage_and_exit(2)));
                i += 2;
            }
            "--exact" => {
                cfg.exact = true;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    match mode.unwrap_or("demo") {
        "sweep" => run_sweep(&cfg),
        _ => {
            if let Err(e) = run_demo() {
                eprintln!("demo graph construction failed: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  redblue demo\n  redblue sweep [--capacity N] [--trials T] [--seed SEED] [--exact]\n\nOptions:\n  --capacity N   Path length for the sweep (default: 10)\n  --trials T     Random instances per probability cell (default: 200)\n  --seed SEED    Deterministic base seed (default: random)\n  --exact        Also run the exact-search maximizer per instance (slow;\n                 keep the capacity near 10 or below)\n"
    );
    std::process::exit(code)
}

// ============================================================================
// Demo
// ============================================================================

/// The original 9-slot demonstration instance: node 0 is deliberately absent.
fn demo_graph() -> Result<ColoredGraph, GraphError> {
    let mut graph = ColoredGraph::new(9);
    graph.create_node(Color::Blue, 1)?;
    graph.create_node(Color::Red, 2)?;
    graph.create_node(Color::Red, 3)?;
    graph.create_node(Color::Blue, 4)?;
    graph.create_node(Color::Red, 5)?;
    graph.create_node(Color::Blue, 6)?;
    graph.create_node(Color::Blue, 7)?;
    graph.create_node(Color::Red, 8)?;

    graph.add_edge(1, 2, Color::Blue)?;
    graph.add_edge(1, 8, Color::Blue)?;
    graph.add_edge(2, 1, Color::Red)?;
    graph.add_edge(2, 3, Color::Blue)?;
    graph.add_edge(2, 7, Color::Blue)?;
    graph.add_edge(3, 6, Color::Blue)?;
    graph.add_edge(3, 7, Color::Red)?;
    graph.add_edge(4, 3, Color::Red)?;
    graph.add_edge(4, 5, Color::Red)?;
    graph.add_edge(4, 6, Color::Blue)?;
    graph.add_edge(5, 6, Color::Red)?;
    graph.add_edge(5, 7, Color::Blue)?;
    graph.add_edge(6, 3, Color::Blue)?;
    graph.add_edge(8, 7, Color::Red)?;
    Ok(graph)
}

fn run_demo() -> Result<(), GraphError> {
    let graph = demo_graph()?;
    println!("{graph}");

    let start = Instant::now();
    let sequence = exists_run(&graph, Color::Red, 7);
    let elapsed = start.elapsed();
    match &sequence {
        Some(path) => {
            let ids: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("Streak of 7 found: {}", ids.join(" "));
        }
        None => println!("Streak of 7 not found"),
    }
    println!("Elapsed: {} us", elapsed.as_micros());

    let start = Instant::now();
    let (best, path) = maximize_run(&graph, Color::Red);
    let elapsed = start.elapsed();
    let ids: Vec<String> = path.iter().map(ToString::to_string).collect();
    println!("Best streak ({best} red nodes removed): {}", ids.join(" "));
    println!("Elapsed: {} us", elapsed.as_micros());
    Ok(())
}

// ============================================================================
// Probability sweep
// ============================================================================

/// Mean scores for one `(p_node, p_edge)` cell.
struct CellResult {
    p_node: f64,
    p_edge: f64,
    greedy_mean: f64,
    ordered_mean: f64,
    exact_mean: Option<f64>,
}

fn run_sweep(cfg: &SweepConfig) {
    let base_seed = cfg.seed.unwrap_or_else(rand::random::<u64>);
    println!("--------------------------------------------------");
    println!(
        "Probability sweep: capacity={} trials={} seed={base_seed}",
        cfg.capacity, cfg.trials
    );
    if cfg.exact && cfg.capacity > 12 {
        eprintln!("warning: --exact with capacity {} will be very slow", cfg.capacity);
    }
    println!("--------------------------------------------------");

    let cells: Vec<(f64, f64)> = SWEEP_GRID
        .iter()
        .flat_map(|&p_node| SWEEP_GRID.iter().map(move |&p_edge| (p_node, p_edge)))
        .collect();

    let results: Vec<CellResult> = cells
        .into_par_iter()
        .enumerate()
        .map(|(index, (p_node, p_edge))| {
            let mut rng = SmallRng::seed_from_u64(splitmix64(base_seed ^ (index as u64)));
            run_cell(cfg, p_node, p_edge, &mut rng)
        })
        .collect();

    let exact_header = if cfg.exact { "  exact-streak" } else { "" };
    println!("p_node  p_edge  greedy  ordered{exact_header}");
    for cell in &results {
        print!(
            "{:>6.2}  {:>6.2}  {:>6.3}  {:>7.3}",
            cell.p_node, cell.p_edge, cell.greedy_mean, cell.ordered_mean
        );
        if let Some(exact) = cell.exact_mean {
            print!("  {exact:>12.3}");
        }
        println!();
    }
}

fn run_cell(cfg: &SweepConfig, p_node: f64, p_edge: f64, rng: &mut SmallRng) -> CellResult {
    let mut greedy_total = 0usize;
    let mut ordered_total = 0usize;
    let mut exact_total = 0usize;
    let mut path = PathGraph::new(cfg.capacity);

    for _ in 0..cfg.trials {
        path.regenerate(rng, p_node, p_edge, 0.5);
        greedy_total += greedy_max_run(&path, Color::Red).len();
        ordered_total += ordered_heuristic_max_run(&path, Color::Red).len();
        if cfg.exact {
            let general = ColoredGraph::from(&path);
            exact_total += maximize_run(&general, Color::Red).0;
        }
    }

    let trials = cfg.trials.max(1) as f64;
    CellResult {
        p_node,
        p_edge,
        greedy_mean: greedy_total as f64 / trials,
        ordered_mean: ordered_total as f64 / trials,
        exact_mean: cfg.exact.then(|| exact_total as f64 / trials),
    }
}

/// Cheap deterministic seed mixer for per-cell generators.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// Tests
// ============================================================================
