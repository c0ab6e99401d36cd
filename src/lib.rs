//! # Red/Blue Removal-Game Solvers
//!
//! A library for studying a combinatorial removal game on two-colored graphs:
//! every node and every directed edge carries a color; removing a node
//! propagates its outgoing edges' colors onto the nodes they point to, then
//! deletes the node and its incident edges. A removal counts when the node
//! holds the chosen target color at the instant it is removed, and the goal
//! is a removal order that maximizes (or exactly achieves) a score over the
//! matching removals, even as the colors shift while the order proceeds.
//!
//! This crate provides:
//! - Two graph representations with the same propagating-removal contract: a
//!   fixed-capacity array-backed path graph, and an adjacency-map graph for
//!   arbitrary directed topologies.
//! - An exact existence query and a pruned best-effort maximizer over the
//!   general graph (scoring consecutive streaks of matching removals).
//! - Two fast path-specialized heuristics (scoring total matching removals):
//!   a single-pass greedy scan with lookahead flushes, and an insertion
//!   ordering driven by a pairwise comparator.
//!
//! ## Quick Start
//!
//! ```
//! use redblue::graph::{Color, ColoredGraph};
//! use redblue::search::{exists_run, maximize_run};
//!
//! // Removing the red node 0 first pushes red onto node 1 over the red
//! // edge, so a streak of three red removals exists.
//! let mut graph = ColoredGraph::new(3);
//! graph.create_node(Color::Red, 0).unwrap();
//! graph.create_node(Color::Blue, 1).unwrap();
//! graph.create_node(Color::Red, 2).unwrap();
//! graph.add_edge(0, 1, Color::Red).unwrap();
//!
//! assert!(exists_run(&graph, Color::Red, 3).is_some());
//! let (best, order) = maximize_run(&graph, Color::Red);
//! assert_eq!(best, 3);
//! assert_eq!(order.len(), 3);
//! ```
//!
//! ## Path Graphs and Heuristics
//!
//! ```
//! use redblue::graph::Color;
//! use redblue::greedy::greedy_max_run;
//! use redblue::path::PathGraph;
//!
//! let mut path = PathGraph::new(3);
//! path.create_node(Color::Red, 0).unwrap();
//! path.create_node(Color::Blue, 1).unwrap();
//! path.create_node(Color::Red, 2).unwrap();
//! path.add_edge(0, 1, Color::Red).unwrap();
//!
//! // The scan banks all three nodes red.
//! let order = greedy_max_run(&path, Color::Red);
//! assert_eq!(order.len(), 3);
//! println!("{path}"); // [RED]-RED->[BLUE]   [RED]
//! ```
//!
//! ## Random Instances
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use redblue::path::PathGraph;
//!
//! // Generators are injected and caller-seeded; nothing reads the clock.
//! let mut rng = SmallRng::seed_from_u64(7);
//! let path = PathGraph::new_random(10, &mut rng, 0.5, 0.5, 0.5);
//! assert_eq!(path.size(), 10);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: colors, the error taxonomy, and the general adjacency-map
//!   graph.
//! - [`path`]: the array-backed path graph with random regeneration and
//!   text rendering.
//! - [`search`]: exact/bounded best-first search over graph copies.
//! - [`greedy`]: the single-pass path scan with lookahead flushes.
//! - [`ordering`]: comparator-driven removal ordering.
//!
//! ## Performance Notes
//!
//! - Every explored search branch owns a full graph copy; keep capacities
//!   small (roughly a dozen nodes) when calling [`search::exists_run`] or
//!   [`search::maximize_run`].
//! - The path heuristics are linear-ish scans and handle large capacities;
//!   they trade optimality for speed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)] // Cargo.lock management is external

pub mod graph;
pub mod greedy;
pub mod ordering;
pub mod path;
pub mod search;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::graph::{Color, ColoredGraph, GraphError, Node};
    pub use crate::greedy::greedy_max_run;
    pub use crate::ordering::ordered_heuristic_max_run;
    pub use crate::path::{Edge, PathGraph};
    pub use crate::search::{exists_run, maximize_run};
}
